//! Command line interface to the minimum-fleet block scheduler.
//!
//! Reads a JSON request (`trips` and `dh_matrix`) from a file or stdin and
//! writes the schedule as JSON.

use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use u_blocking::config::{SolverConfig, DEFAULT_MAX_TRIPS};
use u_blocking::json::{solve_request, JsonError, ScheduleRequest};

#[derive(Debug, Parser)]
#[command(name = "u-blocking", version, about = "Minimum-fleet vehicle block scheduler")]
struct Options {
    /// Request file; stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file; stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject requests with more trips than this.
    #[arg(long, default_value_t = DEFAULT_MAX_TRIPS)]
    max_trips: usize,

    /// Skip post-condition checks on the result.
    #[arg(long)]
    no_verify: bool,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &options.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = SolverConfig::default()
        .with_max_trips(options.max_trips)
        .with_verify(!options.no_verify);

    let request: ScheduleRequest = serde_json::from_str(&input).map_err(JsonError::from)?;
    log::info!("Scheduling {} trips", request.trips.len());
    let schedule = solve_request(&request, &config).map_err(JsonError::from)?;
    log::info!("{} vehicles required", schedule.min_vehicles());

    let mut rendered = if options.pretty {
        serde_json::to_string_pretty(&schedule)?
    } else {
        serde_json::to_string(&schedule)?
    };
    rendered.push('\n');

    match &options.output {
        Some(path) => fs::write(path, rendered)?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let options = Options::parse();

    if let Err(err) = run(&options) {
        eprintln!("{err}");
        process::exit(1);
    }
}
