//! # u-blocking
//!
//! Minimum-fleet vehicle scheduling. Given timetabled trips and deadhead
//! times between terminals, finds the fewest vehicles that can operate every
//! trip and the sequence of trips (block) each vehicle runs.
//!
//! The vehicle count is the size of a minimum path cover of the trip
//! feasibility graph, computed as `trips - maximum bipartite matching`.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Trip, Terminal, Block, Schedule)
//! - [`deadhead`]: Deadhead time matrix between terminals
//! - [`validation`]: Input checks run before scheduling
//! - [`graph`]: Trip feasibility graph
//! - [`matching`]: Maximum bipartite matching (augmenting paths, unit flow)
//! - [`chain`]: Block reconstruction from a matching
//! - [`evaluation`]: Schedule coverage and feasibility checking
//! - [`solver`]: The end-to-end scheduling pipeline
//! - `json`: JSON request adapter (feature `json`)

pub mod chain;
pub mod config;
pub mod deadhead;
pub mod error;
pub mod evaluation;
pub mod graph;
#[cfg(feature = "json")]
pub mod json;
pub mod matching;
pub mod models;
pub mod solver;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use error::ScheduleError;
pub use solver::{solve, BlockScheduler};
