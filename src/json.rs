//! JSON request/response adapter.
//!
//! Accepts the request shape of the scheduling web API:
//!
//! ```json
//! {
//!   "trips": [{"id": 1, "dep_term": "a", "dep_time": 420, "arr_term": "b", "arr_time": 445}],
//!   "dh_matrix": {"b": {"a": 15, "b": 0}}
//! }
//! ```
//!
//! and returns the [`Schedule`] as JSON.

use crate::config::SolverConfig;
use crate::deadhead::DeadheadMatrix;
use crate::error::ScheduleError;
use crate::models::{Schedule, Trip};
use crate::solver::BlockScheduler;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduling request: trips plus nested deadhead times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Trips to cover.
    pub trips: Vec<Trip>,
    /// Deadhead minutes, `dh_matrix[from][to]`.
    pub dh_matrix: DeadheadMatrix,
}

/// Errors from [`solve_json`].
#[derive(Debug)]
pub enum JsonError {
    /// The request could not be parsed or the schedule serialized.
    Json(serde_json::Error),
    /// The request was parsed but could not be scheduled.
    Schedule(ScheduleError),
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Schedule(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Schedule(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ScheduleError> for JsonError {
    fn from(e: ScheduleError) -> Self {
        Self::Schedule(e)
    }
}

/// Solves a parsed request.
pub fn solve_request(
    request: &ScheduleRequest,
    config: &SolverConfig,
) -> Result<Schedule, ScheduleError> {
    BlockScheduler::new(config.clone()).solve(&request.trips, &request.dh_matrix)
}

/// Parses a JSON request, solves it, and returns the schedule as compact JSON.
///
/// # Examples
///
/// ```
/// use u_blocking::config::SolverConfig;
/// use u_blocking::json::solve_json;
///
/// let input = r#"{
///     "trips": [
///         {"id": 1, "dep_term": "a", "dep_time": 0, "arr_term": "b", "arr_time": 10},
///         {"id": 2, "dep_term": "b", "dep_time": 20, "arr_term": "a", "arr_time": 30}
///     ],
///     "dh_matrix": {"a": {"a": 0, "b": 5}, "b": {"a": 5, "b": 0}}
/// }"#;
/// let output = solve_json(input, &SolverConfig::default()).unwrap();
/// let value: serde_json::Value = serde_json::from_str(&output).unwrap();
/// assert_eq!(value["min_vehicles"], 1);
/// ```
pub fn solve_json(input: &str, config: &SolverConfig) -> Result<String, JsonError> {
    let request: ScheduleRequest = serde_json::from_str(input)?;
    let schedule = solve_request(&request, config)?;
    Ok(serde_json::to_string(&schedule)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{reference_deadheads, reference_trips};
    use serde_json::{json, Value};

    fn reference_request() -> Value {
        json!({
            "trips": [
                {"id": 1, "dep_term": "a", "dep_time": 420, "arr_term": "b", "arr_time": 445},
                {"id": 2, "dep_term": "d", "dep_time": 420, "arr_term": "a", "arr_time": 455},
                {"id": 3, "dep_term": "b", "dep_time": 435, "arr_term": "c", "arr_time": 495},
                {"id": 4, "dep_term": "c", "dep_time": 450, "arr_term": "d", "arr_time": 515},
                {"id": 5, "dep_term": "a", "dep_time": 455, "arr_term": "d", "arr_time": 480},
                {"id": 6, "dep_term": "d", "dep_time": 480, "arr_term": "a", "arr_time": 510},
                {"id": 7, "dep_term": "a", "dep_time": 515, "arr_term": "d", "arr_time": 545},
                {"id": 8, "dep_term": "c", "dep_time": 545, "arr_term": "d", "arr_time": 600}
            ],
            "dh_matrix": serde_json::to_value(reference_deadheads()).expect("serializable")
        })
    }

    #[test]
    fn test_request_parses_web_shape() {
        let request: ScheduleRequest =
            serde_json::from_value(reference_request()).expect("valid request");
        assert_eq!(request.trips, reference_trips());
        assert_eq!(request.dh_matrix, reference_deadheads());
    }

    #[test]
    fn test_request_matrix_compares_by_entries() {
        let request: ScheduleRequest =
            serde_json::from_value(reference_request()).expect("valid request");
        let mut reversed = DeadheadMatrix::new();
        for (from, row) in reference_deadheads().to_nested().into_iter().rev() {
            for (to, minutes) in row {
                reversed.insert(from.clone(), to, minutes);
            }
        }
        assert_ne!(request.dh_matrix.terminals(), reversed.terminals());
        assert_eq!(request.dh_matrix, reversed);
    }

    #[test]
    fn test_solve_json_reference() {
        let output = solve_json(&reference_request().to_string(), &SolverConfig::default())
            .expect("valid request");
        let value: Value = serde_json::from_str(&output).expect("valid output");
        assert_eq!(value["min_vehicles"], 4);
        assert_eq!(value["matching_size"], 4);
        let blocks: Vec<Vec<u64>> = value["blocks"]
            .as_array()
            .expect("array")
            .iter()
            .map(|b| {
                b.as_array()
                    .expect("array")
                    .iter()
                    .map(|t| t["id"].as_u64().expect("id"))
                    .collect()
            })
            .collect();
        assert_eq!(blocks, vec![vec![1, 7], vec![2, 5, 6], vec![3, 8], vec![4]]);
    }

    #[test]
    fn test_solve_json_empty() {
        let output = solve_json(r#"{"trips": [], "dh_matrix": {}}"#, &SolverConfig::default())
            .expect("empty request");
        let value: Value = serde_json::from_str(&output).expect("valid output");
        assert_eq!(value, json!({"min_vehicles": 0, "matching_size": 0, "blocks": []}));
    }

    #[test]
    fn test_solve_json_malformed() {
        let err = solve_json("{\"trips\": 5}", &SolverConfig::default()).expect_err("bad shape");
        assert!(matches!(err, JsonError::Json(_)));
    }

    #[test]
    fn test_solve_json_schedule_error() {
        let mut request = reference_request();
        request["trips"][0]["arr_time"] = json!(400);
        let err = solve_json(&request.to_string(), &SolverConfig::default())
            .expect_err("arrival before departure");
        assert!(matches!(
            err,
            JsonError::Schedule(ScheduleError::InvalidTrip(_))
        ));
        assert!(err.to_string().starts_with("Invalid trip: trip 1"));
    }
}
