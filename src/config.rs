//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Default upper bound on the number of trips in one request.
pub const DEFAULT_MAX_TRIPS: usize = 10_000;

/// Settings for [`crate::solver::BlockScheduler`].
///
/// Deserializes with per-field defaults, so `{}` is a valid configuration.
///
/// # Examples
///
/// ```
/// use u_blocking::config::SolverConfig;
///
/// let config = SolverConfig::default().with_max_trips(500).with_verify(false);
/// assert_eq!(config.max_trips, 500);
/// assert!(!config.verify);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of trips accepted; larger inputs fail with
    /// [`crate::error::ScheduleError::InputTooLarge`].
    pub max_trips: usize,
    /// Check matching maximality and the resulting schedule before returning.
    pub verify: bool,
}

impl SolverConfig {
    /// Sets the maximum number of trips.
    pub fn with_max_trips(mut self, max_trips: usize) -> Self {
        self.max_trips = max_trips;
        self
    }

    /// Enables or disables post-condition checks.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_trips: DEFAULT_MAX_TRIPS,
            verify: true,
        }
    }
}
