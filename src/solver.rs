//! Minimum-fleet block scheduling.
//!
//! Runs the full pipeline: validation, feasibility graph, maximum matching,
//! block reconstruction, and (optionally) post-condition checks.
//!
//! The minimum vehicle count is `trips - matching size`: every matched pair
//! joins two trips into one block, so it saves exactly one vehicle
//! (minimum path cover of a DAG, Dilworth/König duality).

use crate::chain::reconstruct_blocks;
use crate::config::SolverConfig;
use crate::deadhead::DeadheadMatrix;
use crate::error::{ConsistencyViolation, ScheduleError};
use crate::evaluation::ScheduleEvaluator;
use crate::graph::FeasibilityGraph;
use crate::matching::{AugmentingPath, Matching, MaximumMatching};
use crate::models::{Schedule, Trip, Violation, ViolationType};
use crate::validation::validate_trips;
use log::{debug, warn};

/// Computes minimum-fleet schedules.
///
/// Holds only configuration; every call to [`BlockScheduler::solve`] works
/// on its own graph and matching, so one scheduler can serve concurrent
/// requests.
///
/// # Examples
///
/// ```
/// use u_blocking::config::SolverConfig;
/// use u_blocking::deadhead::DeadheadMatrix;
/// use u_blocking::models::Trip;
/// use u_blocking::solver::BlockScheduler;
///
/// let trips = vec![
///     Trip::new(1, "a", 420, "b", 445),
///     Trip::new(2, "b", 450, "a", 480),
///     Trip::new(3, "a", 430, "b", 460),
/// ];
/// let mut dh = DeadheadMatrix::new();
/// for from in ["a", "b"] {
///     for to in ["a", "b"] {
///         dh.insert(from, to, if from == to { 0 } else { 10 });
///     }
/// }
///
/// let scheduler = BlockScheduler::new(SolverConfig::default());
/// let schedule = scheduler.solve(&trips, &dh).unwrap();
/// assert_eq!(schedule.min_vehicles(), 2);
/// assert_eq!(schedule.block_ids(), vec![vec![1, 2], vec![3]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockScheduler {
    config: SolverConfig,
}

impl BlockScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Covers `trips` with the fewest vehicles.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::InputTooLarge`] and [`ScheduleError::InvalidTrip`]
    ///   from validation.
    /// - [`ScheduleError::MissingDeadheadEntry`] if `deadheads` lacks a pair
    ///   needed to compare two trips.
    /// - [`ScheduleError::InternalConsistency`] if a post-condition fails.
    ///
    /// All input errors are reported before matching starts.
    pub fn solve(
        &self,
        trips: &[Trip],
        deadheads: &DeadheadMatrix,
    ) -> Result<Schedule, ScheduleError> {
        validate_trips(trips, self.config.max_trips)?;
        if trips.is_empty() {
            debug!("No trips to schedule");
            return Ok(Schedule::empty());
        }

        let graph = FeasibilityGraph::build(trips, deadheads)?;
        let matching = AugmentingPath.maximum_matching(&graph);
        let min_vehicles = graph.num_nodes() - matching.size();
        debug!(
            "Matched {} of {} trips, {} vehicles required",
            matching.size(),
            graph.num_nodes(),
            min_vehicles
        );

        let blocks = reconstruct_blocks(&graph, &matching)?;
        if blocks.len() != min_vehicles {
            warn!(
                "Reconstructed {} blocks for {} vehicles",
                blocks.len(),
                min_vehicles
            );
            return Err(ConsistencyViolation::Evaluation(vec![Violation::new(
                ViolationType::VehicleCountMismatch {
                    blocks: blocks.len(),
                    min_vehicles,
                },
            )])
            .into());
        }

        let schedule = Schedule::new(min_vehicles, matching.size(), blocks);
        if self.config.verify {
            verify(&graph, &matching, trips, deadheads, &schedule)?;
        }

        Ok(schedule)
    }
}

/// Checks that the matching is valid and maximum and that the schedule
/// partitions the trips into feasible blocks.
fn verify(
    graph: &FeasibilityGraph,
    matching: &Matching,
    trips: &[Trip],
    deadheads: &DeadheadMatrix,
    schedule: &Schedule,
) -> Result<(), ConsistencyViolation> {
    if !matching.is_valid(graph) {
        return Err(ConsistencyViolation::InvalidMatching);
    }
    if !matching.is_maximum(graph) {
        return Err(ConsistencyViolation::MatchingNotMaximum {
            size: matching.size(),
        });
    }
    let violations = ScheduleEvaluator::new(trips, deadheads).evaluate(schedule);
    if !violations.is_empty() {
        return Err(ConsistencyViolation::Evaluation(violations));
    }
    debug!("Verified schedule of {} blocks", schedule.num_blocks());
    Ok(())
}

/// Covers `trips` with the fewest vehicles using the default configuration.
///
/// See [`BlockScheduler::solve`].
pub fn solve(trips: &[Trip], deadheads: &DeadheadMatrix) -> Result<Schedule, ScheduleError> {
    BlockScheduler::default().solve(trips, deadheads)
}
