//! Schedule evaluator that checks coverage and link feasibility.

use crate::deadhead::DeadheadMatrix;
use crate::models::{Block, Schedule, Trip, TripId, Violation, ViolationType};
use std::collections::{HashMap, HashSet};

/// Checks a schedule against the trips and deadhead times it was built for.
///
/// A schedule is valid when its blocks partition the trips exactly, every
/// consecutive pair in a block can be chained, and the vehicle count equals
/// the number of blocks. Blocks are checked against the input trip records
/// (looked up by ID), not against the copies they carry.
///
/// # Examples
///
/// ```
/// use u_blocking::deadhead::DeadheadMatrix;
/// use u_blocking::evaluation::ScheduleEvaluator;
/// use u_blocking::models::{Block, Schedule, Trip};
///
/// let trips = vec![Trip::new(1, "a", 0, "b", 10), Trip::new(2, "b", 15, "a", 30)];
/// let mut dh = DeadheadMatrix::new();
/// dh.insert("b", "b", 0);
///
/// let schedule = Schedule::new(1, 1, vec![Block::from_trips(trips.clone())]);
/// let evaluator = ScheduleEvaluator::new(&trips, &dh);
/// assert!(evaluator.evaluate(&schedule).is_empty());
/// ```
pub struct ScheduleEvaluator<'a> {
    trips: &'a [Trip],
    deadheads: &'a DeadheadMatrix,
}

impl<'a> ScheduleEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(trips: &'a [Trip], deadheads: &'a DeadheadMatrix) -> Self {
        Self { trips, deadheads }
    }

    /// Checks the consecutive trips of one block.
    ///
    /// Trips are resolved through `by_id`; unknown IDs are reported and the
    /// links around them skipped.
    fn evaluate_block(
        &self,
        block_index: usize,
        block: &Block,
        by_id: &HashMap<TripId, &'a Trip>,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        if block.is_empty() {
            violations.push(Violation::new(ViolationType::EmptyBlock { block_index }));
            return violations;
        }

        for trip in block.trips() {
            if !by_id.contains_key(&trip.id()) {
                violations.push(Violation::new(ViolationType::UnknownTrip {
                    block_index,
                    trip_id: trip.id(),
                }));
            }
        }

        for (prev, next) in block.links() {
            let (Some(&from), Some(&to)) = (by_id.get(&prev.id()), by_id.get(&next.id())) else {
                continue;
            };
            match self
                .deadheads
                .get(from.arrival_terminal(), to.departure_terminal())
            {
                None => violations.push(Violation::new(ViolationType::MissingDeadhead {
                    block_index,
                    from: from.arrival_terminal().clone(),
                    to: to.departure_terminal().clone(),
                })),
                Some(deadhead) => {
                    if !(from.can_reach(to, deadhead) && from.precedes(to)) {
                        violations.push(Violation::new(ViolationType::InfeasibleLink {
                            block_index,
                            from: from.id(),
                            to: to.id(),
                        }));
                    }
                }
            }
        }

        violations
    }

    /// Evaluates a schedule and returns every violation found.
    ///
    /// An empty list means the schedule is valid.
    pub fn evaluate(&self, schedule: &Schedule) -> Vec<Violation> {
        let by_id: HashMap<TripId, &'a Trip> = self.trips.iter().map(|t| (t.id(), t)).collect();
        let mut all_violations = Vec::new();
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for (idx, block) in schedule.blocks().iter().enumerate() {
            all_violations.append(&mut self.evaluate_block(idx, block, &by_id));

            for trip in block.trips() {
                if !seen.insert(trip.id()) && reported.insert(trip.id()) {
                    all_violations.push(Violation::new(ViolationType::DuplicateTrip {
                        trip_id: trip.id(),
                    }));
                }
            }
        }

        for trip in self.trips {
            if !seen.contains(&trip.id()) {
                all_violations.push(Violation::new(ViolationType::UncoveredTrip {
                    trip_id: trip.id(),
                }));
            }
        }

        if schedule.num_blocks() != schedule.min_vehicles() {
            all_violations.push(Violation::new(ViolationType::VehicleCountMismatch {
                blocks: schedule.num_blocks(),
                min_vehicles: schedule.min_vehicles(),
            }));
        }

        all_violations
    }

    /// Returns `true` if the schedule has no violations.
    pub fn is_valid(&self, schedule: &Schedule) -> bool {
        self.evaluate(schedule).is_empty()
    }
}
