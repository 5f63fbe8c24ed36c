//! Error types returned by the scheduling pipeline.

use crate::models::{Minutes, Terminal, TripId, Violation};
use std::fmt;

/// Why a trip was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTripReason {
    /// The trip arrives before it departs.
    ArrivalBeforeDeparture {
        /// Departure time.
        departure: Minutes,
        /// Arrival time.
        arrival: Minutes,
    },
    /// Another trip with the same ID precedes this one in the input.
    DuplicateId,
}

/// A trip that failed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTrip {
    /// The offending trip.
    pub trip_id: TripId,
    /// What is wrong with it.
    pub reason: InvalidTripReason,
}

impl fmt::Display for InvalidTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            InvalidTripReason::ArrivalBeforeDeparture { departure, arrival } => write!(
                f,
                "trip {} arrives at {} before departing at {}",
                self.trip_id, arrival, departure
            ),
            InvalidTripReason::DuplicateId => write!(f, "duplicate trip id {}", self.trip_id),
        }
    }
}

impl std::error::Error for InvalidTrip {}

/// A broken post-condition of the matching or block reconstruction.
///
/// These never occur on a correct implementation; they exist so that a defect
/// aborts the run instead of producing a wrong schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyViolation {
    /// Following successor links reached a trip that was already placed.
    ChainCycle {
        /// Trip reached twice.
        trip_id: TripId,
    },
    /// A trip was not placed in any block.
    TripNotCovered {
        /// Unplaced trip.
        trip_id: TripId,
    },
    /// The matching is not injective, pairs a trip with itself, or uses a
    /// pair that is not a feasibility edge.
    InvalidMatching,
    /// An augmenting path remains after matching.
    MatchingNotMaximum {
        /// Size of the matching that was found.
        size: usize,
    },
    /// The schedule evaluator reported violations.
    Evaluation(Vec<Violation>),
}

impl fmt::Display for ConsistencyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChainCycle { trip_id } => write!(f, "block chain revisits trip {trip_id}"),
            Self::TripNotCovered { trip_id } => write!(f, "trip {trip_id} was not placed in a block"),
            Self::InvalidMatching => write!(f, "matching is not a valid bipartite matching"),
            Self::MatchingNotMaximum { size } => {
                write!(f, "matching of size {size} still has an augmenting path")
            }
            Self::Evaluation(violations) => {
                write!(f, "schedule has {} violation(s)", violations.len())?;
                for v in violations {
                    write!(f, "; {v}")?;
                }
                Ok(())
            }
        }
    }
}

/// Errors produced while building a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A trip is malformed or duplicated.
    InvalidTrip(InvalidTrip),
    /// A terminal pair needed for a feasibility check has no deadhead time.
    MissingDeadheadEntry {
        /// Arrival terminal of the earlier trip.
        from: Terminal,
        /// Departure terminal of the later trip.
        to: Terminal,
    },
    /// More trips than the configured limit.
    InputTooLarge {
        /// Number of trips supplied.
        trips: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// An internal post-condition failed.
    InternalConsistency(ConsistencyViolation),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTrip(e) => write!(f, "Invalid trip: {e}"),
            Self::MissingDeadheadEntry { from, to } => {
                write!(f, "Missing deadhead entry from terminal '{from}' to terminal '{to}'")
            }
            Self::InputTooLarge { trips, limit } => {
                write!(f, "Input too large: {trips} trips exceeds the limit of {limit}")
            }
            Self::InternalConsistency(e) => write!(f, "Internal consistency error: {e}"),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTrip(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidTrip> for ScheduleError {
    fn from(e: InvalidTrip) -> Self {
        Self::InvalidTrip(e)
    }
}

impl From<ConsistencyViolation> for ScheduleError {
    fn from(e: ConsistencyViolation) -> Self {
        Self::InternalConsistency(e)
    }
}
