//! Schedule and violation types.

use super::{Block, Terminal, TripId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type of constraint violation in a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// A block references a trip that is not part of the input.
    UnknownTrip {
        /// Block index in the schedule.
        block_index: usize,
        /// Offending trip ID.
        trip_id: TripId,
    },
    /// A trip appears more than once across all blocks.
    DuplicateTrip {
        /// Offending trip ID.
        trip_id: TripId,
    },
    /// A trip of the input is not served by any block.
    UncoveredTrip {
        /// Trip ID.
        trip_id: TripId,
    },
    /// Two consecutive trips in a block cannot be chained.
    InfeasibleLink {
        /// Block index in the schedule.
        block_index: usize,
        /// Earlier trip.
        from: TripId,
        /// Later trip.
        to: TripId,
    },
    /// The deadhead matrix has no entry for a link in a block.
    MissingDeadhead {
        /// Block index in the schedule.
        block_index: usize,
        /// Arrival terminal of the earlier trip.
        from: Terminal,
        /// Departure terminal of the later trip.
        to: Terminal,
    },
    /// The block count does not match the reported vehicle count.
    VehicleCountMismatch {
        /// Number of blocks.
        blocks: usize,
        /// Reported minimum vehicle count.
        min_vehicles: usize,
    },
    /// A block contains no trips.
    EmptyBlock {
        /// Block index in the schedule.
        block_index: usize,
    },
}

/// A constraint violation in a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationType::UnknownTrip {
                block_index,
                trip_id,
            } => write!(f, "block {block_index} references unknown trip {trip_id}"),
            ViolationType::DuplicateTrip { trip_id } => {
                write!(f, "trip {trip_id} appears in more than one position")
            }
            ViolationType::UncoveredTrip { trip_id } => {
                write!(f, "trip {trip_id} is not covered by any block")
            }
            ViolationType::InfeasibleLink {
                block_index,
                from,
                to,
            } => write!(f, "block {block_index}: trip {to} cannot follow trip {from}"),
            ViolationType::MissingDeadhead {
                block_index,
                from,
                to,
            } => write!(f, "block {block_index}: no deadhead time from {from} to {to}"),
            ViolationType::VehicleCountMismatch {
                blocks,
                min_vehicles,
            } => write!(f, "{blocks} blocks for {min_vehicles} vehicles"),
            ViolationType::EmptyBlock { block_index } => write!(f, "block {block_index} is empty"),
        }
    }
}

/// The result of a scheduling run.
///
/// Holds the minimum number of vehicles and one block per vehicle.
///
/// # Examples
///
/// ```
/// use u_blocking::models::{Block, Schedule, Trip};
///
/// let block = Block::from_trips(vec![Trip::new(1, "a", 420, "b", 445)]);
/// let schedule = Schedule::new(1, 0, vec![block]);
/// assert_eq!(schedule.min_vehicles(), 1);
/// assert_eq!(schedule.num_trips(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    min_vehicles: usize,
    #[serde(default)]
    matching_size: usize,
    blocks: Vec<Block>,
}

impl Schedule {
    /// Creates a schedule.
    ///
    /// `min_vehicles` is kept as given; [`crate::evaluation::ScheduleEvaluator`]
    /// reports it if it differs from the number of blocks.
    pub fn new(min_vehicles: usize, matching_size: usize, blocks: Vec<Block>) -> Self {
        Self {
            min_vehicles,
            matching_size,
            blocks,
        }
    }

    /// Creates an empty schedule (no trips, no vehicles).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Minimum number of vehicles needed to cover all trips.
    pub fn min_vehicles(&self) -> usize {
        self.min_vehicles
    }

    /// Number of chained trip pairs in the underlying matching.
    pub fn matching_size(&self) -> usize {
        self.matching_size
    }

    /// Returns the blocks, one per vehicle.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of trips served across all blocks.
    pub fn num_trips(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum()
    }

    /// Trip IDs of every block, in block order.
    pub fn block_ids(&self) -> Vec<Vec<TripId>> {
        self.blocks.iter().map(|b| b.trip_ids()).collect()
    }
}
