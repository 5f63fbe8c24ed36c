//! Vehicle block type.

use super::{Minutes, Trip, TripId};
use serde::{Deserialize, Serialize};

/// An ordered sequence of trips operated by a single vehicle.
///
/// Blocks hold full trip records in execution order. Serialized as a plain
/// array of trips.
///
/// # Examples
///
/// ```
/// use u_blocking::models::{Block, Trip};
///
/// let mut block = Block::new();
/// block.push_trip(Trip::new(1, "a", 420, "b", 445));
/// block.push_trip(Trip::new(7, "a", 515, "d", 545));
/// assert_eq!(block.len(), 2);
/// assert_eq!(block.trip_ids(), vec![1, 7]);
/// assert_eq!(block.start_time(), Some(420));
/// assert_eq!(block.end_time(), Some(545));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    trips: Vec<Trip>,
}

impl Block {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self { trips: Vec::new() }
    }

    /// Creates a block from trips already in execution order.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    /// Appends a trip to the end of this block.
    pub fn push_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Returns the trips in execution order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Number of trips in this block.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns `true` if this block has no trips.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Returns the trip IDs in execution order.
    pub fn trip_ids(&self) -> Vec<TripId> {
        self.trips.iter().map(|t| t.id()).collect()
    }

    /// Departure time of the first trip.
    pub fn start_time(&self) -> Option<Minutes> {
        self.trips.first().map(|t| t.departure_time())
    }

    /// Arrival time of the last trip.
    pub fn end_time(&self) -> Option<Minutes> {
        self.trips.last().map(|t| t.arrival_time())
    }

    /// Consecutive trip pairs `(previous, next)`.
    pub fn links(&self) -> impl Iterator<Item = (&Trip, &Trip)> {
        self.trips.windows(2).map(|w| (&w[0], &w[1]))
    }
}
