//! Input validation for block scheduling.
//!
//! Checks the trip list before any graph or matching work. Detects:
//! - Inputs larger than the configured limit
//! - Trips that arrive before they depart
//! - Duplicate trip IDs
//!
//! Deadhead completeness is checked while building the feasibility graph,
//! since only the terminal pairs actually compared are required.

use crate::error::{InvalidTrip, InvalidTripReason, ScheduleError};
use crate::models::Trip;
use log::warn;
use std::collections::HashSet;

/// Validates a trip list against a size limit.
///
/// Trips are checked in input order and the first problem found is returned.
/// An empty list is valid.
///
/// # Examples
///
/// ```
/// use u_blocking::models::Trip;
/// use u_blocking::validation::validate_trips;
///
/// let trips = vec![Trip::new(1, "a", 420, "b", 445), Trip::new(1, "b", 450, "a", 470)];
/// assert!(validate_trips(&trips, 100).is_err());
/// assert!(validate_trips(&trips[..1], 100).is_ok());
/// ```
pub fn validate_trips(trips: &[Trip], max_trips: usize) -> Result<(), ScheduleError> {
    if trips.len() > max_trips {
        warn!("Rejecting {} trips, limit is {}", trips.len(), max_trips);
        return Err(ScheduleError::InputTooLarge {
            trips: trips.len(),
            limit: max_trips,
        });
    }

    let mut seen = HashSet::with_capacity(trips.len());
    for trip in trips {
        if !trip.is_well_formed() {
            warn!("Rejecting trip {}: arrives before departure", trip);
            return Err(InvalidTrip {
                trip_id: trip.id(),
                reason: InvalidTripReason::ArrivalBeforeDeparture {
                    departure: trip.departure_time(),
                    arrival: trip.arrival_time(),
                },
            }
            .into());
        }
        if !seen.insert(trip.id()) {
            warn!("Rejecting trip {}: duplicate id", trip);
            return Err(InvalidTrip {
                trip_id: trip.id(),
                reason: InvalidTripReason::DuplicateId,
            }
            .into());
        }
    }

    Ok(())
}
