//! Terminal and trip types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trip identifier.
pub type TripId = u64;

/// A point in time, in minutes (conventionally minutes from midnight).
pub type Minutes = i64;

/// A location where trips start or end.
///
/// Terminals are opaque names; they only need to be comparable.
///
/// # Examples
///
/// ```
/// use u_blocking::models::Terminal;
///
/// let a = Terminal::from("a");
/// assert_eq!(a.as_str(), "a");
/// assert!(a < Terminal::from("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Terminal(String);

impl Terminal {
    /// Creates a terminal with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Terminal name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Terminal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Terminal {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scheduled revenue trip.
///
/// Trips are read-only once created. Construction does not check that the
/// arrival is not before the departure; [`crate::validation::validate_trips`]
/// does, before any scheduling work starts.
///
/// # Examples
///
/// ```
/// use u_blocking::models::Trip;
///
/// let t = Trip::new(1, "a", 420, "b", 445);
/// assert_eq!(t.id(), 1);
/// assert_eq!(t.duration(), 25);
/// assert_eq!(t.arrival_terminal().as_str(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    id: TripId,
    #[serde(rename = "dep_term")]
    departure_terminal: Terminal,
    #[serde(rename = "dep_time")]
    departure_time: Minutes,
    #[serde(rename = "arr_term")]
    arrival_terminal: Terminal,
    #[serde(rename = "arr_time")]
    arrival_time: Minutes,
}

impl Trip {
    /// Creates a new trip.
    pub fn new(
        id: TripId,
        departure_terminal: impl Into<Terminal>,
        departure_time: Minutes,
        arrival_terminal: impl Into<Terminal>,
        arrival_time: Minutes,
    ) -> Self {
        Self {
            id,
            departure_terminal: departure_terminal.into(),
            departure_time,
            arrival_terminal: arrival_terminal.into(),
            arrival_time,
        }
    }

    /// Trip ID.
    pub fn id(&self) -> TripId {
        self.id
    }

    /// Terminal the trip leaves from.
    pub fn departure_terminal(&self) -> &Terminal {
        &self.departure_terminal
    }

    /// Departure time.
    pub fn departure_time(&self) -> Minutes {
        self.departure_time
    }

    /// Terminal the trip ends at.
    pub fn arrival_terminal(&self) -> &Terminal {
        &self.arrival_terminal
    }

    /// Arrival time.
    pub fn arrival_time(&self) -> Minutes {
        self.arrival_time
    }

    /// Time between departure and arrival.
    pub fn duration(&self) -> Minutes {
        self.arrival_time - self.departure_time
    }

    /// Returns `true` if the trip does not arrive before it departs.
    pub fn is_well_formed(&self) -> bool {
        self.arrival_time >= self.departure_time
    }

    /// Returns `true` if a vehicle finishing this trip can reach `next` in
    /// time when repositioning takes `deadhead` minutes.
    ///
    /// Only compares times; whether the pair is also ordered for blocking
    /// is decided by [`Trip::precedes`].
    pub fn can_reach(&self, next: &Trip, deadhead: u32) -> bool {
        self.arrival_time.saturating_add(Minutes::from(deadhead)) <= next.departure_time
    }

    /// Canonical order key: departure, then arrival, then ID.
    pub fn order_key(&self) -> (Minutes, Minutes, TripId) {
        (self.departure_time, self.arrival_time, self.id)
    }

    /// Returns `true` if this trip comes strictly before `other` in the
    /// canonical (departure, arrival, id) order.
    pub fn precedes(&self, other: &Trip) -> bool {
        self.order_key() < other.order_key()
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:({},{},{},{})",
            self.id,
            self.departure_terminal,
            self.departure_time,
            self.arrival_terminal,
            self.arrival_time
        )
    }
}
