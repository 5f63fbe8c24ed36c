//! Domain model types for vehicle block scheduling.
//!
//! Provides the core abstractions: terminals, trips with departure and
//! arrival events, blocks as ordered trip sequences operated by one vehicle,
//! and the schedule returned by the solver.

mod block;
mod schedule;
mod trip;

pub use block::Block;
pub use schedule::{Schedule, Violation, ViolationType};
pub use trip::{Minutes, Terminal, Trip, TripId};
