//! Vehicle block reconstruction.
//!
//! Turns a maximum matching into the blocks it describes: each matched pair
//! links two consecutive trips of the same vehicle.

mod reconstruct;

pub use reconstruct::reconstruct_blocks;
