//! Deadhead (empty repositioning) times between terminals.
//!
//! Provides a dense, sparse-aware matrix keyed by terminal name.

mod matrix;

pub use matrix::{DeadheadMatrix, NestedDeadheads};
