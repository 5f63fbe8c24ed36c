//! Trip feasibility graph.
//!
//! Derives the directed "can-follow" relation between trips from their
//! times and the deadhead matrix.

mod feasibility;

pub use feasibility::FeasibilityGraph;
