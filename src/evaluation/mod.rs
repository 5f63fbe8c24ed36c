//! Schedule validity checking.
//!
//! Verifies that blocks cover every trip exactly once and that every pair of
//! consecutive trips in a block can be chained.

mod evaluator;

pub use evaluator::ScheduleEvaluator;
