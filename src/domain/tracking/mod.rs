//! Tracking module - the entity records the engine computes over.

mod aspiration;
mod goal;
mod habit;
mod metric;

pub use aspiration::Aspiration;
pub use goal::{Goal, ProgressInput};
pub use habit::Habit;
pub use metric::GoalMetric;
