//! GoalMetric - a numeric tracker attached to a goal.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A current/target numeric pair, e.g. "12 of 30 books".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalMetric {
    pub current_value: f64,
    pub target_value: f64,
    pub unit: String,
}

impl GoalMetric {
    /// Creates a metric.
    pub fn new(current_value: f64, target_value: f64, unit: impl Into<String>) -> Self {
        Self {
            current_value,
            target_value,
            unit: unit.into(),
        }
    }

    /// The completion ratio, clamped to [0, 1].
    ///
    /// A non-positive target is degenerate: the ratio is 0 rather than a
    /// division fault, and the coercion is logged as a data-quality signal.
    pub fn ratio(&self) -> f64 {
        if self.target_value <= 0.0 {
            debug!(
                target_value = self.target_value,
                unit = %self.unit,
                "degenerate metric target, treating ratio as zero"
            );
            return 0.0;
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }
}
