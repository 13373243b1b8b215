//! Goal entity and its progress input mode.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AspirationId, GoalId, Percentage};

use super::GoalMetric;

/// How a goal's progress percentage is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProgressInput {
    /// The user sets the percentage by hand.
    Manual { percent: u8 },
    /// Ratio of completed to total linked steps.
    Steps,
    /// Mean of the goal's metric ratios.
    Metrics,
    /// Equal-weight blend of step ratio and mean metric ratio.
    Combined,
}

/// A goal the user is working toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    #[serde(default)]
    pub aspiration_id: Option<AspirationId>,
    pub name: String,
    pub progress_input: ProgressInput,
    #[serde(default)]
    pub metrics: Vec<GoalMetric>,
}

impl Goal {
    /// Creates a goal with the given progress input mode.
    pub fn new(name: impl Into<String>, progress_input: ProgressInput) -> Self {
        Self {
            id: GoalId::new(),
            aspiration_id: None,
            name: name.into(),
            progress_input,
            metrics: Vec::new(),
        }
    }

    /// Links the goal to an aspiration.
    pub fn with_aspiration(mut self, aspiration_id: AspirationId) -> Self {
        self.aspiration_id = Some(aspiration_id);
        self
    }

    /// Attaches a numeric metric.
    pub fn with_metric(mut self, metric: GoalMetric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// The manual percentage, clamped, when the goal is in manual mode.
    pub fn manual_percent(&self) -> Option<Percentage> {
        match self.progress_input {
            ProgressInput::Manual { percent } => Some(Percentage::new(percent)),
            _ => None,
        }
    }

    /// Mean of the clamped metric ratios; `None` when no metrics exist.
    pub fn mean_metric_ratio(&self) -> Option<f64> {
        if self.metrics.is_empty() {
            return None;
        }
        let sum: f64 = self.metrics.iter().map(GoalMetric::ratio).sum();
        Some(sum / self.metrics.len() as f64)
    }
}
