//! Goal progress aggregation - one 0-100 signal per goal.

use crate::domain::foundation::Percentage;
use crate::domain::planning::DailyStep;
use crate::domain::tracking::{Goal, ProgressInput};

/// Ratio of completed to total steps linked to the goal.
///
/// Returns `None` when no steps are linked, so combined mode can tell
/// "no step signal" apart from "zero of many done".
fn step_ratio(goal: &Goal, steps: &[DailyStep]) -> Option<f64> {
    let linked: Vec<&DailyStep> = steps
        .iter()
        .filter(|step| step.goal_id == Some(goal.id))
        .collect();
    if linked.is_empty() {
        return None;
    }
    let completed = linked.iter().filter(|step| step.completed).count();
    Some(completed as f64 / linked.len() as f64)
}

/// Computes the goal's progress percentage from its input mode.
///
/// - `Manual` - the stored percent, clamped.
/// - `Steps` - completed over total linked steps; no steps is 0.
/// - `Metrics` - mean of the clamped metric ratios; no metrics is 0.
/// - `Combined` - equal-weight blend of step ratio and mean metric ratio;
///   when either side has no data the mode degrades to the other side
///   alone, and to 0 when neither exists.
pub fn goal_progress(goal: &Goal, steps: &[DailyStep]) -> Percentage {
    match goal.progress_input {
        ProgressInput::Manual { percent } => Percentage::new(percent),
        ProgressInput::Steps => {
            Percentage::from_ratio(step_ratio(goal, steps).unwrap_or(0.0))
        }
        ProgressInput::Metrics => {
            Percentage::from_ratio(goal.mean_metric_ratio().unwrap_or(0.0))
        }
        ProgressInput::Combined => {
            let combined = match (step_ratio(goal, steps), goal.mean_metric_ratio()) {
                (Some(step), Some(metric)) => 0.5 * step + 0.5 * metric,
                (Some(step), None) => step,
                (None, Some(metric)) => metric,
                (None, None) => 0.0,
            };
            Percentage::from_ratio(combined)
        }
    }
}
