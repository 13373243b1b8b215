//! Accrual engine - pure due-ness checks and increment application.
//!
//! Nothing here runs on a timer; an external scheduler invokes these once
//! per day per automation and persists the results.

use serde::Serialize;

use crate::domain::foundation::PlanDate;
use crate::domain::recurrence;

use super::Automation;

/// The result of applying one scheduled increment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccrualOutcome {
    /// The automation with the increment applied.
    pub automation: Automation,
    /// Amount by which the new current value exceeds the target; zero when
    /// still at or below it. Reported to the caller rather than silently
    /// truncated.
    pub overshoot: f64,
}

/// Returns true if the automation's scheduled increment is due on
/// `reference`.
///
/// Inactive automations are never due, regardless of rule; automations
/// without a rule have no schedule at all.
pub fn is_accrual_due(automation: &Automation, reference: PlanDate) -> bool {
    if !automation.is_active {
        return false;
    }
    match &automation.rule {
        Some(rule) => recurrence::is_due(rule, false, reference),
        None => false,
    }
}

/// Applies one increment: `current + update_value`.
///
/// The overshoot past the target is surfaced in the outcome for user
/// awareness; the stored value itself is not clamped, so a caller can
/// decide whether to cap, celebrate, or adjust the target. Overshoot is
/// measured in the direction of travel: a negative update value counts
/// down toward its target.
pub fn apply_accrual(automation: &Automation) -> AccrualOutcome {
    let mut updated = automation.clone();
    updated.current_value += updated.update_value;

    let past_target = if updated.update_value < 0.0 {
        updated.target_value - updated.current_value
    } else {
        updated.current_value - updated.target_value
    };
    AccrualOutcome {
        automation: updated,
        overshoot: past_target.max(0.0),
    }
}

/// Applies every automation whose schedule is due on `reference`.
///
/// Input order is preserved; automations that are not due are skipped.
pub fn run_due_accruals(automations: &[Automation], reference: PlanDate) -> Vec<AccrualOutcome> {
    automations
        .iter()
        .filter(|automation| is_accrual_due(automation, reference))
        .map(apply_accrual)
        .collect()
}
