//! Automation entity - a periodic numeric tracker such as a recurring
//! savings contribution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::AutomationId;
use crate::domain::recurrence::{RecurrenceKind, RecurrenceRule, RuleError};

/// A scheduled numeric accrual toward a target value.
///
/// `current_value` only ever changes through the accrual engine's explicit
/// apply operation, never implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Automation {
    pub id: AutomationId,
    pub name: String,
    pub target_value: f64,
    pub current_value: f64,
    /// Signed delta applied per occurrence.
    pub update_value: f64,
    #[serde(default)]
    pub rule: Option<RecurrenceRule>,
    #[serde(default)]
    pub is_active: bool,
}

impl Automation {
    /// Creates an active automation.
    ///
    /// Automation schedules are restricted to `Daily`, `Weekly`, and
    /// `Monthly` cadences (or none at all); the agenda-only kinds are
    /// rejected at construction.
    pub fn try_new(
        name: impl Into<String>,
        target_value: f64,
        update_value: f64,
        rule: Option<RecurrenceRule>,
    ) -> Result<Self, RuleError> {
        if let Some(rule) = &rule {
            match rule.kind() {
                RecurrenceKind::Daily | RecurrenceKind::Weekly | RecurrenceKind::Monthly => {}
                kind @ (RecurrenceKind::Custom | RecurrenceKind::AlwaysShow) => {
                    return Err(RuleError::KindNotAllowed { kind });
                }
            }
        }
        Ok(Self {
            id: AutomationId::new(),
            name: name.into(),
            target_value,
            current_value: 0.0,
            update_value,
            rule,
            is_active: true,
        })
    }

    /// Sets the starting value.
    pub fn with_current_value(mut self, current_value: f64) -> Self {
        self.current_value = current_value;
        self
    }

    /// Deactivates the automation; inactive automations are never due.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// The completion ratio, clamped to [0, 1], with the degenerate-target
    /// policy (non-positive target reads as zero progress).
    pub fn progress_ratio(&self) -> f64 {
        if self.target_value <= 0.0 {
            debug!(
                automation = %self.id,
                target_value = self.target_value,
                "degenerate automation target, treating ratio as zero"
            );
            return 0.0;
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }
}
