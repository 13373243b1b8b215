//! Store Port - the write accessor for plan and entity mutations.
//!
//! Writes are keyed by entity id. The engine emits new records; the
//! surrounding system decides how they are persisted.

use thiserror::Error;

use crate::domain::automation::Automation;
use crate::domain::foundation::{AutomationId, PlanDate, StepId};
use crate::domain::planning::{DailyPlan, DailyStep};

/// Errors that can occur writing through the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Step {0} does not exist")]
    UnknownStep(StepId),

    #[error("Automation {0} does not exist")]
    UnknownAutomation(AutomationId),

    #[error("Store lock poisoned")]
    Poisoned,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize store state: {0}")]
    Serialization(String),
}

/// Port for persisting plans and entity field updates.
pub trait PlanStore: Send + Sync {
    /// Returns the plan for a date, creating an empty one lazily if the
    /// user never planned that day before.
    fn plan_for(&self, date: PlanDate) -> Result<DailyPlan, StoreError>;

    /// Persists a plan's committed ids for its date.
    fn save_plan(&self, plan: &DailyPlan) -> Result<(), StoreError>;

    /// Persists a step update, keyed by the step's id.
    fn save_step(&self, step: &DailyStep) -> Result<(), StoreError>;

    /// Persists an automation update, keyed by the automation's id.
    fn save_automation(&self, automation: &Automation) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_names_the_missing_step() {
        let id = StepId::new();
        let err = StoreError::UnknownStep(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn store_error_io_displays_reason() {
        let err = StoreError::Io("disk full".into());
        assert!(err.to_string().contains("disk full"));
    }
}
