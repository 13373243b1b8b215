//! CompleteStepHandler - complete-and-retire through the store.
//!
//! Marks the underlying step completed while its id stays in the plan, so
//! the day's progress ratio never regresses when work is finished.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{PlanDate, StepId};
use crate::domain::planning::{DailyStep, PlanError};
use crate::ports::{PlanStore, SnapshotError, SnapshotReader, StoreError};

/// Errors raised by the complete command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompleteStepError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Command to complete a planned step.
#[derive(Debug, Clone, Copy)]
pub struct CompleteStepCommand {
    pub date: PlanDate,
    pub step_id: StepId,
}

/// Handler marking planned steps completed.
pub struct CompleteStepHandler {
    reader: Arc<dyn SnapshotReader>,
    store: Arc<dyn PlanStore>,
}

impl CompleteStepHandler {
    pub fn new(reader: Arc<dyn SnapshotReader>, store: Arc<dyn PlanStore>) -> Self {
        Self { reader, store }
    }

    pub fn handle(&self, command: CompleteStepCommand) -> Result<DailyStep, CompleteStepError> {
        let snapshot = self.reader.snapshot()?;
        let plan = self.store.plan_for(command.date)?;

        let mut steps = snapshot.steps;
        plan.complete_and_retire(&mut steps, command.step_id)?;

        // complete_and_retire guarantees the step exists in the slice.
        let completed = steps
            .into_iter()
            .find(|step| step.id == command.step_id)
            .ok_or(PlanError::UnknownStep(command.step_id))?;
        self.store.save_step(&completed)?;
        info!(date = %command.date, step = %command.step_id, "step completed");
        Ok(completed)
    }
}
