//! Plan mutation handlers - committing and removing steps for a date.
//!
//! These are the only code paths that write `planned_ids`; the candidate
//! set never reaches the store on its own.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{PlanDate, StepId};
use crate::domain::planning::{DailyPlan, PlanError};
use crate::ports::{Clock, PlanStore, StoreError};

/// Errors raised by plan mutation commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanCommandError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Command to commit a step to a date's plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanStepCommand {
    pub date: PlanDate,
    pub step_id: StepId,
}

/// Command to remove a step from a date's plan.
#[derive(Debug, Clone, Copy)]
pub struct UnplanStepCommand {
    pub date: PlanDate,
    pub step_id: StepId,
}

/// Handler committing steps to plans.
pub struct PlanStepHandler {
    store: Arc<dyn PlanStore>,
    clock: Arc<dyn Clock>,
}

impl PlanStepHandler {
    pub fn new(store: Arc<dyn PlanStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn handle(&self, command: PlanStepCommand) -> Result<DailyPlan, PlanCommandError> {
        let mut plan = self.store.plan_for(command.date)?;
        plan.add_to_plan(command.step_id, self.clock.today())?;
        self.store.save_plan(&plan)?;
        info!(date = %command.date, step = %command.step_id, "step planned");
        Ok(plan)
    }
}

/// Handler removing steps from plans.
pub struct UnplanStepHandler {
    store: Arc<dyn PlanStore>,
    clock: Arc<dyn Clock>,
}

impl UnplanStepHandler {
    pub fn new(store: Arc<dyn PlanStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn handle(&self, command: UnplanStepCommand) -> Result<DailyPlan, PlanCommandError> {
        let mut plan = self.store.plan_for(command.date)?;
        plan.remove_from_plan(command.step_id, self.clock.today())?;
        self.store.save_plan(&plan)?;
        info!(date = %command.date, step = %command.step_id, "step unplanned");
        Ok(plan)
    }
}
