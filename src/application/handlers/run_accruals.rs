//! RunAccrualsHandler - apply every automation increment due today.
//!
//! Invoked once per day by an external scheduler; the engine itself owns
//! no timers. Outcomes, including overshoots, go back to the caller for
//! user-facing reporting.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::automation::{run_due_accruals, AccrualOutcome};
use crate::ports::{Clock, PlanStore, SnapshotError, SnapshotReader, StoreError};

/// Errors raised by the accrual run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccrualRunError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handler applying due accruals and persisting the updated automations.
pub struct RunAccrualsHandler {
    reader: Arc<dyn SnapshotReader>,
    store: Arc<dyn PlanStore>,
    clock: Arc<dyn Clock>,
}

impl RunAccrualsHandler {
    pub fn new(
        reader: Arc<dyn SnapshotReader>,
        store: Arc<dyn PlanStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            store,
            clock,
        }
    }

    pub fn handle(&self) -> Result<Vec<AccrualOutcome>, AccrualRunError> {
        let snapshot = self.reader.snapshot()?;
        let today = self.clock.today();

        let outcomes = run_due_accruals(&snapshot.automations, today);
        for outcome in &outcomes {
            self.store.save_automation(&outcome.automation)?;
        }
        info!(%today, applied = outcomes.len(), "accrual run finished");
        Ok(outcomes)
    }
}
