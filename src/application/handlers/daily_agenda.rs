//! GetDailyAgendaHandler - Query handler for one day's working view.
//!
//! Combines the committed plan, the remaining-work view, the ranked
//! candidate set, and per-goal progress into a single read-model.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{GoalId, Percentage, PlanDate, StepId};
use crate::domain::planning::{carry_over_overdue, DailyPlan, PlanCandidate};
use crate::domain::progress::goal_progress;
use crate::ports::{Clock, SnapshotError, SnapshotReader};

/// Query for a day's agenda. Without an explicit date the clock's "today"
/// is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDailyAgendaQuery {
    pub date: Option<PlanDate>,
}

/// Errors raised while assembling an agenda.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Per-goal progress entry in the agenda.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgressView {
    pub goal_id: GoalId,
    pub name: String,
    pub progress: Percentage,
}

/// One day's working view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAgenda {
    pub date: PlanDate,
    /// The committed plan (empty if the user never planned this date).
    pub plan: DailyPlan,
    /// Planned ids still awaiting work, in display order.
    pub remaining: Vec<StepId>,
    /// Completed over planned for the committed plan.
    pub plan_progress_ratio: f64,
    /// Ranked items eligible for the plan; never auto-committed.
    pub candidates: Vec<PlanCandidate>,
    pub goal_progress: Vec<GoalProgressView>,
}

/// Handler assembling the daily agenda read-model.
pub struct GetDailyAgendaHandler {
    reader: Arc<dyn SnapshotReader>,
    clock: Arc<dyn Clock>,
}

impl GetDailyAgendaHandler {
    pub fn new(reader: Arc<dyn SnapshotReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub fn handle(&self, query: GetDailyAgendaQuery) -> Result<DailyAgenda, AgendaError> {
        let snapshot = self.reader.snapshot()?;
        let today = self.clock.today();
        let date = query.date.unwrap_or(today);

        let plan = snapshot
            .plan_for(date)
            .cloned()
            .unwrap_or_else(|| DailyPlan::new(date));

        // Candidates are only meaningful for today; asking for another
        // date still evaluates due-ness against that date.
        let candidates = carry_over_overdue(date, &snapshot.habits, &snapshot.steps);
        debug!(
            %date,
            planned = plan.planned_ids().len(),
            candidates = candidates.len(),
            "assembled daily agenda"
        );

        let goal_progress_views: Vec<GoalProgressView> = snapshot
            .goals
            .iter()
            .map(|goal| GoalProgressView {
                goal_id: goal.id,
                name: goal.name.clone(),
                progress: goal_progress(goal, &snapshot.steps),
            })
            .collect();

        Ok(DailyAgenda {
            date,
            remaining: plan.remaining_ids(&snapshot.steps),
            plan_progress_ratio: plan.progress_ratio(&snapshot.steps),
            plan,
            candidates,
            goal_progress: goal_progress_views,
        })
    }
}
