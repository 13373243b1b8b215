//! DailyPlan - the ordered set of step ids committed to one calendar date.
//!
//! A plan moves between Empty and Populated through add/remove; there is no
//! terminal state. Once its date is in the past the plan becomes read-only
//! for planning mutations while staying readable for history and progress.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{PlanDate, StepId};

use super::DailyStep;

/// Errors raised by plan mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("plan for {date} is in the past and read-only for planning")]
    PlanDateInPast { date: PlanDate },

    #[error("reorder must be a permutation of the current planned ids")]
    ReorderMismatch,

    #[error("step {0} is not part of this plan")]
    StepNotPlanned(StepId),

    #[error("step {0} does not exist in the snapshot")]
    UnknownStep(StepId),
}

/// The step ids a user has committed to for one specific date.
///
/// Ids are unique and keep insertion order (display order only, never
/// correctness). An id whose underlying step is completed stays in
/// `planned_ids` so the day's progress ratio never regresses, but is
/// excluded from the remaining-work views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    date: PlanDate,
    #[serde(default)]
    planned_ids: Vec<StepId>,
}

impl DailyPlan {
    /// Creates an empty plan for a date.
    pub fn new(date: PlanDate) -> Self {
        Self {
            date,
            planned_ids: Vec::new(),
        }
    }

    /// The date this plan covers.
    pub fn date(&self) -> PlanDate {
        self.date
    }

    /// The committed ids in display order.
    pub fn planned_ids(&self) -> &[StepId] {
        &self.planned_ids
    }

    /// True when nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.planned_ids.is_empty()
    }

    /// True when the id is committed to this plan.
    pub fn contains(&self, id: StepId) -> bool {
        self.planned_ids.contains(&id)
    }

    fn ensure_open(&self, today: PlanDate) -> Result<(), PlanError> {
        if self.date < today {
            return Err(PlanError::PlanDateInPast { date: self.date });
        }
        Ok(())
    }

    /// Commits a step id to this plan.
    ///
    /// Idempotent: adding an id already present is a no-op, not an error.
    pub fn add_to_plan(&mut self, id: StepId, today: PlanDate) -> Result<(), PlanError> {
        self.ensure_open(today)?;
        if !self.planned_ids.contains(&id) {
            self.planned_ids.push(id);
        }
        Ok(())
    }

    /// Removes a step id from this plan.
    ///
    /// Removing an absent id is a no-op.
    pub fn remove_from_plan(&mut self, id: StepId, today: PlanDate) -> Result<(), PlanError> {
        self.ensure_open(today)?;
        self.planned_ids.retain(|planned| *planned != id);
        Ok(())
    }

    /// Replaces the display order.
    ///
    /// The new order must be a permutation of the current ids.
    pub fn reorder(&mut self, ids: Vec<StepId>, today: PlanDate) -> Result<(), PlanError> {
        self.ensure_open(today)?;
        if ids.len() != self.planned_ids.len() {
            return Err(PlanError::ReorderMismatch);
        }
        for id in &self.planned_ids {
            if !ids.contains(id) {
                return Err(PlanError::ReorderMismatch);
            }
        }
        self.planned_ids = ids;
        Ok(())
    }

    /// Marks the underlying step completed while leaving its id in the
    /// plan for historical progress accuracy.
    ///
    /// Allowed on past plans: finishing overdue work is always legal.
    pub fn complete_and_retire(
        &self,
        steps: &mut [DailyStep],
        id: StepId,
    ) -> Result<(), PlanError> {
        if !self.contains(id) {
            return Err(PlanError::StepNotPlanned(id));
        }
        let step = steps
            .iter_mut()
            .find(|step| step.id == id)
            .ok_or(PlanError::UnknownStep(id))?;
        step.complete();
        Ok(())
    }

    /// Planned ids whose step is still incomplete, in display order.
    ///
    /// Ids with no matching step in the snapshot are omitted - there is
    /// nothing left to act on for them.
    pub fn remaining_ids(&self, steps: &[DailyStep]) -> Vec<StepId> {
        self.planned_ids
            .iter()
            .filter(|id| {
                steps
                    .iter()
                    .any(|step| step.id == **id && !step.completed)
            })
            .copied()
            .collect()
    }

    /// Number of planned ids whose step is completed.
    pub fn completed_count(&self, steps: &[DailyStep]) -> usize {
        self.planned_ids
            .iter()
            .filter(|id| steps.iter().any(|step| step.id == **id && step.completed))
            .count()
    }

    /// Completed over planned; zero for an empty plan.
    pub fn progress_ratio(&self, steps: &[DailyStep]) -> f64 {
        if self.planned_ids.is_empty() {
            return 0.0;
        }
        self.completed_count(steps) as f64 / self.planned_ids.len() as f64
    }
}

#[cfg(test)]
#[path = "daily_plan_test.rs"]
mod daily_plan_test;
