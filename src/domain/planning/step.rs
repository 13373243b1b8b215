//! DailyStep entity - a one-off or goal-linked unit of work.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GoalId, PlanDate, StepId};

/// A dated unit of work.
///
/// A step dated strictly before "today" and not completed is *overdue*;
/// overdue steps keep surfacing through the candidate set until completed,
/// rescheduled, or deleted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStep {
    pub id: StepId,
    #[serde(default)]
    pub goal_id: Option<GoalId>,
    pub title: String,
    pub date: PlanDate,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub is_important: bool,
    #[serde(default)]
    pub is_urgent: bool,
}

impl DailyStep {
    /// Creates an incomplete step for the given date.
    pub fn new(title: impl Into<String>, date: PlanDate) -> Self {
        Self {
            id: StepId::new(),
            goal_id: None,
            title: title.into(),
            date,
            completed: false,
            is_important: false,
            is_urgent: false,
        }
    }

    /// Links the step to a goal.
    pub fn with_goal(mut self, goal_id: GoalId) -> Self {
        self.goal_id = Some(goal_id);
        self
    }

    /// Marks the step important.
    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }

    /// Marks the step urgent.
    pub fn urgent(mut self) -> Self {
        self.is_urgent = true;
        self
    }

    /// True when the step's date is strictly before `today` and it has not
    /// been completed.
    pub fn is_overdue(&self, today: PlanDate) -> bool {
        !self.completed && self.date < today
    }

    /// Days this step has been overdue; zero when not overdue.
    pub fn days_overdue(&self, today: PlanDate) -> i64 {
        if self.is_overdue(today) {
            self.date.days_between(&today)
        } else {
            0
        }
    }

    /// Display ranking score: importance weighs double urgency.
    pub fn priority_score(&self) -> u8 {
        2 * u8::from(self.is_important) + u8::from(self.is_urgent)
    }

    /// Marks the step completed.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Moves the step to a new date.
    pub fn reschedule(&mut self, date: PlanDate) {
        self.date = date;
    }
}
