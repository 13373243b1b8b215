//! Candidate set - what is eligible for today's plan.
//!
//! The candidate set is presented to the user; it is never written into a
//! plan's committed ids. Only explicit add-to-plan calls mutate persisted
//! state - the scheduler never plans on the user's behalf.

use serde::Serialize;

use crate::domain::foundation::{HabitId, PlanDate, StepId};
use crate::domain::tracking::Habit;

use super::DailyStep;

/// Why an item is eligible for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateReason {
    /// A recurring habit whose rule is due today.
    DueHabit,
    /// An incomplete step dated before today.
    OverdueStep,
    /// A step explicitly dated today.
    TodayStep,
}

/// One item eligible to be added to today's plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanCandidate {
    Habit {
        id: HabitId,
        name: String,
        reason: CandidateReason,
    },
    Step {
        id: StepId,
        title: String,
        date: PlanDate,
        days_overdue: i64,
        priority: u8,
        reason: CandidateReason,
    },
}

impl PlanCandidate {
    fn days_overdue(&self) -> i64 {
        match self {
            PlanCandidate::Habit { .. } => 0,
            PlanCandidate::Step { days_overdue, .. } => *days_overdue,
        }
    }

    fn priority(&self) -> u8 {
        match self {
            PlanCandidate::Habit { .. } => 0,
            PlanCandidate::Step { priority, .. } => *priority,
        }
    }

    fn date_key(&self, today: PlanDate) -> PlanDate {
        match self {
            PlanCandidate::Habit { .. } => today,
            PlanCandidate::Step { date, .. } => *date,
        }
    }
}

/// Builds the ranked candidate set for `today`:
/// due recurring habits, overdue incomplete steps, and steps dated today.
///
/// Habits already completed today and completed steps are excluded - there
/// is nothing left to plan for them. Ranking is display order only:
/// overdue first (most overdue leading), then priority score descending,
/// then date ascending; ties keep a stable order.
pub fn carry_over_overdue(
    today: PlanDate,
    habits: &[Habit],
    steps: &[DailyStep],
) -> Vec<PlanCandidate> {
    let mut candidates: Vec<PlanCandidate> = Vec::new();

    for habit in habits {
        if habit.is_due_on(today) && !habit.is_completed_on(today) {
            candidates.push(PlanCandidate::Habit {
                id: habit.id,
                name: habit.name.clone(),
                reason: CandidateReason::DueHabit,
            });
        }
    }

    for step in steps {
        if step.completed {
            continue;
        }
        let reason = if step.is_overdue(today) {
            CandidateReason::OverdueStep
        } else if step.date.is_same_day(&today) {
            CandidateReason::TodayStep
        } else {
            continue;
        };
        candidates.push(PlanCandidate::Step {
            id: step.id,
            title: step.title.clone(),
            date: step.date,
            days_overdue: step.days_overdue(today),
            priority: step.priority_score(),
            reason,
        });
    }

    candidates.sort_by(|a, b| {
        b.days_overdue()
            .cmp(&a.days_overdue())
            .then(b.priority().cmp(&a.priority()))
            .then(a.date_key(today).cmp(&b.date_key(today)))
    });
    candidates
}
