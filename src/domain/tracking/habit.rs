//! Habit entity - a recurring item with a per-date completion history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{AspirationId, HabitId, PlanDate};
use crate::domain::recurrence::{self, RecurrenceRule};

/// A recurring habit.
///
/// Completions are keyed by calendar date; absent dates count as not
/// completed. Habits are never merged with one another - toggles only ever
/// mutate this record's own history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    #[serde(default)]
    pub aspiration_id: Option<AspirationId>,
    pub name: String,
    pub rule: RecurrenceRule,
    #[serde(default)]
    pub always_show: bool,
    #[serde(default)]
    pub completions: BTreeMap<PlanDate, bool>,
    pub created_at: PlanDate,
}

impl Habit {
    /// Creates a habit created on the rule's anchor date.
    pub fn new(name: impl Into<String>, rule: RecurrenceRule) -> Self {
        let created_at = rule.anchor_date();
        Self {
            id: HabitId::new(),
            aspiration_id: None,
            name: name.into(),
            rule,
            always_show: false,
            completions: BTreeMap::new(),
            created_at,
        }
    }

    /// Links the habit to an aspiration.
    pub fn with_aspiration(mut self, aspiration_id: AspirationId) -> Self {
        self.aspiration_id = Some(aspiration_id);
        self
    }

    /// Forces the habit into every day's agenda regardless of its rule.
    pub fn with_always_show(mut self) -> Self {
        self.always_show = true;
        self
    }

    /// Returns true if the habit is due on the given date.
    pub fn is_due_on(&self, date: PlanDate) -> bool {
        recurrence::is_due(&self.rule, self.always_show, date)
    }

    /// Returns true if the habit was completed on the given date.
    pub fn is_completed_on(&self, date: PlanDate) -> bool {
        self.completions.get(&date).copied().unwrap_or(false)
    }

    /// Flips the completion state for a date and returns the new state.
    pub fn toggle_completion(&mut self, date: PlanDate) -> bool {
        let state = !self.is_completed_on(date);
        self.completions.insert(date, state);
        state
    }

    /// Number of completed occurrences over the habit's lifetime.
    pub fn lifetime_completions(&self) -> usize {
        self.completions.values().filter(|done| **done).count()
    }

    /// Number of completed occurrences inside an inclusive date window.
    pub fn completions_in_window(&self, from: PlanDate, to: PlanDate) -> usize {
        self.completions
            .range(from..=to)
            .filter(|(_, done)| **done)
            .count()
    }

    /// Number of due occurrences inside an inclusive date window.
    ///
    /// Dates before the habit existed do not count as planned.
    pub fn planned_in_window(&self, from: PlanDate, to: PlanDate) -> usize {
        let from = from.max(self.created_at);
        recurrence::due_dates_in(&self.rule, self.always_show, from, to).len()
    }

    /// Number of due occurrences from creation through `today`.
    pub fn lifetime_planned(&self, today: PlanDate) -> usize {
        self.planned_in_window(self.created_at, today)
    }
}
