//! AspirationBalance - the derived read-model over one aspiration's goals
//! and habits, with a rolling trend classification.

use serde::Serialize;

use crate::config::AggregationConfig;
use crate::domain::foundation::{AspirationId, GoalId, PlanDate};
use crate::domain::planning::DailyStep;
use crate::domain::tracking::{Goal, Habit};

/// XP credited per completed step or habit occurrence.
pub const XP_PER_COMPLETION: u64 = 10;

/// Rolling performance direction for an aspiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Neutral,
    Negative,
}

/// Display grouping over the recent completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

/// Aggregated read-model for one aspiration.
///
/// `is_empty` distinguishes "nothing was ever planned" from "everything
/// planned sits at zero completion" - callers must render those
/// differently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspirationBalance {
    pub aspiration_id: AspirationId,
    pub total_planned: usize,
    pub total_completed: usize,
    pub total_xp: u64,
    pub recent_planned: usize,
    pub recent_completed: usize,
    pub recent_xp: u64,
    /// Percent of recently planned work completed; `None` when nothing was
    /// planned recently (no signal, not zero performance).
    pub completion_rate_recent: Option<f64>,
    pub trend: Trend,
    pub is_empty: bool,
}

/// Computes the balance for one aspiration over a snapshot.
///
/// Steps link to the aspiration through their goal; habits link directly.
/// The recent window is `[today - window_days, today]` inclusive.
pub fn aspiration_balance(
    aspiration_id: AspirationId,
    goals: &[Goal],
    habits: &[Habit],
    steps: &[DailyStep],
    today: PlanDate,
    config: &AggregationConfig,
) -> AspirationBalance {
    let goal_ids: Vec<GoalId> = goals
        .iter()
        .filter(|goal| goal.aspiration_id == Some(aspiration_id))
        .map(|goal| goal.id)
        .collect();
    let linked_habits: Vec<&Habit> = habits
        .iter()
        .filter(|habit| habit.aspiration_id == Some(aspiration_id))
        .collect();
    let linked_steps: Vec<&DailyStep> = steps
        .iter()
        .filter(|step| {
            step.goal_id
                .map(|goal_id| goal_ids.contains(&goal_id))
                .unwrap_or(false)
        })
        .collect();

    let window_start = today.minus_days(i64::from(config.window_days));

    let total_planned = linked_steps.len()
        + linked_habits
            .iter()
            .map(|habit| habit.lifetime_planned(today))
            .sum::<usize>();
    let total_completed = linked_steps.iter().filter(|step| step.completed).count()
        + linked_habits
            .iter()
            .map(|habit| habit.lifetime_completions())
            .sum::<usize>();

    let recent_planned = linked_steps
        .iter()
        .filter(|step| step.date >= window_start && step.date <= today)
        .count()
        + linked_habits
            .iter()
            .map(|habit| habit.planned_in_window(window_start, today))
            .sum::<usize>();
    let recent_completed = linked_steps
        .iter()
        .filter(|step| step.completed && step.date >= window_start && step.date <= today)
        .count()
        + linked_habits
            .iter()
            .map(|habit| habit.completions_in_window(window_start, today))
            .sum::<usize>();

    let total_xp = total_completed as u64 * XP_PER_COMPLETION;
    let recent_xp = recent_completed as u64 * XP_PER_COMPLETION;

    let completion_rate_recent = if recent_planned == 0 {
        None
    } else {
        Some(recent_completed as f64 / recent_planned as f64 * 100.0)
    };

    let is_empty = total_planned == 0;

    let first_activity = linked_steps
        .iter()
        .map(|step| step.date)
        .chain(linked_habits.iter().map(|habit| habit.created_at))
        .min();
    let trend = classify_trend(
        total_xp,
        recent_xp,
        first_activity,
        today,
        config,
    );

    AspirationBalance {
        aspiration_id,
        total_planned,
        total_completed,
        total_xp,
        recent_planned,
        recent_completed,
        recent_xp,
        completion_rate_recent,
        trend,
        is_empty,
    }
}

/// Compares the recent daily XP rate against the lifetime average rate.
///
/// Above the average by more than the configured margin is positive,
/// below it by more than the margin is negative, anything else - including
/// a history with no XP at all - is neutral.
fn classify_trend(
    total_xp: u64,
    recent_xp: u64,
    first_activity: Option<PlanDate>,
    today: PlanDate,
    config: &AggregationConfig,
) -> Trend {
    let Some(first) = first_activity else {
        return Trend::Neutral;
    };
    if total_xp == 0 {
        return Trend::Neutral;
    }

    let history_days = first.days_between(&today).max(0) + 1;
    let recent_days = i64::from(config.window_days).min(history_days);

    let average_rate = total_xp as f64 / history_days as f64;
    let recent_rate = recent_xp as f64 / recent_days as f64;

    if recent_rate > average_rate * (1.0 + config.trend_margin) {
        Trend::Positive
    } else if recent_rate < average_rate * (1.0 - config.trend_margin) {
        Trend::Negative
    } else {
        Trend::Neutral
    }
}

/// Classifies a balance for display grouping.
///
/// Empty balances and balances without a recent signal have no grouping
/// evidence either way and land in the moderate bucket.
pub fn classify_difficulty(balance: &AspirationBalance, config: &AggregationConfig) -> Difficulty {
    match balance.completion_rate_recent {
        Some(rate) if rate >= config.easy_threshold => Difficulty::Easy,
        Some(rate) if rate < config.hard_threshold => Difficulty::Hard,
        _ => Difficulty::Moderate,
    }
}

#[cfg(test)]
#[path = "aspiration_balance_test.rs"]
mod aspiration_balance_test;
