//! RecurrenceRule - when a recurring item is active.
//!
//! The surrounding product historically spread per-field recurrence checks
//! across screens; here the whole vocabulary is one validated record
//! evaluated by a single exhaustive match (see `evaluator`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::warn;

use crate::domain::foundation::{PlanDate, Weekday};

/// Errors raised at rule construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("day_of_month must be between 1 and 31, got {actual}")]
    DayOfMonthOutOfRange { actual: u8 },

    #[error("recurrence kind {kind} is not allowed here")]
    KindNotAllowed { kind: RecurrenceKind },
}

/// The recurrence cadence of a habit or automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Custom,
    AlwaysShow,
}

impl RecurrenceKind {
    /// Returns the canonical wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Monthly => "monthly",
            RecurrenceKind::Custom => "custom",
            RecurrenceKind::AlwaysShow => "always_show",
        }
    }

    /// Parses a kind from loosely-typed historical records.
    ///
    /// Unknown or unset spellings default to `Daily` - the documented
    /// fail-open policy - and emit a data-quality warning rather than
    /// failing the whole evaluation.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "daily" | "day" => RecurrenceKind::Daily,
            "weekly" | "week" => RecurrenceKind::Weekly,
            "monthly" | "month" => RecurrenceKind::Monthly,
            "custom" => RecurrenceKind::Custom,
            "always_show" | "alwaysshow" | "always" => RecurrenceKind::AlwaysShow,
            other => {
                warn!(kind = other, "unknown recurrence kind, defaulting to daily");
                RecurrenceKind::Daily
            }
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated recurrence rule.
///
/// `anchor_date` is the item's creation date, used as the fallback
/// reference when a monthly rule carries no explicit day of month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    kind: RecurrenceKind,
    #[serde(default)]
    selected_days: BTreeSet<Weekday>,
    #[serde(default)]
    day_of_month: Option<u8>,
    anchor_date: PlanDate,
}

impl RecurrenceRule {
    /// Creates a rule, validating field ranges.
    ///
    /// A `Weekly`/`Custom` rule with an empty day set is constructible
    /// (historical data contains them) but never evaluates as due.
    pub fn try_new(
        kind: RecurrenceKind,
        selected_days: BTreeSet<Weekday>,
        day_of_month: Option<u8>,
        anchor_date: PlanDate,
    ) -> Result<Self, RuleError> {
        if let Some(day) = day_of_month {
            if !(1..=31).contains(&day) {
                return Err(RuleError::DayOfMonthOutOfRange { actual: day });
            }
        }
        Ok(Self {
            kind,
            selected_days,
            day_of_month,
            anchor_date,
        })
    }

    /// A rule that is due every day.
    pub fn daily(anchor_date: PlanDate) -> Self {
        Self {
            kind: RecurrenceKind::Daily,
            selected_days: BTreeSet::new(),
            day_of_month: None,
            anchor_date,
        }
    }

    /// A rule due on the given weekdays.
    pub fn weekly(selected_days: BTreeSet<Weekday>, anchor_date: PlanDate) -> Self {
        Self {
            kind: RecurrenceKind::Weekly,
            selected_days,
            day_of_month: None,
            anchor_date,
        }
    }

    /// A rule due once a month on the given calendar day.
    pub fn monthly(day_of_month: u8, anchor_date: PlanDate) -> Result<Self, RuleError> {
        Self::try_new(
            RecurrenceKind::Monthly,
            BTreeSet::new(),
            Some(day_of_month),
            anchor_date,
        )
    }

    /// A custom weekday-set rule.
    pub fn custom(selected_days: BTreeSet<Weekday>, anchor_date: PlanDate) -> Self {
        Self {
            kind: RecurrenceKind::Custom,
            selected_days,
            day_of_month: None,
            anchor_date,
        }
    }

    /// A rule that is unconditionally due.
    pub fn always_show(anchor_date: PlanDate) -> Self {
        Self {
            kind: RecurrenceKind::AlwaysShow,
            selected_days: BTreeSet::new(),
            day_of_month: None,
            anchor_date,
        }
    }

    /// Returns the rule's cadence kind.
    pub fn kind(&self) -> RecurrenceKind {
        self.kind
    }

    /// Returns the weekday set used by `Weekly`/`Custom` rules.
    pub fn selected_days(&self) -> &BTreeSet<Weekday> {
        &self.selected_days
    }

    /// Returns the creation-date anchor.
    pub fn anchor_date(&self) -> PlanDate {
        self.anchor_date
    }

    /// The calendar day a `Monthly` rule targets.
    ///
    /// Falls back to the anchor date's day of month when the rule carries
    /// no explicit value.
    pub fn scheduled_day_of_month(&self) -> u8 {
        self.day_of_month
            .unwrap_or_else(|| self.anchor_date.day_of_month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> PlanDate {
        PlanDate::from_ymd(2024, 1, 15).unwrap()
    }

    #[test]
    fn try_new_rejects_day_of_month_zero() {
        let result = RecurrenceRule::try_new(
            RecurrenceKind::Monthly,
            BTreeSet::new(),
            Some(0),
            anchor(),
        );
        assert_eq!(result, Err(RuleError::DayOfMonthOutOfRange { actual: 0 }));
    }

    #[test]
    fn try_new_rejects_day_of_month_over_31() {
        let result = RecurrenceRule::monthly(32, anchor());
        assert_eq!(result, Err(RuleError::DayOfMonthOutOfRange { actual: 32 }));
    }

    #[test]
    fn monthly_accepts_boundary_days() {
        assert!(RecurrenceRule::monthly(1, anchor()).is_ok());
        assert!(RecurrenceRule::monthly(31, anchor()).is_ok());
    }

    #[test]
    fn scheduled_day_falls_back_to_anchor() {
        let rule = RecurrenceRule::try_new(
            RecurrenceKind::Monthly,
            BTreeSet::new(),
            None,
            anchor(),
        )
        .unwrap();
        assert_eq!(rule.scheduled_day_of_month(), 15);
    }

    #[test]
    fn scheduled_day_prefers_explicit_value() {
        let rule = RecurrenceRule::monthly(28, anchor()).unwrap();
        assert_eq!(rule.scheduled_day_of_month(), 28);
    }

    #[test]
    fn weekly_with_empty_set_is_constructible() {
        let rule = RecurrenceRule::weekly(BTreeSet::new(), anchor());
        assert!(rule.selected_days().is_empty());
    }

    #[test]
    fn kind_parse_accepts_known_spellings() {
        assert_eq!(RecurrenceKind::parse("daily"), RecurrenceKind::Daily);
        assert_eq!(RecurrenceKind::parse("  Weekly "), RecurrenceKind::Weekly);
        assert_eq!(RecurrenceKind::parse("month"), RecurrenceKind::Monthly);
        assert_eq!(RecurrenceKind::parse("custom"), RecurrenceKind::Custom);
        assert_eq!(
            RecurrenceKind::parse("always_show"),
            RecurrenceKind::AlwaysShow
        );
    }

    #[test]
    fn kind_parse_fails_open_to_daily() {
        assert_eq!(RecurrenceKind::parse(""), RecurrenceKind::Daily);
        assert_eq!(RecurrenceKind::parse("fortnightly"), RecurrenceKind::Daily);
    }

    #[test]
    fn rule_serializes_round_trip() {
        let rule = RecurrenceRule::custom(
            [Weekday::Mon, Weekday::Fri].into_iter().collect(),
            anchor(),
        );
        let json = serde_json::to_string(&rule).unwrap();
        let back: RecurrenceRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
