//! PlanDate value object - local calendar dates with the time stripped.
//!
//! Every date comparison in the engine happens on whole local days: two
//! timestamps on the same local day must compare equal regardless of their
//! time component. PlanDate enforces that by construction.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ValidationError, Weekday};

/// A local calendar date, normalized to midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlanDate(NaiveDate);

impl PlanDate {
    /// Creates a PlanDate from calendar components, rejecting invalid dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ValidationError::InvalidDate { year, month, day })
    }

    /// Creates a PlanDate from a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a PlanDate from a timezone-aware timestamp, stripping the
    /// time component to the local calendar day.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }

    /// Returns the inner chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Signed whole-day distance from this date to `other` (other - self).
    pub fn days_between(&self, other: &PlanDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the weekday of this date.
    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.0.weekday())
    }

    /// Returns the day of month (1-31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Returns true if both values fall on the same calendar day.
    pub fn is_same_day(&self, other: &PlanDate) -> bool {
        self.0 == other.0
    }

    /// Creates a new date by adding whole days (negative subtracts).
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new date by subtracting whole days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Returns the number of days in this date's month (28-31).
    pub fn days_in_month(&self) -> u8 {
        let (year, month) = (self.0.year(), self.0.month());
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        // Day 1 of a month always exists.
        let first_of_next = first_of_next.unwrap();
        (first_of_next - Duration::days(1)).day() as u8
    }

    /// Returns the last calendar day of this date's month.
    pub fn last_day_of_month(&self) -> Self {
        let last = u32::from(self.days_in_month());
        // The last day of the current month always exists.
        Self(NaiveDate::from_ymd_opt(self.0.year(), self.0.month(), last).unwrap())
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::from_str(s).map(Self)
    }
}
