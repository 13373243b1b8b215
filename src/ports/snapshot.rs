//! Snapshot Port - the read accessor over the user's collections.
//!
//! The engine computes over fully-materialized point-in-time snapshots; any
//! network or storage work happens behind this port in the surrounding
//! caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::automation::Automation;
use crate::domain::foundation::PlanDate;
use crate::domain::planning::{DailyPlan, DailyStep};
use crate::domain::tracking::{Aspiration, Goal, Habit};

/// Errors that can occur reading a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Snapshot source unavailable: {0}")]
    Unavailable(String),

    #[error("Snapshot data corrupted: {0}")]
    Corrupted(String),
}

/// A point-in-time bundle of every collection the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub steps: Vec<DailyStep>,
    #[serde(default)]
    pub automations: Vec<Automation>,
    #[serde(default)]
    pub aspirations: Vec<Aspiration>,
    #[serde(default)]
    pub plans: Vec<DailyPlan>,
}

impl TrackerSnapshot {
    /// Returns the committed plan for a date, if one was ever created.
    pub fn plan_for(&self, date: PlanDate) -> Option<&DailyPlan> {
        self.plans.iter().find(|plan| plan.date() == date)
    }
}

/// Port for reading the current collections as of a point in time.
pub trait SnapshotReader: Send + Sync {
    /// Returns a fully-materialized snapshot.
    fn snapshot(&self) -> Result<TrackerSnapshot, SnapshotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty() {
        let snapshot = TrackerSnapshot::default();
        assert!(snapshot.goals.is_empty());
        assert!(snapshot.plans.is_empty());
    }

    #[test]
    fn plan_for_finds_matching_date() {
        let date = PlanDate::from_ymd(2024, 6, 13).unwrap();
        let snapshot = TrackerSnapshot {
            plans: vec![DailyPlan::new(date)],
            ..Default::default()
        };
        assert!(snapshot.plan_for(date).is_some());
        assert!(snapshot.plan_for(date.plus_days(1)).is_none());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let date = PlanDate::from_ymd(2024, 6, 13).unwrap();
        let snapshot = TrackerSnapshot {
            steps: vec![DailyStep::new("Water the plants", date)],
            plans: vec![DailyPlan::new(date)],
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TrackerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn snapshot_error_displays_reason() {
        let err = SnapshotError::Unavailable("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
