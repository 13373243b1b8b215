//! In-Memory Tracker Store Adapter
//!
//! Holds the whole snapshot behind an RwLock. Useful for testing and
//! development; also the template for wiring a real persistence adapter.

use std::sync::{Arc, RwLock};

use crate::domain::automation::Automation;
use crate::domain::foundation::PlanDate;
use crate::domain::planning::{DailyPlan, DailyStep};
use crate::domain::tracking::{Aspiration, Goal, Habit};
use crate::ports::{PlanStore, SnapshotError, SnapshotReader, StoreError, TrackerSnapshot};

/// In-memory implementation of the snapshot and store ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackerStore {
    inner: Arc<RwLock<TrackerSnapshot>>,
}

impl InMemoryTrackerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing snapshot.
    pub fn with_snapshot(snapshot: TrackerSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Seeds a goal (test/development helper, not part of the port).
    pub fn insert_goal(&self, goal: Goal) -> Result<(), StoreError> {
        self.write(|snapshot| snapshot.goals.push(goal))
    }

    /// Seeds a habit.
    pub fn insert_habit(&self, habit: Habit) -> Result<(), StoreError> {
        self.write(|snapshot| snapshot.habits.push(habit))
    }

    /// Seeds a step.
    pub fn insert_step(&self, step: DailyStep) -> Result<(), StoreError> {
        self.write(|snapshot| snapshot.steps.push(step))
    }

    /// Seeds an automation.
    pub fn insert_automation(&self, automation: Automation) -> Result<(), StoreError> {
        self.write(|snapshot| snapshot.automations.push(automation))
    }

    /// Seeds an aspiration.
    pub fn insert_aspiration(&self, aspiration: Aspiration) -> Result<(), StoreError> {
        self.write(|snapshot| snapshot.aspirations.push(aspiration))
    }

    fn write<F>(&self, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut TrackerSnapshot),
    {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        mutate(&mut guard);
        Ok(())
    }
}

impl SnapshotReader for InMemoryTrackerStore {
    fn snapshot(&self) -> Result<TrackerSnapshot, SnapshotError> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| SnapshotError::Unavailable("store lock poisoned".into()))
    }
}

impl PlanStore for InMemoryTrackerStore {
    fn plan_for(&self, date: PlanDate) -> Result<DailyPlan, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard
            .plan_for(date)
            .cloned()
            .unwrap_or_else(|| DailyPlan::new(date)))
    }

    fn save_plan(&self, plan: &DailyPlan) -> Result<(), StoreError> {
        self.write(|snapshot| {
            match snapshot
                .plans
                .iter_mut()
                .find(|existing| existing.date() == plan.date())
            {
                Some(existing) => *existing = plan.clone(),
                None => snapshot.plans.push(plan.clone()),
            }
        })
    }

    fn save_step(&self, step: &DailyStep) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let existing = guard
            .steps
            .iter_mut()
            .find(|existing| existing.id == step.id)
            .ok_or(StoreError::UnknownStep(step.id))?;
        *existing = step.clone();
        Ok(())
    }

    fn save_automation(&self, automation: &Automation) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let existing = guard
            .automations
            .iter_mut()
            .find(|existing| existing.id == automation.id)
            .ok_or(StoreError::UnknownAutomation(automation.id))?;
        *existing = automation.clone();
        Ok(())
    }
}
