//! File-based Tracker Store Adapter
//!
//! Persists the whole snapshot as a single JSON file: loaded once on open,
//! rewritten after every mutation. Suitable for development harnesses and
//! single-user CLI wrappers, not concurrent writers.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::domain::automation::Automation;
use crate::domain::foundation::PlanDate;
use crate::domain::planning::{DailyPlan, DailyStep};
use crate::ports::{PlanStore, SnapshotError, SnapshotReader, StoreError, TrackerSnapshot};

/// JSON-file implementation of the snapshot and store ports.
#[derive(Debug, Clone)]
pub struct JsonFileTrackerStore {
    path: PathBuf,
    inner: Arc<RwLock<TrackerSnapshot>>,
}

impl JsonFileTrackerStore {
    /// Opens a store at the given path, loading the snapshot if the file
    /// exists and starting empty otherwise.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = if path.exists() {
            let json = fs::read_to_string(&path).map_err(|e| StoreError::Io(e.to_string()))?;
            serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))?
        } else {
            TrackerSnapshot::default()
        };
        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(snapshot)),
        })
    }

    /// Seeds the store with a snapshot and writes it out.
    pub fn replace_snapshot(&self, snapshot: TrackerSnapshot) -> Result<(), StoreError> {
        {
            let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
            *guard = snapshot;
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let json = serde_json::to_string_pretty(&*guard)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn mutate<F>(&self, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut TrackerSnapshot) -> Result<(), StoreError>,
    {
        {
            let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
            apply(&mut guard)?;
        }
        self.persist()
    }
}

impl SnapshotReader for JsonFileTrackerStore {
    fn snapshot(&self) -> Result<TrackerSnapshot, SnapshotError> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| SnapshotError::Unavailable("store lock poisoned".into()))
    }
}

impl PlanStore for JsonFileTrackerStore {
    fn plan_for(&self, date: PlanDate) -> Result<DailyPlan, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard
            .plan_for(date)
            .cloned()
            .unwrap_or_else(|| DailyPlan::new(date)))
    }

    fn save_plan(&self, plan: &DailyPlan) -> Result<(), StoreError> {
        self.mutate(|snapshot| {
            match snapshot
                .plans
                .iter_mut()
                .find(|existing| existing.date() == plan.date())
            {
                Some(existing) => *existing = plan.clone(),
                None => snapshot.plans.push(plan.clone()),
            }
            Ok(())
        })
    }

    fn save_step(&self, step: &DailyStep) -> Result<(), StoreError> {
        self.mutate(|snapshot| {
            let existing = snapshot
                .steps
                .iter_mut()
                .find(|existing| existing.id == step.id)
                .ok_or(StoreError::UnknownStep(step.id))?;
            *existing = step.clone();
            Ok(())
        })
    }

    fn save_automation(&self, automation: &Automation) -> Result<(), StoreError> {
        self.mutate(|snapshot| {
            let existing = snapshot
                .automations
                .iter_mut()
                .find(|existing| existing.id == automation.id)
                .ok_or(StoreError::UnknownAutomation(automation.id))?;
            *existing = automation.clone();
            Ok(())
        })
    }
}
