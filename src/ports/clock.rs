//! Clock Port - Injected "today".
//!
//! The engine never reads wall-clock time inside its pure functions; every
//! recurrence and progress computation receives today's date through this
//! port, keeping results deterministic and testable with fixed dates.

use chrono::Local;

use crate::domain::foundation::PlanDate;

/// Supplies "today" in the user's local calendar.
pub trait Clock: Send + Sync {
    /// The current local calendar date.
    fn today(&self) -> PlanDate;
}

/// Reads the system's local wall clock. This is the only place the engine
/// touches real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> PlanDate {
        PlanDate::from_naive(Local::now().date_naive())
    }
}

/// A clock pinned to one date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: PlanDate,
}

impl FixedClock {
    /// Creates a clock that always reports the given date.
    pub fn new(today: PlanDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> PlanDate {
        self.today
    }
}
