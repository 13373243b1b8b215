//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! The engine's contract is synchronous and suspension-free: every port is
//! a plain trait over fully-materialized data, and the caller owns any
//! network or storage latency behind it.
//!
//! - `Clock` - injected "today", never read implicitly
//! - `SnapshotReader` - point-in-time read accessor over the collections
//! - `PlanStore` - write accessor for plan and entity mutations

mod clock;
mod snapshot;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use snapshot::{SnapshotError, SnapshotReader, TrackerSnapshot};
pub use store::{PlanStore, StoreError};
