//! Stride - Recurrence & Daily-Plan Engine
//!
//! This crate implements the temporal core of a personal goal, habit, and
//! step tracker: recurrence due-ness, daily plan scheduling with overdue
//! carry-over, progress aggregation, and scheduled numeric accruals.
//!
//! The engine is pure and synchronous: callers inject a clock and a
//! point-in-time snapshot, and receive new records or deltas back. The
//! surrounding product's REST and UI layers live outside this crate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
