//! Recurrence module - rule vocabulary and due-ness evaluation.

mod evaluator;
mod rule;

pub use evaluator::{due_dates_in, is_due, next_due_on_or_after};
pub use rule::{RecurrenceKind, RecurrenceRule, RuleError};
