//! Automation module - scheduled numeric accruals.

mod accrual;
mod automation;

pub use accrual::{apply_accrual, is_accrual_due, run_due_accruals, AccrualOutcome};
pub use automation::Automation;
