//! Planning module - steps, the daily plan state machine, and the
//! candidate set for a given day.

mod candidates;
mod daily_plan;
mod step;

pub use candidates::{carry_over_overdue, CandidateReason, PlanCandidate};
pub use daily_plan::{DailyPlan, PlanError};
pub use step::DailyStep;
