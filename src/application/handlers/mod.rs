//! Application handlers.
//!
//! Command and query handlers that orchestrate the ports and domain.

mod complete_step;
mod daily_agenda;
mod insights;
mod plan_step;
mod run_accruals;

pub use complete_step::{CompleteStepCommand, CompleteStepError, CompleteStepHandler};
pub use daily_agenda::{
    AgendaError, DailyAgenda, GetDailyAgendaHandler, GetDailyAgendaQuery, GoalProgressView,
};
pub use insights::{AspirationInsight, GetAspirationInsightsHandler, InsightsError};
pub use plan_step::{
    PlanCommandError, PlanStepCommand, PlanStepHandler, UnplanStepCommand, UnplanStepHandler,
};
pub use run_accruals::{AccrualRunError, RunAccrualsHandler};
