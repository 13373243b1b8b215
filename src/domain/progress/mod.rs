//! Progress module - goal-level aggregation and the per-aspiration
//! balance read-model.

mod aspiration_balance;
mod goal_progress;

pub use aspiration_balance::{
    aspiration_balance, classify_difficulty, AspirationBalance, Difficulty, Trend,
    XP_PER_COMPLETION,
};
pub use goal_progress::goal_progress;
