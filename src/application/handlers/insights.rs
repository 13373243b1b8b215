//! GetAspirationInsightsHandler - balances and difficulty grouping for
//! every aspiration in the snapshot.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::AggregationConfig;
use crate::domain::progress::{
    aspiration_balance, classify_difficulty, AspirationBalance, Difficulty,
};
use crate::ports::{Clock, SnapshotError, SnapshotReader};

/// Errors raised while assembling insights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightsError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// One aspiration's balance plus its display grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspirationInsight {
    pub name: String,
    pub balance: AspirationBalance,
    pub difficulty: Difficulty,
}

/// Handler computing per-aspiration insights.
pub struct GetAspirationInsightsHandler {
    reader: Arc<dyn SnapshotReader>,
    clock: Arc<dyn Clock>,
    config: AggregationConfig,
}

impl GetAspirationInsightsHandler {
    pub fn new(
        reader: Arc<dyn SnapshotReader>,
        clock: Arc<dyn Clock>,
        config: AggregationConfig,
    ) -> Self {
        Self {
            reader,
            clock,
            config,
        }
    }

    pub fn handle(&self) -> Result<Vec<AspirationInsight>, InsightsError> {
        let snapshot = self.reader.snapshot()?;
        let today = self.clock.today();

        Ok(snapshot
            .aspirations
            .iter()
            .map(|aspiration| {
                let balance = aspiration_balance(
                    aspiration.id,
                    &snapshot.goals,
                    &snapshot.habits,
                    &snapshot.steps,
                    today,
                    &self.config,
                );
                let difficulty = classify_difficulty(&balance, &self.config);
                AspirationInsight {
                    name: aspiration.name.clone(),
                    balance,
                    difficulty,
                }
            })
            .collect())
    }
}
