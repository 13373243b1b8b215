//! Aspiration entity - a top-level grouping of goals and habits.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AspirationId;

/// A top-level grouping entity for aggregated progress reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspiration {
    pub id: AspirationId,
    pub name: String,
}

impl Aspiration {
    /// Creates an aspiration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AspirationId::new(),
            name: name.into(),
        }
    }
}
