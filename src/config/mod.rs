//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `STRIDE` prefix
//! and nested sections use double underscores as separators, e.g.
//! `STRIDE__AGGREGATION__WINDOW_DAYS=30`.

mod aggregation;
mod error;

pub use aggregation::AggregationConfig;
pub use error::{ConfigError, ValidationError};

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Root engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EngineConfig {
    /// Balance/trend aggregation tunables.
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

static DEFAULT_CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::default);

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development), then reads
    /// `STRIDE`-prefixed environment variables into the typed sections.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed or fail semantic
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRIDE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.aggregation.validate()
    }

    /// The process-wide default configuration, for callers that do not
    /// override any tunable.
    pub fn shared_default() -> &'static EngineConfig {
        &DEFAULT_CONFIG
    }
}
