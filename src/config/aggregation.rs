//! Aggregation configuration - the tunables behind balance and trend
//! computation. None of these are hidden magic constants; callers can
//! override every threshold through the environment.

use serde::Deserialize;

use super::ValidationError;

fn default_window_days() -> u32 {
    90
}

fn default_trend_margin() -> f64 {
    0.15
}

fn default_easy_threshold() -> f64 {
    80.0
}

fn default_hard_threshold() -> f64 {
    30.0
}

/// Tunables for aspiration balance aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregationConfig {
    /// Length of the "recent" window in days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Relative margin by which the recent XP rate must beat (or trail)
    /// the historical average before the trend leaves neutral.
    #[serde(default = "default_trend_margin")]
    pub trend_margin: f64,

    /// Recent completion rate (percent) at or above which an aspiration
    /// groups as "easy".
    #[serde(default = "default_easy_threshold")]
    pub easy_threshold: f64,

    /// Recent completion rate (percent) below which an aspiration groups
    /// as "hard".
    #[serde(default = "default_hard_threshold")]
    pub hard_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            trend_margin: default_trend_margin(),
            easy_threshold: default_easy_threshold(),
            hard_threshold: default_hard_threshold(),
        }
    }
}

impl AggregationConfig {
    /// Validates the semantic constraints between tunables.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.window_days == 0 {
            return Err(ValidationError::WindowTooShort);
        }
        if self.trend_margin < 0.0 {
            return Err(ValidationError::NegativeTrendMargin);
        }
        for threshold in [self.easy_threshold, self.hard_threshold] {
            if !(0.0..=100.0).contains(&threshold) {
                return Err(ValidationError::ThresholdOutOfRange);
            }
        }
        if self.hard_threshold >= self.easy_threshold {
            return Err(ValidationError::ThresholdsInverted);
        }
        Ok(())
    }
}
