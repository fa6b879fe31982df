use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Whether verified outcomes only adjust the returned result or also teach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMode {
    /// Feedback adjusts the single result. No state survives the call.
    #[default]
    Stateless,
    /// Feedback also updates the engine's pattern store and corrects later
    /// evaluations with a similar component profile.
    Adaptive,
}

/// Feedback updater configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub mode: FeedbackMode,
    /// Multiplier applied when the claim was verified true. Must be in (0, 1).
    pub verified_factor: f64,
    /// Multiplier applied when the claim was verified false. Must be > 1.
    pub falsified_factor: f64,
    /// Buckets per signal used to build pattern signatures in adaptive mode.
    pub pattern_resolution: u8,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            mode: FeedbackMode::default(),
            verified_factor: defaults::DEFAULT_VERIFIED_FACTOR,
            falsified_factor: defaults::DEFAULT_FALSIFIED_FACTOR,
            pattern_resolution: defaults::DEFAULT_PATTERN_RESOLUTION,
        }
    }
}

impl FeedbackConfig {
    pub fn adaptive() -> Self {
        Self {
            mode: FeedbackMode::Adaptive,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.verified_factor > 0.0 && self.verified_factor < 1.0) {
            return Err(ConfigError::invalid(
                "verified_factor",
                self.verified_factor,
                "must be in (0, 1)",
            ));
        }
        if !self.falsified_factor.is_finite() || self.falsified_factor <= 1.0 {
            return Err(ConfigError::invalid(
                "falsified_factor",
                self.falsified_factor,
                "must be finite and > 1",
            ));
        }
        if self.pattern_resolution == 0 {
            return Err(ConfigError::invalid(
                "pattern_resolution",
                self.pattern_resolution,
                "must be > 0",
            ));
        }
        Ok(())
    }
}
