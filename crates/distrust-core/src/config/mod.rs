//! Configuration for the distrust engine.
//!
//! Every section deserializes with `#[serde(default)]`, so a partial (or empty)
//! TOML document yields a fully populated config.

pub mod defaults;
mod embedding_config;
mod engine_config;
mod feedback_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use engine_config::{EngineConfig, OutOfRangePolicy};
pub use feedback_config::{FeedbackConfig, FeedbackMode};
pub use observability_config::ObservabilityConfig;

use crate::errors::{ConfigError, DistrustError, DistrustResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DistrustConfig {
    pub engine: EngineConfig,
    pub feedback: FeedbackConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl DistrustConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(s: &str) -> DistrustResult<Self> {
        let config: Self = toml::from_str(s)?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> DistrustResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| DistrustError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.feedback.validate()?;
        self.embedding.validate()?;
        Ok(())
    }
}
