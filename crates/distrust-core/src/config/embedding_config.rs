use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Embedding provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Install the built-in hashed provider for sources that arrive without
    /// embeddings. Off by default: such sets use exact content matching.
    pub enabled: bool,
    /// Dimensionality of the built-in hashed provider.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::invalid("dimensions", self.dimensions, "must be > 0"));
        }
        Ok(())
    }
}
