//! Error taxonomy for the distrust engine.
//!
//! Each concern has its own enum; `DistrustError` aggregates them.

mod backend_error;
mod config_error;
mod input_error;

pub use backend_error::BackendError;
pub use config_error::ConfigError;
pub use input_error::InputError;

/// Crate-wide result alias.
pub type DistrustResult<T> = Result<T, DistrustError>;

/// Top-level error for every fallible distrust operation.
#[derive(Debug, thiserror::Error)]
pub enum DistrustError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("similarity backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("failed to read config {path}: {reason}")]
    ConfigIo { path: String, reason: String },
}

impl From<serde_json::Error> for DistrustError {
    fn from(err: serde_json::Error) -> Self {
        DistrustError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DistrustError {
    fn from(err: toml::de::Error) -> Self {
        DistrustError::Serialization(err.to_string())
    }
}
