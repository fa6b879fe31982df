//! # distrust-core
//!
//! Foundation crate for the distrust scoring engine.
//! Defines evidence types, result models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DistrustConfig, EngineConfig};
pub use errors::{DistrustError, DistrustResult};
pub use evidence::{EvidenceSet, EvidenceSource};
pub use models::{ComponentBreakdown, Outcome, ScoreResult, Verdict};
