//! # distrust-observability
//!
//! Tracing subscriber setup, span macros for engine operations, and a tracker
//! for degradation events raised when the semantic backend falls back.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation, MAX_TRACKED_EVENTS};
pub use tracing_setup::init;
