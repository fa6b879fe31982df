//! Degradation tracking for the coordination backend.

mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation, MAX_TRACKED_EVENTS};
