//! # distrust-scoring
//!
//! Turns an evidence set into a bounded distrust score.
//!
//! ```text
//! EvidenceSet → normalize → { authority, entropy, coordination, temporal } → combine → feedback
//! ```
//!
//! The four extractors run in parallel and never read each other's output.
//! Temporal weights meet the per-source authority factors only in the combiner,
//! where they weight the authority aggregate.

pub mod baseline;
pub mod combiner;
pub mod engine;
pub mod factors;
pub mod feedback;
pub mod normalize;

pub use combiner::{Combined, Signals};
pub use engine::{evaluate, DistrustEngine};
pub use feedback::{FeedbackSnapshot, FeedbackStore, PatternPosterior, PatternSignature};
pub use normalize::NormalizedEvidence;
