//! # distrust-similarity
//!
//! Coordination detection strategies and the embedding providers that feed them.
//!
//! Backend choice is made per evaluation by [`select_backend`]: caller-supplied
//! embeddings win, then an injected provider, then exact content matching.

pub mod backends;
pub mod cosine;
pub mod degradation;
pub mod providers;
pub mod selection;

pub use backends::{ExactMatchBackend, SemanticBackend};
pub use cosine::cosine_similarity;
pub use degradation::ProviderChain;
pub use providers::HashedBagOfWords;
pub use selection::{detect_coordination, select_backend, CoordinationOutcome, Selection};
