//! Coordination backends.

mod exact_match;
mod semantic;

pub use exact_match::ExactMatchBackend;
pub use semantic::SemanticBackend;
