//! Seams between the engine and its collaborators.

mod clock;
mod embedding;
mod scorer;
mod similarity;

pub use clock::{FixedClock, IClock, SystemClock};
pub use embedding::IEmbeddingProvider;
pub use scorer::IDistrustScorer;
pub use similarity::ISimilarityBackend;
