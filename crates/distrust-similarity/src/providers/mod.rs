//! Embedding providers shipped with the engine.

mod hashed_bow;

pub use hashed_bow::HashedBagOfWords;
