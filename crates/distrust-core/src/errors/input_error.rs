/// Evidence rejected during validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("source {index} ({source_id}): authority weight {value} outside [0, 1]")]
    AuthorityOutOfRange {
        index: usize,
        source_id: String,
        value: f64,
    },

    #[error("source {index}: empty source_id")]
    EmptySourceId { index: usize },

    #[error("malformed timestamp {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: String },

    #[error("source {index}: embedding has {actual} dimensions, expected {expected}")]
    EmbeddingDimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("source {index}: embedding is empty or contains non-finite values")]
    NonFiniteEmbedding { index: usize },
}
