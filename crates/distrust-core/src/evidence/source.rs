use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// One unit of testimony about a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    /// Text payload. Empty for metadata-only sources.
    #[serde(default)]
    pub content: String,
    /// How institutionally "official" the source is, in [0, 1]. Caller supplied.
    pub authority_weight: f64,
    /// Publication time.
    pub timestamp: DateTime<Utc>,
    /// Identifier, unique within one evaluation. Repeats are the same physical source.
    pub source_id: String,
    /// Optional fixed-length vector for semantic similarity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl EvidenceSource {
    pub fn new(
        content: impl Into<String>,
        authority_weight: f64,
        timestamp: DateTime<Utc>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            authority_weight,
            timestamp,
            source_id: source_id.into(),
            embedding: None,
        }
    }

    /// Build a source from an RFC 3339 timestamp string, as delivered by ingestion.
    pub fn parse(
        content: impl Into<String>,
        authority_weight: f64,
        timestamp: &str,
        source_id: impl Into<String>,
    ) -> Result<Self, InputError> {
        let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
            InputError::MalformedTimestamp {
                value: timestamp.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::new(
            content,
            authority_weight,
            parsed.with_timezone(&Utc),
            source_id,
        ))
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Content as compared by exact matching: trimmed and lowercased.
    pub fn normalized_content(&self) -> String {
        self.content.trim().to_lowercase()
    }

    /// blake3 hash of the normalized content.
    pub fn content_key(&self) -> String {
        blake3::hash(self.normalized_content().as_bytes())
            .to_hex()
            .to_string()
    }

    /// Metadata-only sources carry no comparable text.
    pub fn is_metadata_only(&self) -> bool {
        self.content.trim().is_empty()
    }
}
