//! Validation and deduplication of caller evidence.
//!
//! Rules:
//! - `source_id` must be non-blank;
//! - `authority_weight` must be in [0, 1] (or is clamped under
//!   [`OutOfRangePolicy::Clamp`]); NaN is always rejected;
//! - embeddings, when present, must be non-empty, finite, and share one
//!   dimensionality;
//! - verbatim repeats (same `source_id`, same normalized content) collapse to
//!   their first occurrence.

use std::collections::HashSet;

use distrust_core::config::{EngineConfig, OutOfRangePolicy};
use distrust_core::errors::InputError;
use distrust_core::evidence::{EvidenceSet, EvidenceSource};

/// Evidence that passed validation, ready for extraction.
#[derive(Debug, Clone)]
pub struct NormalizedEvidence {
    pub sources: Vec<EvidenceSource>,
    /// Number of sources the caller submitted.
    pub submitted: usize,
    pub duplicates_removed: usize,
}

impl NormalizedEvidence {
    /// Distinct `source_id`s after deduplication.
    pub fn unique_source_count(&self) -> usize {
        self.sources
            .iter()
            .map(|s| s.source_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

pub fn normalize(
    evidence: &EvidenceSet,
    config: &EngineConfig,
) -> Result<NormalizedEvidence, InputError> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(evidence.len());
    let mut sources = Vec::with_capacity(evidence.len());
    let mut dims: Option<usize> = None;

    for (index, source) in evidence.iter().enumerate() {
        if source.source_id.trim().is_empty() {
            return Err(InputError::EmptySourceId { index });
        }

        let authority_weight = check_authority(index, source, config.out_of_range_policy)?;

        if let Some(embedding) = &source.embedding {
            if embedding.is_empty() || embedding.iter().any(|v| !v.is_finite()) {
                return Err(InputError::NonFiniteEmbedding { index });
            }
            match dims {
                None => dims = Some(embedding.len()),
                Some(expected) if expected != embedding.len() => {
                    return Err(InputError::EmbeddingDimensionMismatch {
                        index,
                        expected,
                        actual: embedding.len(),
                    });
                }
                Some(_) => {}
            }
        }

        if !seen.insert((source.source_id.clone(), source.content_key())) {
            continue;
        }

        let mut kept = source.clone();
        kept.authority_weight = authority_weight;
        sources.push(kept);
    }

    Ok(NormalizedEvidence {
        duplicates_removed: evidence.len() - sources.len(),
        submitted: evidence.len(),
        sources,
    })
}

fn check_authority(
    index: usize,
    source: &EvidenceSource,
    policy: OutOfRangePolicy,
) -> Result<f64, InputError> {
    let w = source.authority_weight;
    if (0.0..=1.0).contains(&w) {
        return Ok(w);
    }
    match policy {
        OutOfRangePolicy::Clamp if !w.is_nan() => Ok(w.clamp(0.0, 1.0)),
        _ => Err(InputError::AuthorityOutOfRange {
            index,
            source_id: source.source_id.clone(),
            value: w,
        }),
    }
}
