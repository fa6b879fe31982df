use distrust_core::errors::{BackendError, DistrustResult};
use distrust_core::evidence::EvidenceSource;
use distrust_core::models::CoordinationMethod;
use distrust_core::traits::ISimilarityBackend;
use rayon::prelude::*;

use crate::cosine::cosine_similarity;

/// Pairwise cosine similarity over embeddings.
///
/// `coordination` is the fraction of source pairs whose similarity strictly
/// exceeds the threshold. Every source must carry an embedding of the same
/// dimensionality.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticBackend;

impl SemanticBackend {
    pub fn new() -> Self {
        Self
    }

    fn embeddings(sources: &[EvidenceSource]) -> DistrustResult<Vec<&[f32]>> {
        let mut out = Vec::with_capacity(sources.len());
        let mut dims = None;
        for (index, source) in sources.iter().enumerate() {
            let embedding = source
                .embedding
                .as_deref()
                .ok_or(BackendError::MissingEmbedding { index })?;
            match dims {
                None => dims = Some(embedding.len()),
                Some(expected) if expected != embedding.len() => {
                    return Err(BackendError::DimensionMismatch {
                        expected,
                        actual: embedding.len(),
                    }
                    .into());
                }
                Some(_) => {}
            }
            out.push(embedding);
        }
        Ok(out)
    }
}

impl ISimilarityBackend for SemanticBackend {
    fn name(&self) -> &str {
        "semantic"
    }

    fn method(&self) -> CoordinationMethod {
        CoordinationMethod::Semantic
    }

    fn coordination(&self, sources: &[EvidenceSource], threshold: f64) -> DistrustResult<f64> {
        let n = sources.len();
        if n < 2 {
            return Ok(0.0);
        }
        let embeddings = Self::embeddings(sources)?;

        // Integer pair counts keep the result independent of thread scheduling.
        let coordinated: usize = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .filter(|&j| cosine_similarity(embeddings[i], embeddings[j]) > threshold)
                    .count()
            })
            .sum();
        let pairs = n * (n - 1) / 2;

        Ok(coordinated as f64 / pairs as f64)
    }
}
