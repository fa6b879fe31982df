//! Hashed bag-of-words provider.
//!
//! Projects term frequencies into a fixed number of buckets. Deterministic and
//! dependency-free at runtime, so it works offline and as the last link of a
//! [`crate::ProviderChain`].

use std::collections::BTreeMap;

use distrust_core::errors::DistrustResult;
use distrust_core::traits::IEmbeddingProvider;

/// Hashed bag-of-words embedding provider.
#[derive(Debug, Clone)]
pub struct HashedBagOfWords {
    dimensions: usize,
}

impl HashedBagOfWords {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(&self, term: &str) -> usize {
        let hash = blake3::hash(term.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        (u64::from_le_bytes(bytes) % self.dimensions as u64) as usize
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        // BTreeMap keeps float accumulation order stable across runs.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in tf {
            vec[self.bucket(term)] += count / total;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedBagOfWords {
    fn embed(&self, text: &str) -> DistrustResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-bow"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosine::cosine_similarity;

    #[test]
    fn produces_requested_dimensions() {
        let provider = HashedBagOfWords::new(64);
        assert_eq!(provider.embed("hello world").unwrap().len(), 64);
    }

    #[test]
    fn same_words_embed_identically() {
        let provider = HashedBagOfWords::new(128);
        let a = provider.embed("I love product X!").unwrap();
        let b = provider.embed("i LOVE product x").unwrap();
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn unrelated_texts_are_dissimilar() {
        let provider = HashedBagOfWords::new(256);
        let a = provider.embed("parquet compression ratio measured").unwrap();
        let b = provider.embed("uptime verified by health checks").unwrap();
        assert!(cosine_similarity(&a, &b) < 0.5);
    }

    #[test]
    fn empty_text_is_zero_vector() {
        let provider = HashedBagOfWords::new(16);
        assert!(provider.embed("").unwrap().iter().all(|v| *v == 0.0));
    }
}
