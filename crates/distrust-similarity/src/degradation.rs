//! Fallback chain for embedding generation.
//!
//! Providers are tried in priority order; a failing or unavailable provider
//! hands over to the next one. Each fallback is logged.

use distrust_core::errors::{BackendError, DistrustResult};
use distrust_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Ordered list of embedding providers, itself usable as a provider.
#[derive(Default)]
pub struct ProviderChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    pub fn with(mut self, provider: Box<dyn IEmbeddingProvider>) -> Self {
        self.push(provider);
        self
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    fn exhausted(&self) -> BackendError {
        BackendError::ProviderUnavailable {
            provider: format!("all {} providers failed", self.chain.len()),
        }
    }
}

impl IEmbeddingProvider for ProviderChain {
    fn embed(&self, text: &str) -> DistrustResult<Vec<f32>> {
        for provider in self.chain.iter().filter(|p| p.is_available()) {
            match provider.embed(text) {
                Ok(vec) => return Ok(vec),
                Err(e) => warn!(
                    provider = provider.name(),
                    error = %e,
                    "provider failed, trying next in chain"
                ),
            }
        }
        Err(self.exhausted().into())
    }

    fn embed_batch(&self, texts: &[String]) -> DistrustResult<Vec<Vec<f32>>> {
        for provider in self.chain.iter().filter(|p| p.is_available()) {
            match provider.embed_batch(texts) {
                Ok(vecs) => return Ok(vecs),
                Err(e) => warn!(
                    provider = provider.name(),
                    error = %e,
                    "batch embed failed, trying next in chain"
                ),
            }
        }
        Err(self.exhausted().into())
    }

    fn dimensions(&self) -> usize {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.dimensions())
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        self.active_provider_name()
    }

    fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }
}
