//! Per-evaluation backend selection with exact-match fallback.
//!
//! Order of preference:
//! 1. every source carries a caller-supplied embedding → semantic;
//! 2. an embedding provider is injected → embed all contents, semantic;
//! 3. otherwise → exact content matching.
//!
//! A provider failure in step 2 never surfaces as an error. It produces a
//! [`DegradationEvent`] and the exact-match result.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use distrust_core::errors::DistrustResult;
use distrust_core::evidence::EvidenceSource;
use distrust_core::models::{CoordinationMethod, DegradationEvent};
use distrust_core::traits::{IEmbeddingProvider, ISimilarityBackend};
use tracing::{debug, warn};

use crate::backends::{ExactMatchBackend, SemanticBackend};

/// Component name used in degradation events.
pub const COMPONENT: &str = "coordination";

/// Backend chosen for one evaluation, with the sources it should see.
pub struct Selection<'a> {
    pub backend: &'static dyn ISimilarityBackend,
    pub sources: Cow<'a, [EvidenceSource]>,
    pub degradation: Option<DegradationEvent>,
}

impl Selection<'_> {
    /// Method label for the breakdown. Fewer than two sources is trivial.
    pub fn method(&self) -> CoordinationMethod {
        if self.sources.len() < 2 {
            CoordinationMethod::Trivial
        } else {
            self.backend.method()
        }
    }

    /// Run the selected backend. A semantic failure degrades to exact matching.
    pub fn coordination(self, threshold: f64, now: DateTime<Utc>) -> CoordinationOutcome {
        let method = self.method();
        match self.backend.coordination(&self.sources, threshold) {
            Ok(score) => CoordinationOutcome {
                score,
                method,
                degradation: self.degradation,
            },
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "similarity backend failed, using exact match");
                let score = exact_score(&self.sources, threshold);
                CoordinationOutcome {
                    score,
                    method: if self.sources.len() < 2 {
                        CoordinationMethod::Trivial
                    } else {
                        CoordinationMethod::ExactMatch
                    },
                    degradation: Some(degraded(self.backend.name(), &e.to_string(), now)),
                }
            }
        }
    }
}

/// Coordination signal plus how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinationOutcome {
    pub score: f64,
    pub method: CoordinationMethod,
    pub degradation: Option<DegradationEvent>,
}

static EXACT: ExactMatchBackend = ExactMatchBackend;
static SEMANTIC: SemanticBackend = SemanticBackend;

/// Choose a backend for `sources`.
pub fn select_backend<'a>(
    sources: &'a [EvidenceSource],
    provider: Option<&dyn IEmbeddingProvider>,
    now: DateTime<Utc>,
) -> Selection<'a> {
    let exact = |degradation| Selection {
        backend: &EXACT,
        sources: Cow::Borrowed(sources),
        degradation,
    };

    if sources.len() < 2 {
        return exact(None);
    }

    if sources.iter().all(|s| s.embedding.is_some()) {
        return Selection {
            backend: &SEMANTIC,
            sources: Cow::Borrowed(sources),
            degradation: None,
        };
    }

    let Some(provider) = provider else {
        return exact(None);
    };

    if !provider.is_available() {
        warn!(provider = provider.name(), "embedding provider unavailable, using exact match");
        return exact(Some(degraded(provider.name(), "provider unavailable", now)));
    }

    match embed_all(sources, provider) {
        Ok(embedded) => {
            debug!(provider = provider.name(), count = embedded.len(), "embedded sources for coordination");
            Selection {
                backend: &SEMANTIC,
                sources: Cow::Owned(embedded),
                degradation: None,
            }
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "embedding failed, using exact match");
            exact(Some(degraded(provider.name(), &e.to_string(), now)))
        }
    }
}

/// Select and run in one step.
pub fn detect_coordination(
    sources: &[EvidenceSource],
    provider: Option<&dyn IEmbeddingProvider>,
    threshold: f64,
    now: DateTime<Utc>,
) -> CoordinationOutcome {
    select_backend(sources, provider, now).coordination(threshold, now)
}

fn embed_all(
    sources: &[EvidenceSource],
    provider: &dyn IEmbeddingProvider,
) -> DistrustResult<Vec<EvidenceSource>> {
    let texts: Vec<String> = sources.iter().map(|s| s.content.clone()).collect();
    let vectors = provider.embed_batch(&texts)?;
    if vectors.len() != sources.len() {
        return Err(distrust_core::errors::BackendError::InferenceFailed {
            reason: format!(
                "provider returned {} embeddings for {} sources",
                vectors.len(),
                sources.len()
            ),
        }
        .into());
    }
    Ok(sources
        .iter()
        .zip(vectors)
        .map(|(s, v)| s.clone().with_embedding(v))
        .collect())
}

fn exact_score(sources: &[EvidenceSource], threshold: f64) -> f64 {
    // Exact matching cannot fail.
    EXACT.coordination(sources, threshold).unwrap_or(0.0)
}

fn degraded(failed: &str, failure: &str, now: DateTime<Utc>) -> DegradationEvent {
    DegradationEvent {
        component: COMPONENT.to_string(),
        failure: format!("{failed}: {failure}"),
        fallback_used: EXACT.name().to_string(),
        timestamp: now,
    }
}
