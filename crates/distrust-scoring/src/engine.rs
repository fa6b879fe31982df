use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use distrust_core::config::{DistrustConfig, EngineConfig, FeedbackConfig, FeedbackMode};
use distrust_core::errors::DistrustResult;
use distrust_core::evidence::EvidenceSet;
use distrust_core::models::{ComponentBreakdown, Outcome, ScoreResult, Verdict};
use distrust_core::traits::{IClock, IDistrustScorer, IEmbeddingProvider, SystemClock};
use distrust_observability::{
    batch_span, evaluation_span, feedback_span, DegradationTracker, TrackedDegradation,
};
use distrust_similarity::HashedBagOfWords;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::combiner::{self, Signals};
use crate::factors::{authority, coordination, entropy, temporal};
use crate::feedback::{self, FeedbackStore, PatternSignature};
use crate::normalize;

/// Distrust engine: normalizes evidence, extracts the four signals in
/// parallel, combines them, and folds in verification feedback.
///
/// Stateless unless built with an adaptive [`FeedbackConfig`], in which case
/// it owns a [`FeedbackStore`] shared by every evaluation on this instance.
pub struct DistrustEngine {
    config: EngineConfig,
    feedback: FeedbackConfig,
    provider: Option<Arc<dyn IEmbeddingProvider>>,
    clock: Arc<dyn IClock>,
    store: Option<FeedbackStore>,
    degradations: Mutex<DegradationTracker>,
}

impl DistrustEngine {
    /// Create an engine with stateless feedback and no embedding provider.
    pub fn new(config: EngineConfig) -> DistrustResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            feedback: FeedbackConfig::default(),
            provider: None,
            clock: Arc::new(SystemClock),
            store: None,
            degradations: Mutex::new(DegradationTracker::new()),
        })
    }

    /// Build from a full configuration document.
    pub fn from_config(config: &DistrustConfig) -> DistrustResult<Self> {
        config.validate()?;
        let mut engine = Self::new(config.engine.clone())?.with_feedback(config.feedback.clone())?;
        if config.embedding.enabled {
            engine = engine.with_provider(Arc::new(HashedBagOfWords::new(config.embedding.dimensions)));
        }
        Ok(engine)
    }

    /// Set the feedback mode. Adaptive mode starts with an empty store.
    pub fn with_feedback(mut self, feedback: FeedbackConfig) -> DistrustResult<Self> {
        feedback.validate()?;
        self.store = match feedback.mode {
            FeedbackMode::Adaptive => {
                Some(FeedbackStore::new(self.config.prior_distrust, feedback.clone()))
            }
            FeedbackMode::Stateless => None,
        };
        self.feedback = feedback;
        Ok(self)
    }

    /// Embed sources that arrive without embeddings.
    pub fn with_provider(mut self, provider: Arc<dyn IEmbeddingProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn IClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn feedback_config(&self) -> &FeedbackConfig {
        &self.feedback
    }

    /// The learned pattern store. `None` in stateless mode.
    pub fn feedback_store(&self) -> Option<&FeedbackStore> {
        self.store.as_ref()
    }

    /// Coordination fallbacks seen by this engine, with recovery status.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.degradations
            .lock()
            .map(|tracker| tracker.all().to_vec())
            .unwrap_or_default()
    }

    /// Drop the degradation history.
    pub fn clear_degradations(&self) {
        if let Ok(mut tracker) = self.degradations.lock() {
            *tracker = DegradationTracker::new();
        }
    }

    /// Forget everything learned in adaptive mode. No-op when stateless.
    pub fn reset_learning(&self) {
        if let Some(store) = &self.store {
            store.reset();
            info!("adaptive feedback state reset");
        }
    }

    /// Score one evidence set.
    ///
    /// `reference_time` is "now" for temporal decay; defaults to the engine's
    /// clock. With the same inputs and reference time, stateless results are
    /// bit-identical.
    pub fn evaluate(
        &self,
        evidence: &EvidenceSet,
        outcome: Option<Outcome>,
        reference_time: Option<DateTime<Utc>>,
    ) -> DistrustResult<ScoreResult> {
        let span = evaluation_span!(evidence.len());
        let _guard = span.enter();

        if evidence.is_empty() {
            debug!("empty evidence set, returning neutral result");
            let neutral = ScoreResult::neutral();
            return Ok(match outcome {
                Some(o) => self.apply_feedback(&neutral, o),
                None => neutral,
            });
        }

        let now = self.clock.now();
        let reference = reference_time.unwrap_or(now);
        let normalized = normalize::normalize(evidence, &self.config)?;
        let sources = normalized.sources.as_slice();

        let steepness = self.config.authority_steepness;
        let halflife = self.config.temporal_halflife_secs();
        let threshold = self.config.coordination_threshold;
        let provider = self.provider.as_deref();

        let ((factors, temporal_weights), (entropy, coordination)) = rayon::join(
            || {
                rayon::join(
                    || authority::factors(sources, steepness),
                    || temporal::weights(sources, reference, halflife),
                )
            },
            || {
                rayon::join(
                    || entropy::normalized(sources),
                    || coordination::detect(sources, provider, threshold, now),
                )
            },
        );

        let authority =
            authority::aggregate(sources, &factors, &temporal_weights, self.config.log_floor);

        let signals = Signals {
            authority: authority.factor,
            authority_weight: authority.weight,
            entropy,
            coordination: coordination.score,
        };
        debug!(
            authority = signals.authority,
            authority_weight = signals.authority_weight,
            entropy = signals.entropy,
            coordination = signals.coordination,
            method = ?coordination.method,
            "components extracted"
        );

        let combined = combiner::combine(&signals, &self.config);
        if combined.astroturf {
            warn!(
                authority_weight = signals.authority_weight,
                coordination = signals.coordination,
                score = combined.score,
                "astroturf pattern detected"
            );
        }

        let components = ComponentBreakdown {
            authority: signals.authority,
            authority_weight: signals.authority_weight,
            entropy: signals.entropy,
            coordination: signals.coordination,
            temporal_avg_weight: temporal::average(&temporal_weights),
            source_count: normalized.submitted,
            unique_source_count: normalized.unique_source_count(),
            duplicates_removed: normalized.duplicates_removed,
            coordination_method: coordination.method,
            astroturf_override: combined.astroturf,
            degradation: coordination.degradation,
        };

        let learned_correction = self
            .store
            .as_ref()
            .map(|store| store.correction(&self.signature(&components)))
            .unwrap_or(1.0);
        let distrust_score = (combined.score * learned_correction).clamp(0.0, 1.0);

        let result = ScoreResult {
            distrust_score,
            verdict: Verdict::from_score(distrust_score),
            source_count: components.source_count,
            unique_sources: components.unique_source_count,
            components,
            base_score: combined.score,
            learned_correction,
            outcome: None,
        };
        info!(
            score = result.distrust_score,
            verdict = %result.verdict,
            sources = result.source_count,
            "evidence evaluated"
        );
        if let Ok(mut tracker) = self.degradations.lock() {
            tracker.observe(&result, now);
        }

        Ok(match outcome {
            Some(o) => self.apply_feedback(&result, o),
            None => result,
        })
    }

    /// Score many evidence sets in parallel. Each set is independent; one
    /// invalid set does not affect the others.
    pub fn evaluate_batch(
        &self,
        sets: &[EvidenceSet],
        reference_time: Option<DateTime<Utc>>,
    ) -> Vec<DistrustResult<ScoreResult>> {
        let span = batch_span!(sets.len());
        let _guard = span.enter();

        let reference = reference_time.unwrap_or_else(|| self.clock.now());
        sets.par_iter()
            .map(|set| self.evaluate(set, None, Some(reference)))
            .collect()
    }

    /// Fold a verification outcome into `result`, returning the adjusted copy.
    ///
    /// In adaptive mode the outcome is also recorded against the result's
    /// pattern signature, after the adjusted result is built.
    pub fn apply_feedback(&self, result: &ScoreResult, outcome: Outcome) -> ScoreResult {
        let span = feedback_span!(outcome, self.feedback.mode);
        let _guard = span.enter();

        let adjusted = feedback::apply(result, outcome, &self.feedback);
        if let Some(store) = &self.store {
            if !result.is_indeterminate() {
                store.record(self.signature(&result.components), outcome);
            }
        }
        adjusted
    }

    fn signature(&self, components: &ComponentBreakdown) -> PatternSignature {
        PatternSignature::from_breakdown(components, self.feedback.pattern_resolution)
    }
}

impl IDistrustScorer for DistrustEngine {
    fn evaluate(
        &self,
        evidence: &EvidenceSet,
        outcome: Option<Outcome>,
        reference_time: Option<DateTime<Utc>>,
    ) -> DistrustResult<ScoreResult> {
        DistrustEngine::evaluate(self, evidence, outcome, reference_time)
    }
}

/// One-shot stateless evaluation without an embedding provider.
pub fn evaluate(
    evidence: &EvidenceSet,
    config: &EngineConfig,
    outcome: Option<Outcome>,
    reference_time: Option<DateTime<Utc>>,
) -> DistrustResult<ScoreResult> {
    DistrustEngine::new(config.clone())?.evaluate(evidence, outcome, reference_time)
}
