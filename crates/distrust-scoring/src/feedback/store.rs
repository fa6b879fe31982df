//! Engine-wide learned corrections for adaptive feedback.
//!
//! Each pattern bucket holds a posterior distrust estimate. It starts at the
//! configured prior and is multiplied by the verified/falsified factor on every
//! outcome, bounded to `[MIN_POSTERIOR_DISTRUST, 1]`. A later evaluation in the
//! same bucket is scaled by `posterior / prior`.
//!
//! Lifecycle: created with the engine, cleared by [`FeedbackStore::reset`],
//! exported with [`FeedbackStore::snapshot`] and re-imported with
//! [`FeedbackStore::restore`]. Where snapshots are stored is up to the caller.

use dashmap::DashMap;
use distrust_core::config::FeedbackConfig;
use distrust_core::constants::MIN_POSTERIOR_DISTRUST;
use distrust_core::models::Outcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{factor, PatternSignature};

/// Learned state of one pattern bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternPosterior {
    pub posterior: f64,
    pub observations: u64,
}

/// One exported bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub signature: PatternSignature,
    pub posterior: f64,
    pub observations: u64,
}

/// Serializable export of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSnapshot {
    pub prior: f64,
    pub entries: Vec<SnapshotEntry>,
}

/// Concurrent map of pattern posteriors.
#[derive(Debug)]
pub struct FeedbackStore {
    prior: f64,
    config: FeedbackConfig,
    buckets: DashMap<PatternSignature, PatternPosterior>,
}

impl FeedbackStore {
    pub fn new(prior: f64, config: FeedbackConfig) -> Self {
        Self {
            prior,
            config,
            buckets: DashMap::new(),
        }
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }

    /// Multiplier for evaluations in `signature`'s bucket. 1.0 when unseen.
    pub fn correction(&self, signature: &PatternSignature) -> f64 {
        self.buckets
            .get(signature)
            .map(|b| b.posterior / self.prior)
            .unwrap_or(1.0)
    }

    /// Fold an outcome into the bucket's posterior. Returns the new posterior.
    pub fn record(&self, signature: PatternSignature, outcome: Outcome) -> f64 {
        let mut entry = self.buckets.entry(signature).or_insert(PatternPosterior {
            posterior: self.prior,
            observations: 0,
        });
        entry.posterior =
            (entry.posterior * factor(outcome, &self.config)).clamp(MIN_POSTERIOR_DISTRUST, 1.0);
        entry.observations += 1;
        debug!(
            ?signature,
            ?outcome,
            posterior = entry.posterior,
            observations = entry.observations,
            "pattern posterior updated"
        );
        entry.posterior
    }

    pub fn get(&self, signature: &PatternSignature) -> Option<PatternPosterior> {
        self.buckets.get(signature).map(|b| *b)
    }

    /// Forget everything learned.
    pub fn reset(&self) {
        self.buckets.clear();
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Export all buckets, ordered by signature.
    pub fn snapshot(&self) -> FeedbackSnapshot {
        let mut entries: Vec<SnapshotEntry> = self
            .buckets
            .iter()
            .map(|e| SnapshotEntry {
                signature: *e.key(),
                posterior: e.value().posterior,
                observations: e.value().observations,
            })
            .collect();
        entries.sort_by_key(|e| e.signature);
        FeedbackSnapshot {
            prior: self.prior,
            entries,
        }
    }

    /// Replace current state with a snapshot.
    ///
    /// Posteriors learned under a different prior are rescaled so their
    /// correction (`posterior / prior`) is preserved.
    pub fn restore(&self, snapshot: &FeedbackSnapshot) {
        self.buckets.clear();
        let rescale = if snapshot.prior > 0.0 {
            self.prior / snapshot.prior
        } else {
            1.0
        };
        for entry in &snapshot.entries {
            self.buckets.insert(
                entry.signature,
                PatternPosterior {
                    posterior: (entry.posterior * rescale).clamp(MIN_POSTERIOR_DISTRUST, 1.0),
                    observations: entry.observations,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(a: u8) -> PatternSignature {
        PatternSignature {
            authority: a,
            entropy: 9,
            coordination: 9,
        }
    }

    #[test]
    fn unseen_bucket_has_no_correction() {
        let store = FeedbackStore::new(0.5, FeedbackConfig::adaptive());
        assert_eq!(store.correction(&sig(1)), 1.0);
    }

    #[test]
    fn outcomes_compound_multiplicatively() {
        let store = FeedbackStore::new(0.5, FeedbackConfig::adaptive());
        store.record(sig(1), Outcome::Falsified);
        assert!((store.correction(&sig(1)) - 1.2).abs() < 1e-12);
        store.record(sig(1), Outcome::Verified);
        assert!((store.correction(&sig(1)) - 0.96).abs() < 1e-12);
        assert_eq!(store.get(&sig(1)).unwrap().observations, 2);
        // Other buckets untouched.
        assert_eq!(store.correction(&sig(2)), 1.0);
    }

    #[test]
    fn posterior_is_bounded() {
        let store = FeedbackStore::new(0.5, FeedbackConfig::adaptive());
        for _ in 0..100 {
            store.record(sig(3), Outcome::Falsified);
        }
        assert_eq!(store.get(&sig(3)).unwrap().posterior, 1.0);
        for _ in 0..1000 {
            store.record(sig(3), Outcome::Verified);
        }
        assert_eq!(store.get(&sig(3)).unwrap().posterior, MIN_POSTERIOR_DISTRUST);
    }

    #[test]
    fn reset_clears() {
        let store = FeedbackStore::new(0.5, FeedbackConfig::adaptive());
        store.record(sig(1), Outcome::Verified);
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.correction(&sig(1)), 1.0);
    }

    #[test]
    fn snapshot_restore_preserves_corrections() {
        let store = FeedbackStore::new(0.5, FeedbackConfig::adaptive());
        store.record(sig(2), Outcome::Verified);
        store.record(sig(1), Outcome::Falsified);
        let snap = store.snapshot();
        assert_eq!(snap.entries[0].signature, sig(1));

        let other = FeedbackStore::new(0.25, FeedbackConfig::adaptive());
        other.restore(&snap);
        assert!((other.correction(&sig(1)) - 1.2).abs() < 1e-12);
        assert!((other.correction(&sig(2)) - 0.8).abs() < 1e-12);
    }
}
