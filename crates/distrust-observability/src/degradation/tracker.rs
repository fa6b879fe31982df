//! Record degradation transitions: component, failure mode, fallback used, timestamp, recovery status.
//!
//! A component that is already degraded is not recorded again; repeats only
//! bump `occurrences`. History is capped at [`MAX_TRACKED_EVENTS`], dropping the
//! oldest recovered entries first.

use chrono::{DateTime, Utc};
use distrust_core::models::{DegradationEvent, ScoreResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Upper bound on retained events.
pub const MAX_TRACKED_EVENTS: usize = 64;

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// Recovered to normal operation.
    Recovered,
}

/// A tracked degradation event with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
    /// Degraded evaluations seen while this event was active.
    pub occurrences: u64,
}

/// Tracks degradation events across evaluations for alerting and reporting.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degradation event. Returns `false` when the component was
    /// already degraded and only its occurrence count changed.
    pub fn record(&mut self, event: DegradationEvent) -> bool {
        if let Some(active) = self.events.iter_mut().rev().find(|t| {
            t.event.component == event.component && t.recovery_status == RecoveryStatus::Active
        }) {
            active.occurrences += 1;
            return false;
        }

        warn!(
            component = %event.component,
            failure = %event.failure,
            fallback = %event.fallback_used,
            "degradation recorded"
        );
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
            occurrences: 1,
        });
        self.evict();
        true
    }

    fn evict(&mut self) {
        while self.events.len() > MAX_TRACKED_EVENTS {
            let oldest = self
                .events
                .iter()
                .position(|t| t.recovery_status == RecoveryStatus::Recovered)
                .unwrap_or(0);
            self.events.remove(oldest);
        }
    }

    /// Inspect a result: record its degradation, or mark the component
    /// recovered when a semantic evaluation succeeded again.
    pub fn observe(&mut self, result: &ScoreResult, now: DateTime<Utc>) {
        match &result.components.degradation {
            Some(event) => {
                self.record(event.clone());
            }
            None if result.components.coordination_method
                == distrust_core::models::CoordinationMethod::Semantic =>
            {
                self.mark_recovered_at("coordination", now)
            }
            None => {}
        }
    }

    /// Mark a component as recovered.
    pub fn mark_recovered(&mut self, component: &str) {
        self.mark_recovered_at(component, Utc::now());
    }

    fn mark_recovered_at(&mut self, component: &str, now: DateTime<Utc>) {
        for tracked in self.events.iter_mut().rev() {
            if tracked.event.component == component
                && tracked.recovery_status == RecoveryStatus::Active
            {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(now);
                info!(component, "degradation recovered");
                break;
            }
        }
    }

    /// Events still in degraded mode.
    pub fn active(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn all(&self) -> &[TrackedDegradation] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
