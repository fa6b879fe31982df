//! Test fixture loader for reference scenarios shared across crates.
//!
//! Scenarios are JSON documents under `fixtures/`. Each pins a reference time
//! so temporal weights are reproducible.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use distrust_core::evidence::{EvidenceSet, EvidenceSource};
use distrust_core::models::Verdict;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Expected outcome of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Expectation {
    pub verdict: Verdict,
    pub min_score: f64,
    pub max_score: f64,
    #[serde(default)]
    pub astroturf_override: Option<bool>,
}

impl Expectation {
    pub fn contains(&self, score: f64) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}

/// One evidence set with a pinned reference time and expected result.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub reference_time: DateTime<Utc>,
    pub sources: Vec<EvidenceSource>,
    pub expected: Expectation,
}

impl Scenario {
    pub fn evidence(&self) -> EvidenceSet {
        EvidenceSet::new(self.sources.clone())
    }
}

/// Load a file holding an array of scenarios.
pub fn load_scenarios(relative_path: &str) -> Vec<Scenario> {
    load_fixture(relative_path)
}

/// Every scenario under `fixtures/scenarios/`, file by file.
pub fn all_scenarios() -> Vec<Scenario> {
    list_fixtures("scenarios")
        .iter()
        .flat_map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str::<Vec<Scenario>>(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}
