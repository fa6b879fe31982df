use serde::{Deserialize, Serialize};

use super::EvidenceSource;

/// Ordered collection of evidence for one claim. Owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceSet {
    sources: Vec<EvidenceSource>,
}

impl EvidenceSet {
    pub fn new(sources: Vec<EvidenceSource>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[EvidenceSource] {
        &self.sources
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvidenceSource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn push(&mut self, source: EvidenceSource) {
        self.sources.push(source);
    }

    /// True when every source carries an embedding (and the set is non-empty).
    pub fn fully_embedded(&self) -> bool {
        !self.sources.is_empty() && self.sources.iter().all(|s| s.embedding.is_some())
    }

    pub fn into_inner(self) -> Vec<EvidenceSource> {
        self.sources
    }
}

impl From<Vec<EvidenceSource>> for EvidenceSet {
    fn from(sources: Vec<EvidenceSource>) -> Self {
        Self::new(sources)
    }
}

impl FromIterator<EvidenceSource> for EvidenceSet {
    fn from_iter<I: IntoIterator<Item = EvidenceSource>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EvidenceSet {
    type Item = &'a EvidenceSource;
    type IntoIter = std::slice::Iter<'a, EvidenceSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}
