//! src/frequency.rs
use crate::tokenizer::tokenize;
use std::collections::BTreeMap;

/// Token -> occurrence count.
///
/// Backed by a `BTreeMap` so the JSON rendering always lists tokens in the
/// same order, which keeps re-runs byte-identical and test diffs readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TermFrequencyMap(BTreeMap<String, u64>);

impl TermFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every token in `text` under the shared tokenization rule.
    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::new();
        for token in tokenize(text) {
            counts.add(token, 1);
        }
        counts
    }

    pub fn add(&mut self, token: impl Into<String>, count: u64) {
        *self.0.entry(token.into()).or_insert(0) += count;
    }

    /// Pointwise addition. Commutative and associative, so any merge order
    /// over the same inputs produces the same map.
    pub fn merge(&mut self, other: TermFrequencyMap) {
        for (token, count) in other.0 {
            self.add(token, count);
        }
    }

    pub fn count(&self, token: &str) -> u64 {
        self.0.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(token, count)| (token.as_str(), *count))
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

impl FromIterator<(String, u64)> for TermFrequencyMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (token, count) in iter {
            counts.add(token, count);
        }
        counts
    }
}
