//! Core aggregation data structures.

use std::collections::HashMap;

use crate::analysis::suspicious::DEFAULT_FAILED_LOGIN_THRESHOLD;

/// A frequency table that remembers first-seen insertion order.
///
/// Counting itself only needs a map, but every place the results surface
/// (most-accessed endpoint, sorted report tables, CSV export) needs a
/// deterministic order for ties. Keeping the first-seen order alongside the
/// counts gives one total order used uniformly: stable descending sorts keep
/// first-seen order among equal counts, and [`max_entry`](Self::max_entry)
/// returns the first key to reach the maximum.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` to the count for `key`, inserting it at the end of the
    /// first-seen order if new.
    pub fn add(&mut self, key: &str, n: usize) {
        match self.counts.get_mut(key) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(key.to_string(), n);
                self.order.push(key.to_string());
            }
        }
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order.iter().map(|key| (key.as_str(), self.counts[key]))
    }

    /// Entries sorted by descending count; equal counts keep first-seen
    /// order (the sort is stable).
    pub fn sorted_desc(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The entry with the highest count, or `None` for an empty table.
    /// Among equal maxima the first-seen key wins.
    pub fn max_entry(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (key, count) in self.iter() {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((key, count));
            }
        }
        best
    }
}

/// Tunable analysis parameters.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Failed-login count a source address must exceed (strictly) to be
    /// flagged as suspicious.
    pub failed_login_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            failed_login_threshold: DEFAULT_FAILED_LOGIN_THRESHOLD,
        }
    }
}

/// Aggregated output of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Request count per source address (first log field).
    pub requests_per_source: FrequencyTable,
    /// Access count per endpoint path.
    pub endpoint_access: FrequencyTable,
    /// The single most-accessed endpoint and its count; `None` when no line
    /// carried a parseable request field.
    pub most_accessed: Option<(String, usize)>,
    /// Source addresses whose failed-login count exceeded the threshold.
    pub suspicious: FrequencyTable,
}
