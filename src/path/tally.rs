use super::StatusPath;
use crate::ranking::{rank_counts, top_ranked, Ranked};
use std::collections::HashMap;

/// Frequency table of distinct status paths
#[derive(Debug, Clone, Default)]
pub struct PathTally {
    counts: HashMap<StatusPath, usize>,
}

impl PathTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `path`, returning its new tally
    pub fn record(&mut self, path: StatusPath) -> usize {
        let tally = self.counts.entry(path).or_insert(0);
        *tally += 1;
        *tally
    }

    /// Occurrences of `path` seen so far
    pub fn count(&self, path: &StatusPath) -> usize {
        self.counts.get(path).copied().unwrap_or(0)
    }

    /// Number of distinct paths
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of paths recorded
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The path with the highest tally
    ///
    /// Ties go to the lexicographically smallest status sequence, so the
    /// result does not depend on the order paths were recorded in.
    pub fn most_common(self) -> Option<Ranked<StatusPath>> {
        rank_counts(self.counts).into_iter().next()
    }

    /// The `k` most common paths, same ordering as `most_common`
    pub fn top(self, k: usize) -> Vec<Ranked<StatusPath>> {
        top_ranked(self.counts, k)
    }
}

impl FromIterator<StatusPath> for PathTally {
    fn from_iter<I: IntoIterator<Item = StatusPath>>(iter: I) -> Self {
        let mut tally = Self::new();
        for path in iter {
            tally.record(path);
        }
        tally
    }
}
