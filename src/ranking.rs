//! Count aggregation and deterministic ranking
//!
//! Rankings sort by descending count and break ties by ascending key, which
//! makes the order total: two entries only compare equal when both key and
//! count match. Output is therefore reproducible regardless of the iteration
//! order of the underlying hash maps.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// An entity paired with how many times it was counted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<K> {
    pub key: K,
    pub count: usize,
}

impl<K> Ranked<K> {
    pub fn new(key: K, count: usize) -> Self {
        Self { key, count }
    }
}

impl<K: Ord> Ord for Ranked<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl<K: Ord> PartialOrd for Ranked<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Count items per key; items mapped to `None` are skipped
///
/// # Example
/// ```
/// use pieceflow::ranking::count_by;
///
/// let counts = count_by([1, 2, 2, -1], |n| (n > 0).then_some(n));
/// assert_eq!(counts.get(&2), Some(&2));
/// assert_eq!(counts.get(&-1), None);
/// ```
pub fn count_by<I, K, F>(items: I, mut key: F) -> HashMap<K, usize>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(I::Item) -> Option<K>,
{
    let mut counts = HashMap::new();
    for item in items {
        if let Some(k) = key(item) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// Rank every entry: highest count first, lowest key first on ties
pub fn rank_counts<K: Ord>(counts: HashMap<K, usize>) -> Vec<Ranked<K>> {
    let mut ranked: Vec<_> = counts
        .into_iter()
        .map(|(key, count)| Ranked::new(key, count))
        .collect();

    // Total order, so stability is irrelevant
    ranked.sort_unstable();
    ranked
}

/// Rank entries and keep the first `limit` (fewer if there are not enough)
pub fn top_ranked<K: Ord>(counts: HashMap<K, usize>, limit: usize) -> Vec<Ranked<K>> {
    let mut ranked = rank_counts(counts);
    ranked.truncate(limit);
    ranked
}
