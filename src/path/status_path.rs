use crate::record::WorkRecord;
use fnv::FnvHasher;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Chronological sequence of statuses held by a single piece
///
/// Steps are keyed by start time and kept sorted on insert. Equality, hashing
/// and ordering only look at the resulting status sequence; the timestamps
/// themselves do not take part, so two pieces that passed through the same
/// statuses at different times share a path.
#[derive(Debug, Clone, Default)]
pub struct StatusPath {
    steps: BTreeMap<i64, i64>,
}

impl StatusPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the piece entered `status` at `start_time`
    ///
    /// A second status at the same start time replaces the first; the
    /// replaced status is returned.
    pub fn put(&mut self, start_time: i64, status: i64) -> Option<i64> {
        self.steps.insert(start_time, status)
    }

    /// Statuses in ascending start-time order
    pub fn statuses(&self) -> impl Iterator<Item = i64> + '_ {
        self.steps.values().copied()
    }

    /// Snapshot of the status sequence
    pub fn to_sequence(&self) -> Vec<i64> {
        self.statuses().collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Stable 64-bit identifier of the status sequence (FNV-1a)
    ///
    /// Equal paths always share a fingerprint, independent of process or
    /// platform, which makes it usable in reports and logs.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for StatusPath {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.statuses().eq(other.statuses())
    }
}

impl Eq for StatusPath {}

// Must agree with `eq`: order-sensitive fold over the statuses plus length.
impl Hash for StatusPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for status in self.statuses() {
            state.write_i64(status);
        }
    }
}

/// Lexicographic over the status sequence
impl Ord for StatusPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.statuses().cmp(other.statuses())
    }
}

impl PartialOrd for StatusPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<(i64, i64)> for StatusPath {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let mut path = Self::new();
        for (start_time, status) in iter {
            path.put(start_time, status);
        }
        path
    }
}

impl fmt::Display for StatusPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for status in self.statuses() {
            write!(f, "{}{}", separator, status)?;
            separator = " ";
        }
        Ok(())
    }
}

/// Build one path per `piece_id` from the given records
///
/// Records without a piece share the sentinel key and therefore one path.
/// Records are applied in `(start_time, id, status, user_id, end_time)`
/// order, so when two records of a piece share a start time the one with the
/// higher `id` wins, whatever order the records arrive in.
pub fn paths_by_piece<'a, I>(records: I) -> HashMap<i64, StatusPath>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    let mut ordered: Vec<&WorkRecord> = records.into_iter().collect();
    ordered.sort_unstable_by_key(|r| {
        (r.start_time(), r.id(), r.status(), r.user_id(), r.end_time())
    });

    let mut paths: HashMap<i64, StatusPath> = HashMap::new();
    for record in ordered {
        paths
            .entry(record.piece_id())
            .or_default()
            .put(record.start_time(), record.status());
    }
    paths
}
