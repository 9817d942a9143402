//! Deduplicated record storage
//!
//! The store owns every loaded `WorkRecord`. It is filled once by the loader
//! and then only read by analytics queries.

use crate::record::WorkRecord;
use std::collections::HashSet;

/// Set of structurally distinct work records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashSet<WorkRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless an identical one is already present
    ///
    /// Returns `true` when the record was new.
    pub fn add(&mut self, record: WorkRecord) -> bool {
        self.records.insert(record)
    }

    /// Iterate over all records in unspecified order
    pub fn all(&self) -> impl Iterator<Item = &WorkRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<WorkRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = WorkRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<WorkRecord> for RecordStore {
    fn extend<I: IntoIterator<Item = WorkRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
