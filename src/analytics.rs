//! Read-only analytics over a record store
//!
//! Every query validates its arguments before scanning, fails instead of
//! returning a numeric sentinel when a denominator would be zero, and leaves
//! the store untouched. Intermediate maps and paths live only for the
//! duration of one query.

use crate::config::AnalysisConfig;
use crate::error::{require_non_negative, AnalyticsError, Result};
use crate::path::{paths_by_piece, PathTally, StatusPath};
use crate::ranking::{count_by, top_ranked, Ranked};
use crate::record::WorkRecord;
use crate::report::AnalyticsReport;
use crate::store::RecordStore;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Query engine borrowing a populated store
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Number of distinct status codes (repeats collapsed)
    pub fn unique_status_count(&self) -> usize {
        let statuses: HashSet<i64> = self.store.all().map(WorkRecord::status).collect();
        debug!(
            records = self.store.len(),
            statuses = statuses.len(),
            "counted unique statuses"
        );
        statuses.len()
    }

    /// Users with the most records, highest first, lowest user id on ties
    ///
    /// Records without a user are ignored. Returns at most `limit` entries.
    pub fn most_active_users(&self, limit: i64) -> Result<Vec<Ranked<i64>>> {
        let limit = require_non_negative("limit", limit)?;

        let per_user = count_by(self.store.all(), |record| {
            record.has_user().then_some(record.user_id())
        });
        debug!(users = per_user.len(), limit, "ranking users by activity");

        Ok(top_ranked(per_user, limit))
    }

    /// Fraction of pieces with at least `error_threshold` error statuses
    ///
    /// Only records attached to a piece are considered. Fails with a domain
    /// error when no record has a piece.
    pub fn error_percentage(&self, error_threshold: i64) -> Result<f64> {
        let threshold = require_non_negative("error_threshold", error_threshold)?;

        let mut errors_per_piece: HashMap<i64, usize> = HashMap::new();
        for record in self.store.all().filter(|r| r.has_piece()) {
            let errors = errors_per_piece.entry(record.piece_id()).or_insert(0);
            if record.is_error_status() {
                *errors += 1;
            }
        }

        if errors_per_piece.is_empty() {
            return Err(AnalyticsError::Domain(
                "error percentage requires at least one record with a piece_id".to_string(),
            ));
        }

        let meeting = errors_per_piece
            .values()
            .filter(|&&errors| errors >= threshold)
            .count();
        debug!(
            pieces = errors_per_piece.len(),
            meeting, threshold, "computed error percentage"
        );

        Ok(meeting as f64 / errors_per_piece.len() as f64)
    }

    /// Total finished time spent in `status` divided by the number of
    /// distinct piece ids in the whole store
    ///
    /// The denominator is deliberately not filtered by status. Records still
    /// in progress contribute nothing to the total. Integer division.
    pub fn average_time_in_status(&self, status: i64) -> Result<i64> {
        if self.store.is_empty() {
            return Err(AnalyticsError::Domain(
                "average time in status requires a non-empty record store".to_string(),
            ));
        }

        let mut total_time: i64 = 0;
        let mut matched = 0usize;
        let mut pieces: HashSet<i64> = HashSet::new();
        for record in self.store.all() {
            if record.status() == status {
                if let Some(duration) = record.duration() {
                    total_time = total_time.saturating_add(duration);
                    matched += 1;
                }
            }
            pieces.insert(record.piece_id());
        }

        if matched == 0 {
            warn!(status, "no finished records in status");
        }
        debug!(
            status,
            matched,
            total_time,
            pieces = pieces.len(),
            "computed average time in status"
        );

        Ok(total_time / pieces.len() as i64)
    }

    /// Status sequence followed by the largest number of pieces
    ///
    /// Ties go to the lexicographically smallest sequence. `None` when the
    /// store is empty.
    pub fn most_common_path(&self) -> Option<Vec<i64>> {
        self.path_tally()
            .most_common()
            .map(|ranked| ranked.key.to_sequence())
    }

    /// The `k` most common paths with the number of pieces following each
    pub fn most_common_paths(&self, k: i64) -> Result<Vec<Ranked<StatusPath>>> {
        let k = require_non_negative("top_paths", k)?;
        Ok(self.path_tally().top(k))
    }

    /// Run every query with the given parameters
    pub fn summarize(&self, config: &AnalysisConfig) -> Result<AnalyticsReport> {
        // No query runs on a bad config
        config.validate()?;

        Ok(AnalyticsReport::new(
            config,
            self.store.len(),
            self.unique_status_count(),
            self.most_active_users(config.limit)?,
            self.error_percentage(config.error_threshold)?,
            self.average_time_in_status(config.status)?,
            self.most_common_paths(config.top_paths)?,
        ))
    }

    fn path_tally(&self) -> PathTally {
        let tally: PathTally = paths_by_piece(self.store.all()).into_values().collect();
        debug!(
            pieces = tally.total(),
            distinct_paths = tally.distinct(),
            "tallied status paths"
        );
        tally
    }
}
