//! Pieceflow - analytics over work-event records
//!
//! This library loads work-event records (a piece of work holding a status,
//! attributed to a user, over a time span) into a deduplicated store and
//! answers read-only questions about them: status cardinality, most active
//! users, per-piece error rates, average dwell time in a status and the most
//! common chronological path of statuses.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod path;
pub mod ranking;
pub mod record;
pub mod report;
pub mod store;

pub use analytics::AnalyticsEngine;
pub use error::AnalyticsError;
pub use record::WorkRecord;
pub use store::RecordStore;
