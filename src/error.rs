//! Error types for analytics queries

use thiserror::Error;

/// Errors raised by analytics queries before any computation happens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("invalid argument: {name} must be >= 0, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("undefined result: {0}")]
    Domain(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Reject negative counts and thresholds
pub(crate) fn require_non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| AnalyticsError::InvalidArgument { name, value })
}
