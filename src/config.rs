//! Analysis parameters
//!
//! Values may come from a TOML file and be overridden on the command line.
//! Fields are signed so that a negative value parses and is rejected by
//! `validate` (run by the engine before a summary) as an invalid argument.

use crate::error::{self, require_non_negative};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters for a full analytics run
///
/// # Example
/// ```
/// use pieceflow::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.limit, 5);
/// assert_eq!(config.status, 8951);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// How many of the most active users to report
    pub limit: i64,

    /// Minimum number of error statuses for a piece to count as erroneous
    pub error_threshold: i64,

    /// Status whose average dwell time is reported
    pub status: i64,

    /// How many of the most common paths to report
    pub top_paths: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            error_threshold: 2,
            status: 8951,
            top_paths: 1,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid analysis config TOML")
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            bail!("Config file not found: {}", path_ref.display());
        }

        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read config file {}", path_ref.display()))?;

        Self::from_toml_str(&contents)
    }

    /// Validate configuration
    ///
    /// Fails with `AnalyticsError::InvalidArgument` naming the first
    /// negative count or threshold.
    pub fn validate(&self) -> error::Result<()> {
        require_non_negative("limit", self.limit)?;
        require_non_negative("error_threshold", self.error_threshold)?;
        require_non_negative("top_paths", self.top_paths)?;
        Ok(())
    }
}
