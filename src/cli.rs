//! CLI argument parsing for pieceflow

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the analytics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "pieceflow")]
#[command(version)]
#[command(about = "Analytics over work-event records: statuses, users, errors, dwell time and paths", long_about = None)]
pub struct Cli {
    /// JSON file containing an array of work records
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// TOML file with analysis parameters (flags below override it)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of most active users to report
    #[arg(short = 'n', long = "limit", value_name = "N", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Minimum error statuses for a piece to count as erroneous
    #[arg(
        short = 'e',
        long = "error-threshold",
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub error_threshold: Option<i64>,

    /// Status whose average dwell time is reported
    #[arg(short = 's', long = "status", value_name = "STATUS", allow_negative_numbers = true)]
    pub status: Option<i64>,

    /// Number of most common paths to report
    #[arg(long = "top-paths", value_name = "K", allow_negative_numbers = true)]
    pub top_paths: Option<i64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
