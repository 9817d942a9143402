//! Analytics report and its output formats
//!
//! The report is plain data; rendering to text, JSON or CSV happens here so
//! the engine never deals with formatting.

use crate::config::AnalysisConfig;
use crate::path::StatusPath;
use crate::ranking::Ranked;
use serde::{Deserialize, Serialize};

/// One ranked user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivity {
    /// 1-based rank
    pub rank: usize,
    pub user_id: i64,
    /// Number of records attributed to the user
    pub records: usize,
}

/// One ranked status path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathFrequency {
    /// 1-based rank
    pub rank: usize,
    pub statuses: Vec<i64>,
    /// Number of pieces that followed this path
    pub pieces: usize,
    /// FNV-1a fingerprint of the status sequence
    pub fingerprint: u64,
}

/// Results of a full analytics run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_records: usize,
    pub unique_statuses: usize,
    pub user_limit: i64,
    pub most_active_users: Vec<UserActivity>,
    pub error_threshold: i64,
    /// Fraction in [0, 1]
    pub error_percentage: f64,
    pub status: i64,
    pub average_time_in_status: i64,
    pub most_common_paths: Vec<PathFrequency>,
}

impl AnalyticsReport {
    pub fn new(
        config: &AnalysisConfig,
        total_records: usize,
        unique_statuses: usize,
        users: Vec<Ranked<i64>>,
        error_percentage: f64,
        average_time_in_status: i64,
        paths: Vec<Ranked<StatusPath>>,
    ) -> Self {
        let most_active_users = users
            .into_iter()
            .enumerate()
            .map(|(i, ranked)| UserActivity {
                rank: i + 1,
                user_id: ranked.key,
                records: ranked.count,
            })
            .collect();

        let most_common_paths = paths
            .into_iter()
            .enumerate()
            .map(|(i, ranked)| PathFrequency {
                rank: i + 1,
                fingerprint: ranked.key.fingerprint(),
                statuses: ranked.key.to_sequence(),
                pieces: ranked.count,
            })
            .collect();

        Self {
            total_records,
            unique_statuses,
            user_limit: config.limit,
            most_active_users,
            error_threshold: config.error_threshold,
            error_percentage,
            status: config.status,
            average_time_in_status,
            most_common_paths,
        }
    }

    /// Human-readable summary
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "The number of unique statuses in the list is {}\n",
            self.unique_statuses
        ));

        output.push_str(&format!(
            "Here are the {} users with the most entries:\n",
            self.user_limit
        ));
        for user in &self.most_active_users {
            output.push_str(&format!(
                "{}. user{}: {}\n",
                user.rank, user.user_id, user.records
            ));
        }

        output.push_str(&format!(
            "The percentage of pieces with at least {} errors is {}\n",
            self.error_threshold, self.error_percentage
        ));

        output.push_str(&format!(
            "The average time a piece spends in status {} is {}\n",
            self.status, self.average_time_in_status
        ));

        match self.most_common_paths.as_slice() {
            [] => output.push_str("There is no common path through the system\n"),
            [only] => {
                output.push_str("The most common path through the system is:\n");
                output.push_str(&join_statuses(&only.statuses));
                output.push('\n');
            }
            paths => {
                output.push_str(&format!(
                    "The {} most common paths through the system are:\n",
                    paths.len()
                ));
                for path in paths {
                    output.push_str(&format!(
                        "{}. {} ({} pieces)\n",
                        path.rank,
                        join_statuses(&path.statuses),
                        path.pieces
                    ));
                }
            }
        }

        output
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// `metric,key,value` rows for spreadsheet analysis
    pub fn to_csv(&self) -> String {
        let mut rows = vec![
            "metric,key,value".to_string(),
            format!("total_records,,{}", self.total_records),
            format!("unique_statuses,,{}", self.unique_statuses),
        ];

        for user in &self.most_active_users {
            rows.push(format!("user_records,{},{}", user.user_id, user.records));
        }

        rows.push(format!(
            "error_percentage,{},{}",
            self.error_threshold, self.error_percentage
        ));
        rows.push(format!(
            "average_time_in_status,{},{}",
            self.status, self.average_time_in_status
        ));

        for path in &self.most_common_paths {
            rows.push(format!(
                "path_pieces,{},{}",
                escape_field(&join_statuses(&path.statuses)),
                path.pieces
            ));
        }

        let mut csv = rows.join("\n");
        csv.push('\n');
        csv
    }
}

fn join_statuses(statuses: &[i64]) -> String {
    statuses
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
