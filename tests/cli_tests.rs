//! Command-line tests for the pieceflow binary
//!
//! Inputs are written to temporary files and the binary's output is checked
//! for each format and for argument errors.

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SCENARIO: &str = r#"[
  {
    "id": 1,
    "piece_id": 100,
    "status": 10803,
    "user_id": 9,
    "start_time": 0,
    "end_time": 100
  },
  {
    "id": 2,
    "piece_id": 100,
    "status": 10803,
    "user_id": 9,
    "start_time": 100,
    "end_time": 200
  },
  {
    "id": 3,
    "piece_id": 200,
    "status": 8951,
    "user_id": 7,
    "start_time": 0,
    "end_time": null
  }
]"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_text_report() {
    let input = write_temp(SCENARIO);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .arg("--status")
        .arg("10803")
        .arg("--error-threshold")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The number of unique statuses in the list is 2",
        ))
        .stdout(predicate::str::contains("1. user9: 2"))
        .stdout(predicate::str::contains("2. user7: 1"))
        .stdout(predicate::str::contains("at least 1 errors is 0.5"))
        .stdout(predicate::str::contains("status 10803 is 100"))
        .stdout(predicate::str::contains(
            "The most common path through the system is:\n8951\n",
        ));
}

#[test]
fn test_limit_restricts_users() {
    let input = write_temp(SCENARIO);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. user9: 2"))
        .stdout(predicate::str::contains("user7").not());
}

#[test]
fn test_json_report() {
    let input = write_temp(SCENARIO);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    let output = cmd
        .arg(input.path())
        .arg("--format")
        .arg("json")
        .arg("--top-paths")
        .arg("2")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["unique_statuses"], 2);
    assert_eq!(report["total_records"], 3);
    assert_eq!(report["most_active_users"][0]["user_id"], 9);
    assert_eq!(report["most_common_paths"].as_array().unwrap().len(), 2);
}

#[test]
fn test_csv_report() {
    let input = write_temp(SCENARIO);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("metric,key,value"))
        .stdout(predicate::str::contains("user_records,9,2"));
}

#[test]
fn test_config_file_with_override() {
    let input = write_temp(SCENARIO);
    let config = write_temp("limit = 1\nstatus = 10803\n");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .arg("--config")
        .arg(config.path())
        .arg("--limit")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. user7: 1"))
        .stdout(predicate::str::contains("status 10803 is 100"));
}

#[test]
fn test_negative_limit_rejected() {
    let input = write_temp(SCENARIO);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .arg("--limit")
        .arg("-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid argument: limit must be >= 0, got -1",
        ));
}

#[test]
fn test_missing_input_file() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg("/nonexistent/records.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_malformed_input() {
    let input = write_temp("[{\"id\": 1}]");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid work record JSON"));
}

#[test]
fn test_input_without_pieces_is_domain_error() {
    let input = write_temp(
        r#"[{"id": 1, "piece_id": null, "status": 3, "user_id": 1, "start_time": 0, "end_time": 5}]"#,
    );
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pieceflow");
    cmd.arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined result"));
}
