//! End-to-end analytics scenarios
//!
//! Each test loads records through the JSON ingestion path and runs the
//! engine against the resulting store, the same route the binary takes.

use pieceflow::config::AnalysisConfig;
use pieceflow::ingest::{build_store, parse_records};
use pieceflow::ranking::Ranked;
use pieceflow::record::ABSENT;
use pieceflow::{AnalyticsEngine, AnalyticsError, RecordStore, WorkRecord};

const SCENARIO: &str = r#"[
  {"id": 1, "piece_id": 100, "status": 10803, "user_id": 9, "start_time": 0, "end_time": 100},
  {"id": 2, "piece_id": 100, "status": 10803, "user_id": 9, "start_time": 100, "end_time": 200},
  {"id": 3, "piece_id": 200, "status": 8951, "user_id": 7, "start_time": 0, "end_time": null}
]"#;

fn scenario_store() -> RecordStore {
    build_store(parse_records(SCENARIO).unwrap())
}

#[test]
fn test_scenario_unique_statuses() {
    let store = scenario_store();
    assert_eq!(AnalyticsEngine::new(&store).unique_status_count(), 2);
}

#[test]
fn test_scenario_most_active_users() {
    let store = scenario_store();
    let engine = AnalyticsEngine::new(&store);

    assert_eq!(engine.most_active_users(1).unwrap(), vec![Ranked::new(9, 2)]);
    assert_eq!(
        engine.most_active_users(5).unwrap(),
        vec![Ranked::new(9, 2), Ranked::new(7, 1)]
    );
    assert!(engine.most_active_users(0).unwrap().is_empty());
}

#[test]
fn test_scenario_error_percentage() {
    // Piece 100 has two error statuses, piece 200 none
    let store = scenario_store();
    assert_eq!(AnalyticsEngine::new(&store).error_percentage(1).unwrap(), 0.5);
}

#[test]
fn test_scenario_average_time() {
    // (100 + 100) / 2 pieces
    let store = scenario_store();
    assert_eq!(
        AnalyticsEngine::new(&store)
            .average_time_in_status(10803)
            .unwrap(),
        100
    );
}

#[test]
fn test_scenario_most_common_path() {
    let store = scenario_store();
    // [10803, 10803] and [8951] each occur once; smaller sequence wins
    assert_eq!(
        AnalyticsEngine::new(&store).most_common_path(),
        Some(vec![8951])
    );
}

#[test]
fn test_duplicate_records_count_once() {
    let mut records = parse_records(SCENARIO).unwrap();
    records.push(records[0]);
    let store = build_store(records);

    let users = AnalyticsEngine::new(&store).most_active_users(1).unwrap();
    assert_eq!(users, vec![Ranked::new(9, 2)]);
}

#[test]
fn test_three_piece_path_majority() {
    let store: RecordStore = vec![
        WorkRecord::new(1, 1, 1, 1, 10, 20),
        WorkRecord::new(2, 1, 2, 1, 20, 30),
        WorkRecord::new(3, 1, 3, 1, 30, 40),
        WorkRecord::new(4, 2, 1, 2, 0, 5),
        WorkRecord::new(5, 2, 2, 2, 5, 6),
        WorkRecord::new(6, 2, 3, 2, 6, ABSENT),
        WorkRecord::new(7, 3, 4, 3, 0, 1),
        WorkRecord::new(8, 3, 5, 3, 1, 2),
    ]
    .into_iter()
    .collect();

    let engine = AnalyticsEngine::new(&store);
    assert_eq!(engine.most_common_path(), Some(vec![1, 2, 3]));

    let top = engine.most_common_paths(5).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].key.to_sequence(), vec![4, 5]);
}

#[test]
fn test_summarize_scenario() {
    let store = scenario_store();
    let config = AnalysisConfig {
        limit: 1,
        error_threshold: 1,
        status: 10803,
        top_paths: 2,
    };

    let report = AnalyticsEngine::new(&store).summarize(&config).unwrap();

    assert_eq!(report.total_records, 3);
    assert_eq!(report.unique_statuses, 2);
    assert_eq!(report.most_active_users.len(), 1);
    assert_eq!(report.most_active_users[0].user_id, 9);
    assert_eq!(report.error_percentage, 0.5);
    assert_eq!(report.average_time_in_status, 100);
    assert_eq!(report.most_common_paths.len(), 2);
    assert_eq!(report.most_common_paths[0].statuses, vec![8951]);
    assert_eq!(report.most_common_paths[1].statuses, vec![10803, 10803]);
}

#[test]
fn test_empty_store_queries() {
    let store = build_store(parse_records("[]").unwrap());
    let engine = AnalyticsEngine::new(&store);

    assert_eq!(engine.unique_status_count(), 0);
    assert!(engine.most_active_users(3).unwrap().is_empty());
    assert!(matches!(
        engine.error_percentage(0),
        Err(AnalyticsError::Domain(_))
    ));
    assert!(matches!(
        engine.average_time_in_status(8951),
        Err(AnalyticsError::Domain(_))
    ));
    assert_eq!(engine.most_common_path(), None);
    assert!(matches!(
        engine.summarize(&AnalysisConfig::default()),
        Err(AnalyticsError::Domain(_))
    ));
}
