#![no_main]

use libfuzzer_sys::fuzz_target;
use pieceflow::ingest::{build_store, parse_records};
use pieceflow::AnalyticsEngine;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Malformed input must be rejected, never panic
        if let Ok(records) = parse_records(input) {
            let store = build_store(records);
            let engine = AnalyticsEngine::new(&store);
            let _ = engine.unique_status_count();
            let _ = engine.error_percentage(1);
            let _ = engine.most_common_path();
        }
    }
});
