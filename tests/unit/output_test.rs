//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use routewatch::core::services::CycleReport;
use routewatch::output::{CycleSummary, OperationResult, OutputMode, UserListResult};

use crate::common::fixtures::{alice, registry, user};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn cycle_summary_quiet_line() {
    let report = CycleReport {
        observations: 5,
        users: 2,
        alerts: Vec::new(),
    };
    let summary = CycleSummary::from_report(&report, "2014-05-01T09:00:00+00:00".to_string());
    assert_eq!(summary.human_line(), "No alerts (5 observation(s) checked for 2 user(s)).");
}

#[test]
fn cycle_summary_serialization() {
    let report = CycleReport {
        observations: 3,
        users: 1,
        alerts: Vec::new(),
    };
    let summary = CycleSummary::from_report(&report, "2014-05-01T09:00:00+00:00".to_string());
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"observations\":3"));
    assert!(json.contains("\"alerts\":0"));
    assert!(json.contains("2014-05-01T09:00:00+00:00"));
}

#[test]
fn user_list_describes_watched_locations() {
    let result = UserListResult::build(&[alice(), user("Empty", &[])], &registry());

    assert_eq!(result.users.len(), 2);
    let alice = &result.users[0];
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.locations.len(), 5);
    assert_eq!(alice.locations[0].description.as_deref(), Some("Intersection of First & Whatsit"));
    assert_eq!(alice.locations[4].description.as_deref(), Some("Node5 St"));
    assert!(result.users[1].locations.is_empty());
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created routewatch.toml".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}
