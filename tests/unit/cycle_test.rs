//! Tests for the poll cycle

use routewatch::core::models::RelevanceRules;
use routewatch::core::services::{RelevanceEngine, run_cycle, validate_watch_sets};

use crate::common::fixtures::{ObservationBuilder, alice, bob, now, registry, user};
use crate::common::mocks::{MockFeed, MockSink};

#[test]
fn cycle_fetches_once_and_publishes_in_order() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let feed = MockFeed::with_batch(vec![
        ObservationBuilder::at(9).severity(1.4).minutes_old(30).build(),
        ObservationBuilder::at(4).severity(2.0).hours_old(1).build(),
        ObservationBuilder::at(1).severity(0.6).minutes_old(10).build(),
        ObservationBuilder::at(5).severity(1.2).hours_old(9).build(),
        ObservationBuilder::at(99).severity(5.0).build(),
    ]);
    let sink = MockSink::new();

    let report = run_cycle(&[alice(), bob()], &feed, &engine, &sink, now()).unwrap();

    assert_eq!(feed.fetches(), 1);
    assert_eq!(report.observations, 5);
    assert_eq!(report.users, 2);
    assert_eq!(
        sink.published(),
        vec![
            ("Alice".to_string(), "Congestion at Intersection of Fourth and Forth".to_string()),
            ("Bob".to_string(), "Congestion at Node9 St".to_string()),
            ("Bob".to_string(), "Congestion at Intersection of Fourth and Forth".to_string()),
        ]
    );
    assert_eq!(report.alerts_for("Bob").count(), 2);
}

#[test]
fn feed_failure_is_not_retried() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let feed = MockFeed::failing();
    let sink = MockSink::new();

    let err = run_cycle(&[alice()], &feed, &engine, &sink, now()).unwrap_err();

    assert_eq!(feed.fetches(), 1);
    assert!(format!("{err:#}").contains("feed unavailable"));
    assert!(sink.published().is_empty());
}

#[test]
fn startup_validation_catches_undescribed_locations() {
    let mut strict = routewatch::adapters::StaticRegistry::new();
    strict.insert(routewatch::core::models::LocationId(1), "Intersection of First & Whatsit");

    assert!(validate_watch_sets(&[user("Ann", &[1])], &strict).is_ok());
    assert!(validate_watch_sets(&[user("Ann", &[1, 2])], &strict).is_err());
    assert!(validate_watch_sets(&[alice(), bob()], &registry()).is_ok());
}
