//! Tests for the relevance engine
//!
//! Scenarios use Alice (nodes 1-5) and Bob (nodes 4-10) against the
//! hand-named intersections.

use chrono::TimeDelta;
use routewatch::adapters::StaticRegistry;
use routewatch::core::models::{LocationId, RelevanceRules};
use routewatch::core::services::{EvaluateError, RelevanceEngine};

use crate::common::fixtures::{ObservationBuilder, alice, bob, now, registry, user};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn congested_fresh_reading_alerts_once() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(4).severity(2.0).hours_old(1).build()];

    let alerts = engine.evaluate(&alice(), &batch, now()).unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "Congestion at Intersection of Fourth and Forth");
    assert_eq!(alerts[0].to_string(), alerts[0].message);
}

#[test]
fn clear_reading_is_ignored() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(4).severity(0.5).hours_old(1).build()];

    assert!(engine.evaluate(&alice(), &batch, now()).unwrap().is_empty());
}

#[test]
fn stale_reading_is_ignored() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(4).severity(2.0).hours_old(9).build()];

    assert!(engine.evaluate(&alice(), &batch, now()).unwrap().is_empty());
}

#[test]
fn unwatched_reading_only_reaches_its_watchers() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(99).severity(5.0).build()];

    assert!(engine.evaluate(&alice(), &batch, now()).unwrap().is_empty());

    let alerts = engine.evaluate(&user("Dora", &[99]), &batch, now()).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "Congestion at Node99 St");
}

#[test]
fn shared_location_alerts_both_users() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(5).severity(1.1).minutes_old(20).build()];

    let for_alice = engine.evaluate(&alice(), &batch, now()).unwrap();
    let for_bob = engine.evaluate(&bob(), &batch, now()).unwrap();

    assert_eq!(for_alice.len(), 1);
    assert_eq!(for_bob.len(), 1);
    assert_eq!(for_alice[0].user, "Alice");
    assert_eq!(for_bob[0].user, "Bob");
    assert_eq!(for_alice[0].message, for_bob[0].message);
}

// =============================================================================
// EDGE CASES
// =============================================================================

#[test]
fn empty_watch_set_never_alerts() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(1).build(), ObservationBuilder::at(2).build()];

    assert!(engine.evaluate(&user("Nobody", &[]), &batch, now()).unwrap().is_empty());
}

#[test]
fn empty_batch_never_alerts() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);

    assert!(engine.evaluate(&alice(), &[], now()).unwrap().is_empty());
}

#[test]
fn alert_carries_observation_details() {
    let registry = registry();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let observation = ObservationBuilder::at(2).severity(1.7).minutes_old(45).build();

    let alert = engine.evaluate(&alice(), &[observation], now()).unwrap().remove(0);

    assert_eq!(alert.location_id, LocationId(2));
    assert!((alert.severity - 1.7).abs() < f64::EPSILON);
    assert_eq!(alert.observed_at, observation.updated_at);
}

#[test]
fn missing_description_fails_loudly() {
    let registry = StaticRegistry::new();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(3).build()];

    let err = engine.evaluate(&alice(), &batch, now()).unwrap_err();
    assert!(matches!(
        err,
        EvaluateError::UndescribedLocation { user: ref name, location: LocationId(3) }
            if name == "Alice"
    ));
}

#[test]
fn missing_description_is_not_checked_for_filtered_readings() {
    let registry = StaticRegistry::new();
    let engine = RelevanceEngine::new(RelevanceRules::default(), &registry);
    let batch = [ObservationBuilder::at(3).severity(0.2).build()];

    assert!(engine.evaluate(&alice(), &batch, now()).unwrap().is_empty());
}

#[test]
fn tighter_window_drops_older_readings() {
    let registry = registry();
    let rules = RelevanceRules::new(1.0, TimeDelta::minutes(30)).unwrap();
    let engine = RelevanceEngine::new(rules, &registry);
    let batch = [
        ObservationBuilder::at(1).minutes_old(10).build(),
        ObservationBuilder::at(2).minutes_old(45).build(),
    ];

    let alerts = engine.evaluate(&alice(), &batch, now()).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].location_id, LocationId(1));
}
