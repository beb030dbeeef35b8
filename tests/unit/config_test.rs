//! Tests for configuration loading

use std::fs;

use chrono::TimeDelta;
use routewatch::adapters::toml::sample_config;
use routewatch::config::AppConfig;
use routewatch::core::models::LocationId;
use routewatch::core::ports::LocationRegistry;
use tempfile::TempDir;

#[test]
fn load_sample_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("routewatch.toml");
    fs::write(&path, sample_config("traffic.json")).unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();

    assert_eq!(config.source.as_deref(), Some(path.as_path()));
    assert_eq!(config.feed_path, dir.path().join("traffic.json"));
    assert_eq!(config.rules.staleness_window(), TimeDelta::hours(8));

    let names: Vec<_> = config.users.iter().map(|u| u.name().to_string()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(
        config.registry.describe(LocationId(2)).as_deref(),
        Some("Credability St. Bus Stop")
    );
    assert_eq!(config.registry.describe(LocationId(7)).as_deref(), Some("Node7 St"));
}

#[test]
fn load_custom_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[rules]\nseverity_threshold = 0.8\nstaleness_hours = 2\n\n\
         [feed]\npoll_interval_secs = 60\n",
    )
    .unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();

    assert!((config.rules.severity_threshold() - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.rules.staleness_window(), TimeDelta::hours(2));
    assert_eq!(config.poll_interval.as_secs(), 60);
}

#[test]
fn load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config"));
}

#[test]
fn load_invalid_toml_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("routewatch.toml");
    fs::write(&path, "[[user]\nname = ").unwrap();

    let err = AppConfig::load(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}
