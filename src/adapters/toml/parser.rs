//! TOML parser for routewatch.toml files
//!
//! Handles reading and deserializing routewatch configuration files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_SEVERITY_THRESHOLD, DEFAULT_STALENESS_HOURS};

/// A routewatch.toml file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Alerting thresholds
    #[serde(default)]
    pub rules: RulesSection,

    /// Where traffic data comes from
    #[serde(default)]
    pub feed: FeedSection,

    /// How undescribed locations are named
    #[serde(default)]
    pub registry: RegistrySection,

    /// Known locations
    #[serde(default, rename = "location")]
    pub locations: Vec<LocationEntry>,

    /// Users and their watched locations
    #[serde(default, rename = "user")]
    pub users: Vec<UserEntry>,
}

/// `[rules]` section
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesSection {
    /// Severity at or above which a location is congested
    pub severity_threshold: f64,

    /// Readings older than this many hours are ignored
    pub staleness_hours: i64,
}

impl Default for RulesSection {
    fn default() -> Self {
        Self {
            severity_threshold: DEFAULT_SEVERITY_THRESHOLD,
            staleness_hours: DEFAULT_STALENESS_HOURS,
        }
    }
}

/// `[feed]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    /// JSON feed file, relative to the config file
    pub path: PathBuf,

    /// Seconds between polls in watch mode
    pub poll_interval_secs: u64,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("traffic.json"),
            poll_interval_secs: 10,
        }
    }
}

/// `[registry]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySection {
    /// Template for locations without a description, e.g. `"Node{id} St"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// A `[[location]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Map node identifier
    pub id: u64,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    /// Map tags
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// A `[[user]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    /// Display name
    pub name: String,

    /// Watched location ids
    #[serde(default)]
    pub locations: Vec<u64>,
}

/// Parse configuration from TOML text
///
/// # Errors
///
/// Returns an error if the text is not valid routewatch TOML.
pub fn parse_str(content: &str) -> anyhow::Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from a routewatch.toml file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
}
