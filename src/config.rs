//! Runtime configuration
//!
//! Turns a parsed `routewatch.toml` into the objects the core is built
//! from: relevance rules, users with their watch sets, a location registry
//! and a feed location. Lookup order for the file is in [`crate::paths`].

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::TimeDelta;
use log::debug;
use thiserror::Error;

use crate::adapters::registry::StaticRegistry;
use crate::adapters::toml::{ConfigFile, LocationEntry, load_file};
use crate::core::models::{Location, LocationId, RelevanceRules, RulesError, User};
use crate::paths;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file in any searched location
    #[error("no configuration found (searched: {})", join_paths(.0))]
    NotFound(Vec<PathBuf>),

    /// Threshold or window out of range
    #[error("invalid [rules]: {0}")]
    InvalidRules(#[from] RulesError),

    /// Staleness window too large to represent
    #[error("rules.staleness_hours is out of range: {0}")]
    WindowOutOfRange(i64),

    /// Two `[[location]]` entries share an id
    #[error("location {0} is defined more than once")]
    DuplicateLocation(LocationId),

    /// A user entry has an empty name
    #[error("user #{0} has an empty name")]
    EmptyUserName(usize),

    /// Poll interval of zero
    #[error("feed.poll_interval_secs must be greater than zero")]
    ZeroPollInterval,
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// File this configuration came from, if any
    pub source: Option<PathBuf>,
    /// Relevance rules
    pub rules: RelevanceRules,
    /// Users in configuration order
    pub users: Vec<User>,
    /// Location descriptions
    pub registry: StaticRegistry,
    /// Resolved feed file path
    pub feed_path: PathBuf,
    /// Delay between polls in watch mode
    pub poll_interval: Duration,
}

impl AppConfig {
    /// Locate, read and resolve the configuration
    ///
    /// `explicit` (from `--config`) wins over the search order.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is found, it cannot be parsed, or its
    /// contents are invalid.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => paths::find_config()
                .ok_or_else(|| ConfigError::NotFound(paths::config_candidates()))?,
        };
        debug!("Loading configuration from {}", path.display());

        let file = load_file(&path)?;
        let base_dir = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let mut config = Self::from_file(file, &base_dir)?;
        config.source = Some(path);
        Ok(config)
    }

    /// Resolve a parsed file; relative feed paths are taken from `base_dir`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any section is invalid.
    pub fn from_file(file: ConfigFile, base_dir: &Path) -> Result<Self, ConfigError> {
        let window = TimeDelta::try_hours(file.rules.staleness_hours)
            .ok_or(ConfigError::WindowOutOfRange(file.rules.staleness_hours))?;
        let rules = RelevanceRules::new(file.rules.severity_threshold, window)?;

        if file.feed.poll_interval_secs == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        let locations = index_locations(&file.locations)?;

        let mut registry = StaticRegistry::new();
        if let Some(template) = file.registry.fallback {
            registry = registry.with_fallback(template);
        }
        for entry in &file.locations {
            if let Some(description) = &entry.description {
                registry.insert(LocationId(entry.id), description.clone());
            }
        }

        let mut users = Vec::with_capacity(file.users.len());
        for (index, entry) in file.users.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyUserName(index + 1));
            }
            let watched = entry.locations.into_iter().map(|id| {
                let id = LocationId(id);
                locations.get(&id).cloned().unwrap_or_else(|| Location::new(id))
            });
            users.push(User::build(entry.name, watched));
        }

        Ok(Self {
            source: None,
            rules,
            users,
            registry,
            feed_path: base_dir.join(file.feed.path),
            poll_interval: Duration::from_secs(file.feed.poll_interval_secs),
        })
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

fn index_locations(
    entries: &[LocationEntry],
) -> Result<HashMap<LocationId, Location>, ConfigError> {
    let mut seen = HashSet::new();
    let mut locations = HashMap::with_capacity(entries.len());

    for entry in entries {
        let id = LocationId(entry.id);
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateLocation(id));
        }

        let mut location = Location::new(id);
        if let (Some(lat), Some(lon)) = (entry.lat, entry.lon) {
            location = location.with_coordinate(lat, lon);
        }
        location.tags.clone_from(&entry.tags);
        locations.insert(id, location);
    }

    Ok(locations)
}
