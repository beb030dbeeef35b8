//! JSON file feed provider
//!
//! Implements the `FeedProvider` port over a JSON fixture file. The file is
//! re-read on every fetch so an updated fixture is picked up on the next
//! poll.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use super::record::FeedRecord;
use crate::core::models::Observation;
use crate::core::ports::FeedProvider;

/// Errors reading a feed as a whole
///
/// Individual bad records are not errors; they are dropped with a warning.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Feed file could not be read
    #[error("failed to read feed {path}: {source}")]
    Io {
        /// Path of the feed file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Feed is not a JSON array
    #[error("feed is not a JSON array of records: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Feed provider backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    /// Create a feed that reads from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this feed reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedProvider for JsonFileFeed {
    fn fetch(&self) -> anyhow::Result<Vec<Observation>> {
        let content = fs::read_to_string(&self.path).map_err(|source| FeedError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_feed(&content)?)
    }
}

/// Parse a feed document into observations
///
/// Records that are malformed, or whose timestamp is missing or
/// unparseable, are skipped with a warning so one bad record does not
/// sink the batch.
///
/// # Errors
///
/// Returns [`FeedError::Malformed`] if the document is not a JSON array.
pub fn parse_feed(content: &str) -> Result<Vec<Observation>, FeedError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)?;
    let mut observations = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let record: FeedRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping feed record #{index}: {e}");
                continue;
            },
        };

        let osm_id = record.osm_id;
        match Observation::try_from(record) {
            Ok(observation) => observations.push(observation),
            Err(e) => warn!("Skipping feed record #{index} (node {osm_id}): {e}"),
        }
    }

    Ok(observations)
}
