//! Raw traffic records
//!
//! The feed publishes one record per map node:
//!
//! ```json
//! { "osm_id": 4, "avg_ds": 2.0, "updated_at": "2014-05-01T08:00:00Z" }
//! ```
//!
//! `avg_ds` is the average degree of saturation at the node. Any other
//! fields are ignored.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{LocationId, Observation};

/// Naive formats accepted after RFC 3339, interpreted as local time
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Errors turning a record's timestamp into an instant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The record has no `updated_at`
    #[error("missing updated_at")]
    Missing,

    /// The value is not a recognised date-time
    #[error("unrecognised timestamp: {0:?}")]
    Unparseable(String),
}

/// A traffic record as it appears in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord {
    /// Map node identifier
    pub osm_id: u64,

    /// Average degree of saturation
    pub avg_ds: f64,

    /// Last update, as text
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<FeedRecord> for Observation {
    type Error = TimestampError;

    fn try_from(record: FeedRecord) -> Result<Self, Self::Error> {
        let raw = record.updated_at.ok_or(TimestampError::Missing)?;
        let updated_at = parse_timestamp(&raw)?;
        Ok(Self::new(LocationId(record.osm_id), record.avg_ds, updated_at))
    }
}

/// Parse a feed timestamp
///
/// Accepts RFC 3339 (with offset) or a naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]`
/// which is read as local wall-clock time. A naive time repeated by a DST
/// change resolves to its earlier instant.
///
/// # Errors
///
/// Returns [`TimestampError::Unparseable`] if no format matches, or if a
/// naive time falls in a DST gap and never occurs locally.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Missing);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| TimestampError::Unparseable(raw.to_string()))
}
