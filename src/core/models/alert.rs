//! Alert model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::LocationId;

/// A notification produced for one user about one observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Name of the user the alert is for
    pub user: String,
    /// Location the observation concerned
    pub location_id: LocationId,
    /// Severity reported by the observation
    pub severity: f64,
    /// Timestamp of the observation
    pub observed_at: DateTime<Utc>,
    /// Rendered human-readable message
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Render the message for a congested location
#[must_use]
pub fn congestion_message(description: &str) -> String {
    format!("Congestion at {description}")
}
