//! Traffic observation model
//!
//! One reading from the feed: how congested a node is and when that was
//! last measured. Timestamps are already parsed by the time an observation
//! exists; records with bad timestamps are rejected by the feed adapter.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::LocationId;

/// A single traffic reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Node the reading applies to
    pub location_id: LocationId,

    /// Congestion score (degree of saturation); 1.0 and above is congested
    pub severity: f64,

    /// When the reading was last updated
    pub updated_at: DateTime<Utc>,
}

impl Observation {
    /// Create an observation
    #[must_use]
    pub const fn new(location_id: LocationId, severity: f64, updated_at: DateTime<Utc>) -> Self {
        Self {
            location_id,
            severity,
            updated_at,
        }
    }

    /// How old the reading is relative to `now`
    ///
    /// Negative when the reading is stamped in the future.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.updated_at
    }
}
