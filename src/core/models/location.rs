//! Location model
//!
//! A location is a map node that a route passes through: an intersection,
//! a bus stop, a landmark. Traffic data and routes both refer to locations
//! by the same node identifier.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a map node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

/// A point of interest on a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Node identifier
    pub id: LocationId,

    /// Where the node is, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,

    /// Free-form map tags (e.g. `highway = "traffic_signals"`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl Location {
    /// Create a bare location with only an identifier
    #[must_use]
    pub const fn new(id: LocationId) -> Self {
        Self {
            id,
            coordinate: None,
            tags: BTreeMap::new(),
        }
    }

    /// Attach a coordinate
    #[must_use]
    pub fn with_coordinate(mut self, lat: f64, lon: f64) -> Self {
        self.coordinate = Some(Coordinate { lat, lon });
        self
    }

    /// Attach a single tag
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}
