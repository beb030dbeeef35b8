//! Location registry port
//!
//! Defines the interface for describing locations to humans.

use super::super::models::LocationId;

/// Lookup of human-readable location descriptions
pub trait LocationRegistry: Send + Sync {
    /// Describe a location, e.g. "Intersection of 3rd and Main"
    ///
    /// Returns `None` if the location is unknown. Every location that
    /// appears in a watch set is expected to be describable.
    fn describe(&self, id: LocationId) -> Option<String>;

    /// Whether the location has a description
    fn is_describable(&self, id: LocationId) -> bool {
        self.describe(id).is_some_and(|d| !d.trim().is_empty())
    }
}
