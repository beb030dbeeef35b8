//! User model and watch set
//!
//! A user watches a set of locations (for now, one implicit route per user).
//! The watch set is keyed by [`LocationId`] so membership is a single hash
//! lookup, which is what the relevance filter does once per observation.

use std::collections::HashMap;
use std::fmt;

use super::{Location, LocationId};

/// A user and the locations they watch
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
    watch_set: HashMap<LocationId, Location>,
}

impl User {
    /// Build a user from a name and a list of locations
    ///
    /// Duplicate identifiers are collapsed; the last occurrence wins.
    pub fn build(name: impl Into<String>, locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            name: name.into(),
            watch_set: locations.into_iter().map(|loc| (loc.id, loc)).collect(),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this user watches the given location
    #[must_use]
    pub fn contains(&self, id: LocationId) -> bool {
        self.watch_set.contains_key(&id)
    }

    /// Look up a watched location
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.watch_set.get(&id)
    }

    /// Watched identifiers in ascending order
    #[must_use]
    pub fn watched_ids(&self) -> Vec<LocationId> {
        let mut ids: Vec<_> = self.watch_set.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of watched locations
    #[must_use]
    pub fn len(&self) -> usize {
        self.watch_set.len()
    }

    /// Whether the watch set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watch_set.is_empty()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.watched_ids().iter().map(ToString::to_string).collect();
        write!(f, "{}[{}]", self.name, ids.join(","))
    }
}
