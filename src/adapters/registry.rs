//! Static location registry
//!
//! Implements `LocationRegistry` over an in-memory description table,
//! usually loaded from the `[[location]]` entries of the config file.
//! Hand-written names cover places whose local names are not obvious; an
//! optional fallback template covers the rest.

use std::collections::HashMap;

use crate::core::models::LocationId;
use crate::core::ports::LocationRegistry;

/// Placeholder substituted with the location id in fallback templates
pub const ID_PLACEHOLDER: &str = "{id}";

/// Description table with an optional fallback template
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    descriptions: HashMap<LocationId, String>,
    fallback: Option<String>,
}

impl StaticRegistry {
    /// Create an empty registry with no fallback
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `template` for ids without an explicit description
    ///
    /// `{id}` in the template is replaced with the location id,
    /// e.g. `"Node{id} St"`.
    #[must_use]
    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallback = Some(template.into());
        self
    }

    /// Register a description, replacing any previous one
    pub fn insert(&mut self, id: LocationId, description: impl Into<String>) {
        self.descriptions.insert(id, description.into());
    }

    /// Number of explicit descriptions
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Whether there are no explicit descriptions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

impl FromIterator<(LocationId, String)> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = (LocationId, String)>>(iter: I) -> Self {
        Self {
            descriptions: iter.into_iter().collect(),
            fallback: None,
        }
    }
}

impl LocationRegistry for StaticRegistry {
    fn describe(&self, id: LocationId) -> Option<String> {
        self.descriptions.get(&id).cloned().or_else(|| {
            self.fallback
                .as_ref()
                .map(|template| template.replace(ID_PLACEHOLDER, &id.to_string()))
        })
    }
}
