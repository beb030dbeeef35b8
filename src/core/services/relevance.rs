//! Relevance engine - decides which observations warrant an alert
//!
//! For each observation, three filters run in order and the first failure
//! drops it:
//!
//! 1. the location is in the user's watch set,
//! 2. the severity meets the threshold,
//! 3. the reading is within the staleness window.
//!
//! Survivors are rendered as alerts using the location registry.

use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, trace};
use thiserror::Error;

use crate::core::models::{
    Alert, LocationId, Observation, RelevanceRules, User, congestion_message,
};
use crate::core::ports::LocationRegistry;

/// Errors raised while evaluating observations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// A watched location has no description in the registry
    #[error("location {location} is watched by {user} but has no description in the registry")]
    UndescribedLocation {
        /// User whose watch set contains the location
        user: String,
        /// The location without a description
        location: LocationId,
    },
}

/// Matches observations against a user's watch set
///
/// Holds no state between calls: the same inputs always give the same alerts.
#[derive(Clone, Copy)]
pub struct RelevanceEngine<'a> {
    rules: RelevanceRules,
    registry: &'a dyn LocationRegistry,
}

impl fmt::Debug for RelevanceEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelevanceEngine").field("rules", &self.rules).finish_non_exhaustive()
    }
}

impl<'a> RelevanceEngine<'a> {
    /// Create an engine with the given rules and registry
    #[must_use]
    pub const fn new(rules: RelevanceRules, registry: &'a dyn LocationRegistry) -> Self {
        Self { rules, registry }
    }

    /// Evaluate a batch of observations for one user
    ///
    /// Alerts come back in the same relative order as their observations.
    /// Observations for unwatched locations are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::UndescribedLocation`] if an observation passes
    /// every filter but its location has no description. This is a broken
    /// setup, not bad data.
    pub fn evaluate(
        &self,
        user: &User,
        observations: &[Observation],
        now: DateTime<Utc>,
    ) -> Result<Vec<Alert>, EvaluateError> {
        let mut alerts = Vec::new();

        for observation in observations {
            let id = observation.location_id;

            if !user.contains(id) {
                continue;
            }

            if !self.rules.is_severe(observation.severity) {
                trace!("{}: location {id} is clear ({})", user.name(), observation.severity);
                continue;
            }

            if !self.rules.is_fresh(observation.updated_at, now) {
                debug!(
                    "{}: skipping stale reading for location {id} (updated {})",
                    user.name(),
                    observation.updated_at
                );
                continue;
            }

            let description = self.describe(user, id)?;
            alerts.push(Alert {
                user: user.name().to_string(),
                location_id: id,
                severity: observation.severity,
                observed_at: observation.updated_at,
                message: congestion_message(&description),
            });
        }

        Ok(alerts)
    }

    /// Evaluate against the current wall-clock time
    ///
    /// # Errors
    ///
    /// See [`RelevanceEngine::evaluate`].
    pub fn evaluate_now(
        &self,
        user: &User,
        observations: &[Observation],
    ) -> Result<Vec<Alert>, EvaluateError> {
        self.evaluate(user, observations, Utc::now())
    }

    fn describe(&self, user: &User, id: LocationId) -> Result<String, EvaluateError> {
        self.registry
            .describe(id)
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| EvaluateError::UndescribedLocation {
                user: user.name().to_string(),
                location: id,
            })
    }
}
