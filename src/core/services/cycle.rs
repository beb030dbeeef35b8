//! Poll cycle - one pass of fetch, evaluate, publish
//!
//! The polling loop itself lives with the caller; this is the body it
//! runs on every tick.

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;

use super::relevance::RelevanceEngine;
use crate::core::models::{Alert, User};
use crate::core::ports::{AlertSink, FeedProvider};

/// Outcome of a single poll cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleReport {
    /// Number of observations the feed returned
    pub observations: usize,
    /// Number of users evaluated
    pub users: usize,
    /// Every alert raised, grouped by user in evaluation order
    pub alerts: Vec<Alert>,
}

impl CycleReport {
    /// Alerts raised for one user
    pub fn alerts_for<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Alert> + 'a {
        self.alerts.iter().filter(move |a| a.user == user)
    }

    /// Whether anything was raised
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Run one poll cycle
///
/// Fetches once, evaluates every user against the same batch, then publishes
/// each alert to the sink in order. Nothing is published unless every user
/// evaluates cleanly.
///
/// # Errors
///
/// Returns an error if the feed fails (no retry is attempted) or if a
/// watched location has no description.
pub fn run_cycle(
    users: &[User],
    feed: &dyn FeedProvider,
    engine: &RelevanceEngine<'_>,
    sink: &dyn AlertSink,
    now: DateTime<Utc>,
) -> anyhow::Result<CycleReport> {
    let observations = feed.fetch().context("Failed to fetch traffic observations")?;

    let mut alerts = Vec::new();
    for user in users {
        alerts.extend(engine.evaluate(user, &observations, now)?);
    }

    for alert in &alerts {
        sink.publish(&alert.user, &alert.message);
    }

    info!(
        "Evaluated {} observation(s) for {} user(s): {} alert(s)",
        observations.len(),
        users.len(),
        alerts.len()
    );

    Ok(CycleReport {
        observations: observations.len(),
        users: users.len(),
        alerts,
    })
}
