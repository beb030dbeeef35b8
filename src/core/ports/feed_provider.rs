//! Feed provider port
//!
//! Defines the interface for retrieving traffic observations.

use super::super::models::Observation;

/// Source of traffic observations
///
/// Implementations handle retrieval (files, document stores, live feeds)
/// and are responsible for parsing timestamps. Records that cannot be
/// turned into an [`Observation`] are dropped here, not passed on.
pub trait FeedProvider: Send + Sync {
    /// Fetch the latest batch of observations
    ///
    /// A failure is reported to the caller as-is; retrying is the polling
    /// loop's decision.
    fn fetch(&self) -> anyhow::Result<Vec<Observation>>;
}
