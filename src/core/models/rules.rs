//! Relevance rules
//!
//! The two knobs that decide whether a watched location is worth an alert:
//! how congested it must be, and how recent the reading must be.

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Severity at or above which a location counts as congested
pub const DEFAULT_SEVERITY_THRESHOLD: f64 = 1.0;

/// Readings older than this many hours are ignored
pub const DEFAULT_STALENESS_HOURS: i64 = 8;

/// Errors from invalid rule values
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RulesError {
    /// Threshold is NaN or infinite
    #[error("severity threshold must be a finite number, got {0}")]
    NonFiniteThreshold(f64),

    /// Staleness window is negative
    #[error("staleness window must not be negative")]
    NegativeWindow,
}

/// Severity threshold and staleness window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceRules {
    severity_threshold: f64,
    staleness_window: TimeDelta,
}

impl Default for RelevanceRules {
    fn default() -> Self {
        Self {
            severity_threshold: DEFAULT_SEVERITY_THRESHOLD,
            staleness_window: TimeDelta::hours(DEFAULT_STALENESS_HOURS),
        }
    }
}

impl RelevanceRules {
    /// Create rules from a threshold and a window
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is not finite or the window is negative.
    pub fn new(severity_threshold: f64, staleness_window: TimeDelta) -> Result<Self, RulesError> {
        if !severity_threshold.is_finite() {
            return Err(RulesError::NonFiniteThreshold(severity_threshold));
        }
        if staleness_window < TimeDelta::zero() {
            return Err(RulesError::NegativeWindow);
        }
        Ok(Self {
            severity_threshold,
            staleness_window,
        })
    }

    /// Severity at or above which an observation is congested
    #[must_use]
    pub const fn severity_threshold(&self) -> f64 {
        self.severity_threshold
    }

    /// Maximum age of an actionable observation
    #[must_use]
    pub const fn staleness_window(&self) -> TimeDelta {
        self.staleness_window
    }

    /// Whether a severity is high enough to alert on
    ///
    /// NaN never qualifies.
    #[must_use]
    pub fn is_severe(&self, severity: f64) -> bool {
        severity >= self.severity_threshold
    }

    /// Whether a reading taken at `updated_at` is still current at `now`
    #[must_use]
    pub fn is_fresh(&self, updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - updated_at <= self.staleness_window
    }
}
