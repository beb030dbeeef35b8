//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies of their own - they operate on
//! data passed in (or fetched through ports) and return results.
//!
//! - [`relevance`] - Decide which observations concern a user
//! - [`cycle`] - One poll: fetch, evaluate every user, publish
//! - [`validation`] - Startup checks on watch sets

pub mod cycle;
pub mod relevance;
pub mod validation;

pub use cycle::{CycleReport, run_cycle};
pub use relevance::{EvaluateError, RelevanceEngine};
pub use validation::validate_watch_sets;
