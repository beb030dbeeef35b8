//! Domain models for routewatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Location`] - A point of interest on a route, keyed by [`LocationId`]
//! - [`User`] - Someone watching a set of locations
//! - [`Observation`] - One traffic reading from the feed
//! - [`Alert`] - A rendered notification for one user
//! - [`RelevanceRules`] - Severity threshold and staleness window

mod alert;
mod location;
mod observation;
mod rules;
mod user;

pub use alert::{Alert, congestion_message};
pub use location::{Coordinate, Location, LocationId};
pub use observation::Observation;
pub use rules::{DEFAULT_SEVERITY_THRESHOLD, DEFAULT_STALENESS_HOURS, RelevanceRules, RulesError};
pub use user::User;
