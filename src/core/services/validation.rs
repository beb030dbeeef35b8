//! Startup validation of watch sets
//!
//! Catches a watched location without a description before the first
//! matching observation turns it into a mid-cycle failure.

use super::relevance::EvaluateError;
use crate::core::models::User;
use crate::core::ports::LocationRegistry;

/// Check that every watched location of every user can be described
///
/// Users are checked in order, locations in ascending id order, so the
/// reported location is deterministic.
///
/// # Errors
///
/// Returns the first [`EvaluateError::UndescribedLocation`] found.
pub fn validate_watch_sets(
    users: &[User],
    registry: &dyn LocationRegistry,
) -> Result<(), EvaluateError> {
    for user in users {
        let missing = user.watched_ids().into_iter().find(|&id| !registry.is_describable(id));
        if let Some(location) = missing {
            return Err(EvaluateError::UndescribedLocation {
                user: user.name().to_string(),
                location,
            });
        }
    }
    Ok(())
}
