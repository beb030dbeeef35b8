//! List users and their watched locations

use std::path::Path;

use routewatch::output::{OutputMode, UserListResult};

use super::setup::load_validated;

/// Print each user with the descriptions of the locations they watch
pub fn users(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let app = load_validated(config)?;
    UserListResult::build(&app.users, &app.registry).render(mode);
    Ok(())
}
