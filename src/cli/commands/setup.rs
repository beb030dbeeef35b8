//! Shared command setup

use std::path::Path;

use anyhow::Context;
use log::debug;

use routewatch::config::AppConfig;
use routewatch::core::services::validate_watch_sets;

/// Load configuration and make sure every watched location is describable
pub fn load_validated(config: Option<&Path>) -> anyhow::Result<AppConfig> {
    let app = AppConfig::load(config)?;
    validate_watch_sets(&app.users, &app.registry).context("Configuration is incomplete")?;
    debug!(
        "Loaded {} user(s), {} described location(s), feed {}",
        app.users.len(),
        app.registry.len(),
        app.feed_path.display()
    );
    Ok(app)
}
