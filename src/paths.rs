//! Centralized path definitions for routewatch
//!
//! This module is the single source of truth for where routewatch looks
//! for its files.
//!
//! ## Lookup Order
//!
//! ```text
//! --config <path>                          # explicit, always wins
//! ./routewatch.toml                        # project-local
//! ~/.config/routewatch/config.toml         # user-level (XDG)
//! ```

use std::path::PathBuf;

/// Project-local configuration filename
pub const CONFIG_FILE: &str = "routewatch.toml";

/// Default fixture feed filename written by `init`
pub const FEED_FILE: &str = "traffic.json";

/// Application directory name under the user config dir
const APP_DIR: &str = "routewatch";

/// User-level configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project-local `routewatch.toml`
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Get the user-level config directory (`~/.config/routewatch/`)
///
/// Falls back to `./.routewatch` when no home directory can be determined.
fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".routewatch"), |dir| dir.join(APP_DIR))
}

/// Get path to the user-level config file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Every path searched for configuration, in priority order
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    vec![local_config(), global_config()]
}

/// First existing configuration file, if any
#[must_use]
pub fn find_config() -> Option<PathBuf> {
    config_candidates().into_iter().find(|p| p.is_file())
}
