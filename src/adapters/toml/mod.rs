//! TOML configuration files
//!
//! - [`parser`] - Read and deserialize routewatch.toml files
//! - [`writer`] - Starter configuration for `init`

pub mod parser;
pub mod writer;

pub use parser::{
    ConfigFile, FeedSection, LocationEntry, RegistrySection, RulesSection, UserEntry, load_file,
    parse_str,
};
pub use writer::sample_config;
