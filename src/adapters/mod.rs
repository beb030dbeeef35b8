//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - JSON fixture file as a `FeedProvider`
//! - `registry` - In-memory description table as a `LocationRegistry`
//! - `console` - Stdout as an `AlertSink`
//! - `toml/` - `routewatch.toml` parsing and the starter config

pub mod console;
pub mod json;
pub mod registry;
pub mod toml;

pub use console::ConsoleSink;
pub use json::JsonFileFeed;
pub use registry::StaticRegistry;
