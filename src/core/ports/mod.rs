//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the relevance core and the
//! systems around it (traffic feeds, map lookups, notification channels).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. All I/O happens inside adapters, before or after the
//! core runs; the core receives already-materialized inputs.

mod alert_sink;
mod feed_provider;
mod location_registry;

pub use alert_sink::AlertSink;
pub use feed_provider::FeedProvider;
pub use location_registry::LocationRegistry;
