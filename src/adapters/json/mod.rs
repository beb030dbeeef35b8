//! JSON fixture feed
//!
//! Implements `FeedProvider` by reading a JSON array of traffic records
//! from disk on every fetch.
//!
//! - [`record`] - Raw record shape and timestamp parsing
//! - [`feed`] - `FeedProvider` implementation

pub mod feed;
pub mod record;

pub use feed::{FeedError, JsonFileFeed, parse_feed};
pub use record::{FeedRecord, TimestampError, parse_timestamp};
