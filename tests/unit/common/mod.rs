//! Shared test fixtures and helpers
//!
//! - `fixtures.rs` - Builders for users, observations and registries
//! - `mocks.rs` - In-memory implementations of the port traits

pub mod mocks;
