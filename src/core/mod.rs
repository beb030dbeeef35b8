//! Core domain logic for routewatch
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Location, User, Observation, Alert, `RelevanceRules`)
//! - `services/` - The relevance engine and the poll cycle built on it
//! - `ports/` - Trait definitions for feeds, registries and sinks

pub mod models;
pub mod ports;
pub mod services;
