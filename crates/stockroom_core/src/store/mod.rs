//! Persistence adapters for keyed repositories.
//!
//! # Responsibility
//! - Move whole repository snapshots between memory and disk.
//! - Report load/save failures to the caller, never to the repository.

pub mod json_store;
