//! Repository layer: keyed in-memory storage with typed failures.
//!
//! # Responsibility
//! - Enforce key uniqueness and key existence for every stored entity type.
//! - Return semantic errors (`DuplicateKey`, `NotFound`, `InvalidValue`)
//!   instead of silently overwriting or ignoring operations.
//!
//! # Invariants
//! - Repository APIs never log, retry or swallow errors.
//! - Persistence is an external collaborator (see `store`).

pub mod keyed_repo;
pub mod shared_repo;
