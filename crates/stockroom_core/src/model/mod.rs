//! Domain records stored in keyed repositories.
//!
//! # Responsibility
//! - Define the entity identity contract (`Keyed`).
//! - Define the record types used by the warehouse, healthcare, inventory,
//!   finance and grading programs.
//!
//! # Invariants
//! - Every entity is identified by a stable `EntityId`.
//! - Key fields are private; identity can only be read, never reassigned.

pub mod entity;
pub mod finance;
pub mod grading;
pub mod healthcare;
pub mod inventory;
pub mod money;
pub mod warehouse;
