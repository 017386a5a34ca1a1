//! Use-case services for the demo programs.
//!
//! # Responsibility
//! - Compose keyed repositories, seed data and persistence into the
//!   warehouse, healthcare, inventory, finance and grading workflows.
//! - Keep CLI callers decoupled from repository and file details.
//!
//! # Invariants
//! - Services never bypass repository invariants.
//! - Services return errors; printing them is the caller's job.

pub mod finance_service;
pub mod grading_service;
pub mod health_service;
pub mod inventory_service;
pub mod warehouse_service;
