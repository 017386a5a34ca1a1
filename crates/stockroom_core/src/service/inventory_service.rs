//! Inventory log use-case service.
//!
//! # Responsibility
//! - Collect inventory records in a keyed repository.
//! - Save to and restore from a JSON file through `JsonFileStore`.
//!
//! # Invariants
//! - A failed load leaves the in-memory records unchanged.

use crate::model::inventory::InventoryRecord;
use crate::repo::keyed_repo::{KeyedRepository, RepoResult};
use crate::seed::sample_inventory_records;
use crate::store::json_store::{JsonFileStore, StoreResult};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

#[derive(Debug)]
pub struct InventoryApp {
    records: KeyedRepository<InventoryRecord>,
    store: JsonFileStore,
}

impl InventoryApp {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            records: KeyedRepository::new(),
            store: JsonFileStore::new(file_path),
        }
    }

    /// Adds the built-in sample records stamped relative to `now`.
    pub fn seed_sample_data(&mut self, now: DateTime<Utc>) -> RepoResult<()> {
        for record in sample_inventory_records(now) {
            self.records.add(record)?;
        }
        Ok(())
    }

    pub fn add_record(&mut self, record: InventoryRecord) -> RepoResult<()> {
        self.records.add(record)
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.records)
    }

    /// Replaces in-memory records with the file contents.
    pub fn load(&mut self) -> StoreResult<usize> {
        self.store.load_into(&mut self.records)
    }

    pub fn records(&self) -> Vec<InventoryRecord> {
        self.records.get_all()
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }
}
