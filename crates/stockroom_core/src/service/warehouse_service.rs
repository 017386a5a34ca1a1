//! Warehouse use-case service.
//!
//! # Responsibility
//! - Route stock items to the shelf matching their product family.
//! - Validate items before they enter a shelf.
//!
//! # Invariants
//! - Each shelf only ever holds items of its own `ItemKind`.
//! - Item ids are unique per shelf, not across shelves.

use crate::model::entity::EntityId;
use crate::model::warehouse::{ItemKind, StockItem};
use crate::repo::keyed_repo::{KeyedRepository, RepoResult};
use log::debug;

/// Electronics and grocery shelves, each a separate keyed repository.
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: KeyedRepository<StockItem>,
    groceries: KeyedRepository<StockItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every seed item in order, stopping at the first rejected item.
    pub fn seed(&mut self, items: impl IntoIterator<Item = StockItem>) -> RepoResult<()> {
        for item in items {
            self.add_item(item)?;
        }
        Ok(())
    }

    /// Validates `item` and stores it on its family's shelf.
    ///
    /// # Errors
    /// - `InvalidValue` when `item.validate()` fails.
    /// - `DuplicateKey` when the shelf already holds the id.
    pub fn add_item(&mut self, item: StockItem) -> RepoResult<()> {
        item.validate()?;
        let kind = item.kind();
        let id = item.id();
        self.shelf_mut(kind).add(item)?;
        debug!(
            "event=item_add module=warehouse status=ok shelf={} id={}",
            kind.as_str(),
            id
        );
        Ok(())
    }

    pub fn get_item(&self, kind: ItemKind, id: EntityId) -> RepoResult<&StockItem> {
        self.shelf(kind).get_by_id(id)
    }

    pub fn remove_item(&mut self, kind: ItemKind, id: EntityId) -> RepoResult<StockItem> {
        self.shelf_mut(kind).remove(id)
    }

    /// Sets the quantity of one item; negative values are rejected first.
    pub fn update_quantity(
        &mut self,
        kind: ItemKind,
        id: EntityId,
        quantity: i64,
    ) -> RepoResult<()> {
        self.shelf_mut(kind).update_quantity(id, quantity)
    }

    /// Snapshot of one shelf in insertion order.
    pub fn all_items(&self, kind: ItemKind) -> Vec<StockItem> {
        self.shelf(kind).get_all()
    }

    pub fn shelf(&self, kind: ItemKind) -> &KeyedRepository<StockItem> {
        match kind {
            ItemKind::Electronic => &self.electronics,
            ItemKind::Grocery => &self.groceries,
        }
    }

    fn shelf_mut(&mut self, kind: ItemKind) -> &mut KeyedRepository<StockItem> {
        match kind {
            ItemKind::Electronic => &mut self.electronics,
            ItemKind::Grocery => &mut self.groceries,
        }
    }
}
