//! Inventory log record persisted by the JSON file store.
//!
//! # Invariants
//! - Records are immutable once created; corrections are new records.
//! - `date_added` is stored in UTC.

use crate::model::entity::{EntityId, Keyed};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    id: EntityId,
    name: String,
    quantity: i64,
    date_added: DateTime<Utc>,
}

impl InventoryRecord {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

impl Keyed for InventoryRecord {
    type Key = EntityId;

    fn key(&self) -> EntityId {
        self.id
    }
}

impl Display for InventoryRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ID:{}) Qty:{}, Added:{}",
            self.name,
            self.id,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
