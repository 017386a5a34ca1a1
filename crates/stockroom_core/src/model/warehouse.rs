//! Warehouse stock item model.
//!
//! # Responsibility
//! - Define the stock record shared by every warehouse shelf.
//! - Model product families as a closed set of detail variants.
//!
//! # Invariants
//! - `id` never changes after construction.
//! - A valid item has a non-blank name and a non-negative quantity.

use crate::model::entity::{EntityId, InvalidValue, Keyed};
use crate::repo::keyed_repo::QuantityTracked;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Product family discriminant, used to route items to the right shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Electronic,
    Grocery,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electronic => "electronic",
            Self::Grocery => "grocery",
        }
    }
}

/// Family-specific attributes of a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Electronic { brand: String, warranty_months: u32 },
    Grocery { expiry_date: NaiveDate },
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Electronic { .. } => ItemKind::Electronic,
            Self::Grocery { .. } => ItemKind::Grocery,
        }
    }

    /// Short family-specific description, e.g. `Brand:Anker, Warranty:12 months`.
    pub fn describe(&self) -> String {
        match self {
            Self::Electronic {
                brand,
                warranty_months,
            } => format!("Brand:{brand}, Warranty:{warranty_months} months"),
            Self::Grocery { expiry_date } => format!("Exp:{}", expiry_date.format("%Y-%m-%d")),
        }
    }

    pub fn validate(&self) -> Result<(), InvalidValue> {
        match self {
            Self::Electronic { brand, .. } if brand.trim().is_empty() => {
                Err(InvalidValue::new("brand", brand, "must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

/// One stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub details: ItemDetails,
}

impl StockItem {
    pub fn new(id: EntityId, name: impl Into<String>, quantity: i64, details: ItemDetails) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            details,
        }
    }

    pub fn electronic(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            quantity,
            ItemDetails::Electronic {
                brand: brand.into(),
                warranty_months,
            },
        )
    }

    pub fn grocery(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        expiry_date: NaiveDate,
    ) -> Self {
        Self::new(id, name, quantity, ItemDetails::Grocery { expiry_date })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.details.kind()
    }

    /// Checks item-level constraints before the item enters a shelf.
    pub fn validate(&self) -> Result<(), InvalidValue> {
        if self.name.trim().is_empty() {
            return Err(InvalidValue::new("name", &self.name, "must not be empty"));
        }
        if self.quantity < 0 {
            return Err(InvalidValue::new(
                "quantity",
                self.quantity,
                "must not be negative",
            ));
        }
        self.details.validate()
    }
}

impl Keyed for StockItem {
    type Key = EntityId;

    fn key(&self) -> EntityId {
        self.id
    }
}

impl QuantityTracked for StockItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Display for StockItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self.kind() {
            ItemKind::Electronic => "Electronic",
            ItemKind::Grocery => "Grocery",
        };
        write!(
            f,
            "[{label}] {} (ID:{}) Qty:{}, {}",
            self.name,
            self.id,
            self.quantity,
            self.details.describe()
        )
    }
}
