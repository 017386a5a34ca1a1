//! Core domain logic for Stockroom.
//! Keyed repositories, the records they hold, and the demo program services
//! built on top of them.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{AppConfig, LogSettings};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{EntityId, InvalidValue, Keyed};
pub use model::finance::{Account, AccountKind, ApplyOutcome, PaymentChannel, Transaction};
pub use model::grading::{Grade, Student};
pub use model::healthcare::{Patient, Prescription};
pub use model::inventory::InventoryRecord;
pub use model::money::Money;
pub use model::warehouse::{ItemDetails, ItemKind, StockItem};
pub use repo::keyed_repo::{
    FieldUpdate, KeyedRepository, QuantityTracked, RepoError, RepoResult, SetQuantity,
};
pub use repo::shared_repo::SharedRepository;
pub use service::finance_service::{FinanceApp, TransactionReceipt};
pub use service::grading_service::GradingError;
pub use service::health_service::HealthSystem;
pub use service::inventory_service::InventoryApp;
pub use service::warehouse_service::WarehouseManager;
pub use store::json_store::{JsonFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
