//! Sample data sources for the demo programs.
//!
//! Each function returns a finite, ordered sequence. Dates are derived from
//! the caller-supplied clock so output is reproducible in tests. Seed data is
//! not validated here; repositories apply their usual `add` invariant.

use crate::model::finance::{PaymentChannel, Transaction};
use crate::model::healthcare::{Patient, Prescription};
use crate::model::inventory::InventoryRecord;
use crate::model::money::Money;
use crate::model::warehouse::StockItem;
use chrono::{DateTime, Days, Duration, Months, NaiveDate, Utc};

pub fn sample_electronics() -> Vec<StockItem> {
    vec![
        StockItem::electronic(1, "Wireless Mouse", 15, "Logitech", 24),
        StockItem::electronic(2, "USB-C Charger", 30, "Anker", 12),
    ]
}

pub fn sample_groceries(today: NaiveDate) -> Vec<StockItem> {
    vec![
        StockItem::grocery(101, "Rice 5kg", 25, today + Months::new(12)),
        StockItem::grocery(102, "Olive Oil 1L", 10, today + Months::new(6)),
    ]
}

pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient::new(1, "Alice Mensah", 29, "Female"),
        Patient::new(2, "Kofi Asante", 45, "Male"),
        Patient::new(3, "Esi Boateng", 33, "Female"),
    ]
}

pub fn sample_prescriptions(today: NaiveDate) -> Vec<Prescription> {
    vec![
        Prescription::new(1, 1, "Amoxicillin 500mg", today - Days::new(10)),
        Prescription::new(2, 1, "Paracetamol 500mg", today - Days::new(2)),
        Prescription::new(3, 2, "Atorvastatin 10mg", today - Days::new(30)),
        Prescription::new(4, 3, "Metformin 500mg", today - Days::new(7)),
        Prescription::new(5, 2, "Amlodipine 5mg", today - Days::new(1)),
    ]
}

pub fn sample_inventory_records(now: DateTime<Utc>) -> Vec<InventoryRecord> {
    vec![
        InventoryRecord::new(1, "Perfume - Bloom", 10, now),
        InventoryRecord::new(2, "Perfume - Night", 5, now - Duration::days(2)),
        InventoryRecord::new(3, "Body Lotion", 20, now - Duration::days(10)),
    ]
}

/// Transactions paired with the channel each one is sent through.
pub fn sample_transactions(now: DateTime<Utc>) -> Vec<(Transaction, PaymentChannel)> {
    vec![
        (
            Transaction::new(1, now, Money::from_minor(15_075), "Groceries"),
            PaymentChannel::MobileMoney,
        ),
        (
            Transaction::new(2, now, Money::from_major(300), "Utilities"),
            PaymentChannel::BankTransfer,
        ),
        (
            Transaction::new(3, now, Money::from_major(800), "Entertainment"),
            PaymentChannel::CryptoWallet,
        ),
    ]
}
