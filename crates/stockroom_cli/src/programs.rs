//! Console runs of the five demo programs.
//!
//! Seeding failures abort a run; every other failed operation is printed as
//! `Error: ...` and the run continues.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;
use stockroom_core::seed::{
    sample_electronics, sample_groceries, sample_patients, sample_prescriptions,
    sample_transactions,
};
use stockroom_core::service::grading_service::{read_students, write_report};
use stockroom_core::{
    Account, EntityId, FinanceApp, GradingError, HealthSystem, InventoryApp, ItemKind, Money,
    StockItem, WarehouseManager,
};

pub fn run_warehouse() -> Result<()> {
    let (today, _) = today_and_now();
    let mut manager = WarehouseManager::new();
    manager
        .seed(sample_electronics())
        .context("seeding electronics")?;
    manager
        .seed(sample_groceries(today))
        .context("seeding groceries")?;

    println!("Groceries:");
    print_all(&manager.all_items(ItemKind::Grocery));
    println!("\nElectronics:");
    print_all(&manager.all_items(ItemKind::Electronic));
    println!();

    report(manager.add_item(StockItem::grocery(101, "Extra Rice", 5, today)));
    report(manager.update_quantity(ItemKind::Electronic, 999, 5));
    report(manager.update_quantity(ItemKind::Grocery, 101, -1));
    report(manager.remove_item(ItemKind::Electronic, 404));
    Ok(())
}

pub fn run_healthcare(patient_id: EntityId) -> Result<()> {
    let (today, _) = today_and_now();
    let mut system = HealthSystem::new();
    for patient in sample_patients() {
        system.add_patient(patient).context("seeding patients")?;
    }
    for prescription in sample_prescriptions(today) {
        system
            .add_prescription(prescription)
            .context("seeding prescriptions")?;
    }
    system.build_prescription_map();

    println!("Patients:");
    for patient in system.patients() {
        println!(" - {patient}");
    }
    println!();

    let prescriptions = system.prescriptions_for(patient_id);
    if prescriptions.is_empty() {
        println!("No prescriptions for patient {patient_id}.");
    } else {
        println!("Prescriptions for Patient {patient_id}:");
        for prescription in prescriptions {
            println!(" - {prescription}");
        }
    }
    Ok(())
}

pub fn run_inventory(file: &Path) -> Result<()> {
    let (_, now) = today_and_now();
    let mut writer = InventoryApp::new(file);
    writer
        .seed_sample_data(now)
        .context("seeding inventory records")?;
    if let Err(err) = writer.save() {
        println!("Save error: {err}");
    }

    let mut reader = InventoryApp::new(file);
    if let Err(err) = reader.load() {
        println!("Load error: {err}");
    }

    let records = reader.records();
    if records.is_empty() {
        println!("No items found.");
    }
    print_all(&records);
    Ok(())
}

pub fn run_finance() -> Result<()> {
    let (_, now) = today_and_now();
    let mut app = FinanceApp::new(Account::savings("SA-001", Money::from_major(1000)));
    println!(
        "Account {} created with balance {}",
        app.account().account_number(),
        app.account().balance()
    );

    for (transaction, channel) in sample_transactions(now) {
        match app.record(transaction, channel) {
            Ok(receipt) => {
                println!("{}", receipt.channel_message);
                println!("{}", receipt.outcome);
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    println!("\nAll Transactions:");
    print_all(&app.transactions());
    Ok(())
}

pub fn run_grading(input: &Path, output: &Path) -> Result<()> {
    let outcome = read_students(input).and_then(|students| write_report(&students, output));
    match outcome {
        Ok(count) => println!("Report generated successfully ({count} students)."),
        Err(GradingError::InputNotFound(_)) => println!("Error: Input file not found."),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn today_and_now() -> (NaiveDate, DateTime<Utc>) {
    let now = Utc::now();
    (now.date_naive(), now)
}

fn print_all<T: std::fmt::Display>(items: &[T]) {
    for item in items {
        println!("{item}");
    }
}

fn report<T, E: std::fmt::Display>(result: Result<T, E>) {
    if let Err(err) = result {
        println!("Error: {err}");
    }
}
