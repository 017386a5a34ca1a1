use chrono::{TimeZone, Utc};
use stockroom_core::seed::sample_transactions;
use stockroom_core::{
    Account, ApplyOutcome, FinanceApp, Money, PaymentChannel, RepoError, Transaction,
};

fn app() -> FinanceApp {
    FinanceApp::new(Account::savings("SA-001", Money::from_major(1000)))
}

#[test]
fn sample_run_applies_two_and_declines_the_overdraft() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    let mut app = app();

    let receipts: Vec<_> = sample_transactions(now)
        .into_iter()
        .map(|(transaction, channel)| app.record(transaction, channel).unwrap())
        .collect();

    assert_eq!(
        receipts[0].channel_message,
        "MOBILE MONEY: Sent 150.75 for Groceries"
    );
    assert_eq!(
        receipts[0].outcome,
        ApplyOutcome::Applied {
            new_balance: Money::from_minor(84_925)
        }
    );
    assert_eq!(
        receipts[1].outcome,
        ApplyOutcome::Applied {
            new_balance: Money::from_minor(54_925)
        }
    );
    assert!(matches!(receipts[2].outcome, ApplyOutcome::Declined { .. }));
    assert!(receipts[2].channel_message.starts_with("CRYPTO WALLET"));

    assert_eq!(app.account().balance(), Money::from_minor(54_925));
    assert_eq!(app.transactions().len(), 3);
}

#[test]
fn duplicate_transaction_id_leaves_balance_untouched() {
    let now = Utc::now();
    let mut app = app();
    app.record(
        Transaction::new(1, now, Money::from_major(10), "Books"),
        PaymentChannel::BankTransfer,
    )
    .unwrap();

    let err = app
        .record(
            Transaction::new(1, now, Money::from_major(20), "Books again"),
            PaymentChannel::BankTransfer,
        )
        .unwrap_err();
    assert_eq!(err, RepoError::DuplicateKey(1));
    assert_eq!(app.account().balance(), Money::from_major(990));
    assert_eq!(app.get_transaction(1).unwrap().category, "Books");
}

#[test]
fn non_positive_amount_is_rejected_before_recording() {
    let mut app = app();
    let err = app
        .record(
            Transaction::new(9, Utc::now(), Money::ZERO, "Nothing"),
            PaymentChannel::MobileMoney,
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidValue(ref value) if value.field == "amount"));
    assert!(app.transactions().is_empty());
    assert_eq!(app.get_transaction(9).unwrap_err(), RepoError::NotFound(9));
}
