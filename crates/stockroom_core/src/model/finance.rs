//! Finance records: transactions, payment channels and accounts.
//!
//! # Responsibility
//! - Define the ledger `Transaction` record.
//! - Model payment channels and account kinds as closed enums.
//!
//! # Invariants
//! - Channel validation only accepts strictly positive amounts.
//! - A savings account never goes below zero; a standard account may.

use crate::model::entity::{EntityId, InvalidValue, Keyed};
use crate::model::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: EntityId,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub category: String,
}

impl Transaction {
    pub fn new(
        id: EntityId,
        date: DateTime<Utc>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl Keyed for Transaction {
    type Key = EntityId;

    fn key(&self) -> EntityId {
        self.id
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Amount: {} | Category: {} | Date: {}",
            self.id,
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Channel a transaction is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl PaymentChannel {
    pub const ALL: [PaymentChannel; 3] = [
        PaymentChannel::BankTransfer,
        PaymentChannel::MobileMoney,
        PaymentChannel::CryptoWallet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BankTransfer => "BANK TRANSFER",
            Self::MobileMoney => "MOBILE MONEY",
            Self::CryptoWallet => "CRYPTO WALLET",
        }
    }

    /// Renders the processing notice for `transaction`.
    pub fn describe(self, transaction: &Transaction) -> String {
        format!(
            "{}: Sent {} for {}",
            self.label(),
            transaction.amount,
            transaction.category
        )
    }

    pub fn validate(self, transaction: &Transaction) -> Result<(), InvalidValue> {
        if !transaction.amount.is_positive() {
            return Err(InvalidValue::new(
                "amount",
                transaction.amount,
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Debits are applied unconditionally.
    Standard,
    /// Debits larger than the balance are declined.
    Savings,
}

/// Result of applying one transaction to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { new_balance: Money },
    Declined { amount: Money, balance: Money },
}

impl Display for ApplyOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied { new_balance } => {
                write!(f, "Transaction applied. New balance: {new_balance}")
            }
            Self::Declined { amount, balance } => write!(
                f,
                "Insufficient funds for transaction of {amount} (balance {balance})"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: String,
    kind: AccountKind,
    balance: Money,
}

impl Account {
    pub fn new(
        account_number: impl Into<String>,
        kind: AccountKind,
        initial_balance: Money,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            kind,
            balance: initial_balance,
        }
    }

    pub fn savings(account_number: impl Into<String>, initial_balance: Money) -> Self {
        Self::new(account_number, AccountKind::Savings, initial_balance)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debits `transaction.amount` according to the account kind.
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> ApplyOutcome {
        let declined = ApplyOutcome::Declined {
            amount: transaction.amount,
            balance: self.balance,
        };
        if self.kind == AccountKind::Savings && transaction.amount > self.balance {
            return declined;
        }
        let Some(new_balance) = self.balance.checked_sub(transaction.amount) else {
            return declined;
        };
        self.balance = new_balance;
        ApplyOutcome::Applied {
            new_balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, AccountKind, ApplyOutcome, PaymentChannel, Transaction};
    use crate::model::money::Money;
    use chrono::Utc;

    fn tx(amount_minor: i64) -> Transaction {
        Transaction::new(1, Utc::now(), Money::from_minor(amount_minor), "Groceries")
    }

    #[test]
    fn savings_declines_overdraft_and_keeps_balance() {
        let mut account = Account::savings("SA-001", Money::from_major(100));
        let outcome = account.apply_transaction(&tx(10_001));
        assert_eq!(
            outcome,
            ApplyOutcome::Declined {
                amount: Money::from_minor(10_001),
                balance: Money::from_major(100),
            }
        );
        assert_eq!(account.balance(), Money::from_major(100));
    }

    #[test]
    fn savings_allows_exact_balance() {
        let mut account = Account::savings("SA-001", Money::from_major(100));
        let outcome = account.apply_transaction(&tx(10_000));
        assert_eq!(
            outcome,
            ApplyOutcome::Applied {
                new_balance: Money::ZERO
            }
        );
    }

    #[test]
    fn standard_account_may_go_negative() {
        let mut account = Account::new("CA-001", AccountKind::Standard, Money::from_major(10));
        account.apply_transaction(&tx(1_500));
        assert_eq!(account.balance(), Money::from_minor(-500));
    }

    #[test]
    fn standard_account_declines_when_balance_would_overflow() {
        let mut account = Account::new("CA-002", AccountKind::Standard, Money::from_minor(-100));
        let outcome = account.apply_transaction(&tx(i64::MAX));
        assert!(matches!(outcome, ApplyOutcome::Declined { .. }));
        assert_eq!(account.balance(), Money::from_minor(-100));
    }

    #[test]
    fn channels_describe_and_validate() {
        let t = tx(15_075);
        assert_eq!(
            PaymentChannel::MobileMoney.describe(&t),
            "MOBILE MONEY: Sent 150.75 for Groceries"
        );
        for channel in PaymentChannel::ALL {
            assert!(channel.validate(&t).is_ok());
            assert!(channel.validate(&tx(0)).is_err());
        }
    }
}
