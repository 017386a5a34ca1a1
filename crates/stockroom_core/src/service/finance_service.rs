//! Finance use-case service.
//!
//! # Responsibility
//! - Record transactions in a keyed ledger.
//! - Run each transaction through its payment channel and apply it to the
//!   account.
//!
//! # Invariants
//! - A transaction is validated and added to the ledger before the account is
//!   touched; a rejected transaction never changes the balance.
//! - Declined debits are still recorded in the ledger.

use crate::model::entity::EntityId;
use crate::model::finance::{Account, ApplyOutcome, PaymentChannel, Transaction};
use crate::repo::keyed_repo::{KeyedRepository, RepoResult};
use log::{debug, warn};

/// Outcome of recording one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_id: EntityId,
    /// Processing notice rendered by the payment channel.
    pub channel_message: String,
    pub outcome: ApplyOutcome,
}

#[derive(Debug)]
pub struct FinanceApp {
    account: Account,
    ledger: KeyedRepository<Transaction>,
}

impl FinanceApp {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            ledger: KeyedRepository::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Validates, records and applies `transaction`.
    ///
    /// # Errors
    /// - `InvalidValue` when the channel rejects the amount.
    /// - `DuplicateKey` when the ledger already holds the transaction id.
    pub fn record(
        &mut self,
        transaction: Transaction,
        channel: PaymentChannel,
    ) -> RepoResult<TransactionReceipt> {
        channel.validate(&transaction)?;
        let transaction_id = transaction.id();
        self.ledger.add(transaction)?;

        let recorded = self.ledger.get_by_id(transaction_id)?;
        let channel_message = channel.describe(recorded);
        let outcome = self.account.apply_transaction(recorded);

        match outcome {
            ApplyOutcome::Applied { new_balance } => debug!(
                "event=transaction_apply module=finance status=ok id={} balance={}",
                transaction_id, new_balance
            ),
            ApplyOutcome::Declined { .. } => warn!(
                "event=transaction_apply module=finance status=declined id={}",
                transaction_id
            ),
        }

        Ok(TransactionReceipt {
            transaction_id,
            channel_message,
            outcome,
        })
    }

    pub fn get_transaction(&self, id: EntityId) -> RepoResult<&Transaction> {
        self.ledger.get_by_id(id)
    }

    /// Ledger snapshot in recording order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ledger.get_all()
    }
}
