//! Wallet operations
//!
//! This module provides the `Wallet`, which turns user intents (deposit,
//! send, clear history) into validated updates of the [`LedgerStore`].
//!
//! The wallet enforces business rules such as:
//! - Amounts must be present and strictly positive
//! - Recipients must be non-empty and made of letters and spaces
//! - Sends may not exceed the current balance
//!
//! Every rule is checked before the first write, so a rejected operation
//! leaves the ledger untouched. A successful operation performs two writes
//! (balance, then history); if the second one fails the first is not undone.

use crate::core::clock::{Clock, SystemClock};
use crate::core::ledger::LedgerStore;
use crate::core::validation::is_valid_recipient;
use crate::storage::KeyValueStore;
use crate::types::{Transaction, TransactionFilter, WalletError};
use rust_decimal::Decimal;
use tracing::info;

/// Validated wallet operations over a ledger
pub struct Wallet<S, C = SystemClock> {
    ledger: LedgerStore<S, C>,
}

impl<S: KeyValueStore> Wallet<S, SystemClock> {
    /// Create a wallet over `store` using the wall clock
    pub fn new(store: S) -> Self {
        Wallet {
            ledger: LedgerStore::new(store),
        }
    }
}

impl<S: KeyValueStore, C: Clock> Wallet<S, C> {
    /// Create a wallet over an existing ledger
    pub fn from_ledger(ledger: LedgerStore<S, C>) -> Self {
        Wallet { ledger }
    }

    /// Underlying ledger
    pub fn ledger(&self) -> &LedgerStore<S, C> {
        &self.ledger
    }

    /// Mutable access to the underlying ledger
    pub fn ledger_mut(&mut self) -> &mut LedgerStore<S, C> {
        &mut self.ledger
    }

    /// Consume the wallet and return its ledger
    pub fn into_ledger(self) -> LedgerStore<S, C> {
        self.ledger
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.ledger.get_balance()
    }

    /// Formatted time of the last balance change
    pub fn last_update(&self) -> String {
        self.ledger.get_last_update()
    }

    /// Deposit funds
    ///
    /// `amount` is `None` when the user input was not a finite number.
    ///
    /// # Returns
    ///
    /// The recorded deposit transaction.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is missing, zero or negative
    /// - `ArithmeticOverflow` if the new balance cannot be represented
    /// - Storage errors from either write
    pub fn deposit(&mut self, amount: Option<Decimal>, note: &str) -> Result<Transaction, WalletError> {
        let amount = match amount {
            Some(amount) if amount > Decimal::ZERO => amount,
            other => return Err(self.reject("deposit", WalletError::invalid_amount(other))),
        };

        let new_balance = self
            .ledger
            .get_balance()
            .checked_add(amount)
            .ok_or_else(|| self.reject("deposit", WalletError::arithmetic_overflow("deposit")))?;

        self.ledger.set_balance(new_balance)?;

        let tx = Transaction::deposit(amount, note, self.ledger.timestamp());
        self.ledger.add_transaction(tx.clone())?;

        info!(amount = %amount, balance = %new_balance, "deposit recorded");
        Ok(tx)
    }

    /// Send funds to a named recipient
    ///
    /// Checks run in this order and the first failure is returned:
    /// 1. recipient is non-empty after trimming
    /// 2. amount is present and positive
    /// 3. recipient contains only letters and whitespace
    /// 4. amount does not exceed the balance
    ///
    /// # Returns
    ///
    /// The recorded send transaction.
    pub fn send(
        &mut self,
        recipient: &str,
        amount: Option<Decimal>,
        note: &str,
    ) -> Result<Transaction, WalletError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(self.reject("send", WalletError::EmptyRecipient));
        }

        let amount = match amount {
            Some(amount) if amount > Decimal::ZERO => amount,
            other => return Err(self.reject("send", WalletError::invalid_amount(other))),
        };

        if !is_valid_recipient(recipient) {
            return Err(self.reject("send", WalletError::invalid_recipient(recipient)));
        }

        let balance = self.ledger.get_balance();
        if amount > balance {
            return Err(self.reject("send", WalletError::insufficient_funds(balance, amount)));
        }

        let new_balance = balance
            .checked_sub(amount)
            .ok_or_else(|| self.reject("send", WalletError::arithmetic_overflow("send")))?;

        self.ledger.set_balance(new_balance)?;

        let tx = Transaction::send(recipient, amount, note, self.ledger.timestamp());
        self.ledger.add_transaction(tx.clone())?;

        info!(recipient = %recipient, amount = %amount, balance = %new_balance, "send recorded");
        Ok(tx)
    }

    /// Wipe the transaction history
    ///
    /// The balance is kept, so afterwards it can no longer be reconciled
    /// from the (empty) history.
    pub fn clear_history(&mut self) -> Result<(), WalletError> {
        self.ledger.clear_transactions()?;
        info!("transaction history cleared");
        Ok(())
    }

    /// History filtered by kind, in stored (newest-first) order
    pub fn list_transactions(&self, filter: TransactionFilter) -> TransactionView {
        TransactionView {
            transactions: self.ledger.get_transactions(),
            filter,
        }
    }

    /// The first `limit` transactions of the history
    pub fn list_recent(&self, limit: usize) -> Vec<Transaction> {
        self.ledger
            .get_transactions()
            .into_iter()
            .take(limit)
            .collect()
    }

    fn reject(&self, operation: &str, error: WalletError) -> WalletError {
        info!(operation, error = %error, "operation rejected");
        error
    }
}

/// Snapshot of the history seen through a filter
///
/// Iterating is lazy and can be repeated; each pass yields the matching
/// transactions in stored order.
#[derive(Debug, Clone)]
pub struct TransactionView {
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
}

impl TransactionView {
    /// Filter applied by this view
    pub fn filter(&self) -> TransactionFilter {
        self.filter
    }

    /// Iterate over the matching transactions
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> + '_ {
        let filter = self.filter;
        self.transactions.iter().filter(move |tx| filter.matches(tx))
    }

    /// Whether no transaction matches
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collect the matching transactions
    pub fn to_vec(&self) -> Vec<Transaction> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a TransactionView {
    type Item = &'a Transaction;
    type IntoIter = Box<dyn Iterator<Item = &'a Transaction> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
