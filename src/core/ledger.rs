//! Ledger store
//!
//! This module provides the `LedgerStore`, the typed view over the raw
//! key-value store that holds the wallet balance, its last-update stamp and
//! the transaction history.
//!
//! # Defensive reads
//!
//! Reads never fail. A missing or non-numeric balance reads as zero, a
//! missing last-update stamp reads as a placeholder, and a missing or
//! malformed history reads as empty.
//!
//! # Writes
//!
//! Each write touches a single key. Updating the balance and appending to
//! the history are two separate writes; nothing here ties them together.

use crate::core::clock::{format_timestamp, Clock, SystemClock};
use crate::storage::KeyValueStore;
use crate::types::{Transaction, WalletError};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

/// Session flag key, `"true"` while logged in
pub const KEY_IS_LOGGED: &str = "isLogged";
/// Email of the logged-in user
pub const KEY_USER_EMAIL: &str = "userEmail";
/// Current balance as a decimal string
pub const KEY_BALANCE: &str = "balance";
/// Formatted time of the last balance write
pub const KEY_LAST_UPDATE: &str = "lastUpdate";
/// JSON-encoded transaction history, newest first
pub const KEY_TRANSACTIONS: &str = "transactions";

/// Shown when the balance has never been written
pub const LAST_UPDATE_PLACEHOLDER: &str = "—";

/// Typed access to the wallet state held in a key-value store
pub struct LedgerStore<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> LedgerStore<S, SystemClock> {
    /// Create a ledger over `store` using the wall clock
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> LedgerStore<S, C> {
    /// Create a ledger over `store` stamping times from `clock`
    pub fn with_clock(store: S, clock: C) -> Self {
        LedgerStore { store, clock }
    }

    /// Underlying key-value store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying key-value store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the ledger and return the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Current time formatted for storage
    pub fn timestamp(&self) -> String {
        format_timestamp(self.clock.now())
    }

    /// Read the balance
    ///
    /// Returns zero if the balance is absent or not a number.
    pub fn get_balance(&self) -> Decimal {
        match self.store.get(KEY_BALANCE) {
            Some(raw) => Decimal::from_str(raw.trim()).unwrap_or_else(|_| {
                warn!(raw = %raw, "stored balance is not numeric, reading as 0");
                Decimal::ZERO
            }),
            None => Decimal::ZERO,
        }
    }

    /// Write the balance and stamp the last-update time
    ///
    /// The stamp is refreshed even when the value is unchanged.
    pub fn set_balance(&mut self, value: Decimal) -> Result<(), WalletError> {
        self.store.set(KEY_BALANCE, &value.to_string())?;
        let stamp = self.timestamp();
        self.store.set(KEY_LAST_UPDATE, &stamp)?;
        debug!(balance = %value, last_update = %stamp, "balance written");
        Ok(())
    }

    /// Whether a balance has ever been written
    pub fn has_balance(&self) -> bool {
        self.store.get(KEY_BALANCE).is_some()
    }

    /// Read the last-update stamp, or the placeholder if never set
    pub fn get_last_update(&self) -> String {
        self.store
            .get(KEY_LAST_UPDATE)
            .filter(|stamp| !stamp.is_empty())
            .unwrap_or_else(|| LAST_UPDATE_PLACEHOLDER.to_string())
    }

    /// Stamp the last-update time without touching the balance
    pub fn touch_last_update(&mut self) -> Result<(), WalletError> {
        let stamp = self.timestamp();
        self.store.set(KEY_LAST_UPDATE, &stamp)
    }

    /// Read the transaction history, newest first
    ///
    /// Returns an empty list if the history is absent or cannot be decoded.
    pub fn get_transactions(&self) -> Vec<Transaction> {
        match self.store.get(KEY_TRANSACTIONS) {
            Some(raw) => decode_transactions(&raw),
            None => Vec::new(),
        }
    }

    /// Overwrite the whole transaction history
    pub fn save_transactions(&mut self, transactions: &[Transaction]) -> Result<(), WalletError> {
        let encoded = serde_json::to_string(transactions)?;
        self.store.set(KEY_TRANSACTIONS, &encoded)?;
        debug!(count = transactions.len(), "transactions written");
        Ok(())
    }

    /// Prepend `tx` to the history
    ///
    /// Reads the current history, inserts at the head and writes it back.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<(), WalletError> {
        let mut transactions = self.get_transactions();
        transactions.insert(0, tx);
        self.save_transactions(&transactions)
    }

    /// Remove the transaction history entirely
    ///
    /// The balance is left as it is.
    pub fn clear_transactions(&mut self) -> Result<(), WalletError> {
        self.store.remove(KEY_TRANSACTIONS)?;
        debug!("transactions cleared");
        Ok(())
    }
}

/// Decode a stored history
///
/// Total: any decoding failure yields the empty history.
pub fn decode_transactions(raw: &str) -> Vec<Transaction> {
    match serde_json::from_str::<Vec<Transaction>>(raw) {
        Ok(transactions) => transactions,
        Err(e) => {
            warn!(error = %e, "stored transactions are malformed, reading as empty");
            Vec::new()
        }
    }
}
