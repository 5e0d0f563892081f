//! Alke Wallet Library
//! # Overview
//!
//! This library implements a single-user demo wallet: a balance, deposits,
//! sends to named recipients and a browsable transaction history, all kept
//! in a string key-value store.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, TransactionKind, WalletError)
//! - [`storage`] - Key-value backends (in-memory and JSON file)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Typed, defensive access to balance and history
//!   - [`core::wallet`] - Validated deposit, send and history operations
//!   - [`core::session`] - Demo login and session checks
//! - [`io`] - History export
//! - [`cli`] - CLI arguments parsing and command execution
//!
//! # Wallet State
//!
//! | Key            | Value                                   |
//! |----------------|-----------------------------------------|
//! | `isLogged`     | `"true"` while a session is open        |
//! | `userEmail`    | email of the logged-in user             |
//! | `balance`      | decimal string, read as 0 if invalid    |
//! | `lastUpdate`   | formatted time of the last balance write|
//! | `transactions` | JSON array, newest first                |
//!
//! The balance and the history are written separately. Clearing the
//! history leaves the balance untouched.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod storage;
pub mod types;

pub use core::{LedgerStore, TransactionView, Wallet};
pub use io::write_transactions_csv;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{Transaction, TransactionFilter, TransactionId, TransactionKind, WalletError};
