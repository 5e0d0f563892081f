//! Core business logic module
//!
//! This module contains the wallet components:
//! - `clock` - Timestamp source and formatting
//! - `ledger` - Typed access to balance, last-update stamp and history
//! - `wallet` - Validated deposit, send and history operations
//! - `session` - Demo login, logout and session checks
//! - `validation` - Recipient and amount input checks

pub mod clock;
pub mod ledger;
pub mod session;
pub mod validation;
pub mod wallet;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::LedgerStore;
pub use wallet::{TransactionView, Wallet};
