//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records, kinds and history filters
//! - `error`: Error types for the wallet

pub mod error;
pub mod transaction;

pub use error::WalletError;
pub use transaction::{Transaction, TransactionFilter, TransactionId, TransactionKind};
