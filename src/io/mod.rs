//! I/O module
//!
//! Handles exporting the wallet history.
//!
//! # Components
//!
//! - `csv_format` - CSV serialization of transactions

pub mod csv_format;

pub use csv_format::write_transactions_csv;
