//! Error types for the wallet
//!
//! This module defines all error types that can occur while operating the wallet.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Empty or malformed recipient, invalid amount,
//!   insufficient balance, arithmetic overflow. No state is mutated.
//! - **Session Errors**: Operation attempted without a logged-in session,
//!   or login with wrong credentials.
//! - **Storage Errors**: I/O failures, quota exceeded, encoding failures in
//!   the key-value backend.
//!
//! Malformed data already sitting in storage is never reported through this
//! type; it is absorbed at the read boundary.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the wallet
///
/// Validation variants are distinguishable so the caller can show the
/// matching message; see [`WalletError::is_validation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// Recipient is empty after trimming whitespace
    #[error("Recipient is required")]
    EmptyRecipient,

    /// Amount is missing, non-numeric, non-finite, zero or negative
    #[error("Invalid amount{}", amount.map(|a| format!(" '{}'", a)).unwrap_or_default())]
    InvalidAmount {
        /// The rejected amount, when it was numeric
        amount: Option<Decimal>,
    },

    /// Recipient contains characters other than letters and spaces
    #[error("Invalid recipient '{recipient}': only letters and spaces are allowed")]
    InvalidRecipient {
        /// The rejected recipient
        recipient: String,
    },

    /// Send amount exceeds the current balance
    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Current balance
        available: Decimal,
        /// Requested send amount
        requested: Decimal,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// No logged-in session
    #[error("Not logged in")]
    NotAuthenticated,

    /// Login attempted with credentials other than the demo account's
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// I/O error in the storage backend
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Write rejected because the backend is full
    ///
    /// Earlier writes of the same operation are not rolled back.
    #[error("Storage quota exceeded while writing '{key}'")]
    QuotaExceeded {
        /// Key whose write was rejected
        key: String,
    },

    /// Value could not be encoded for storage or export
    #[error("Encoding error: {message}")]
    Encode {
        /// Description of the encoding error
        message: String,
    },
}

impl WalletError {
    /// Whether this is a user-facing validation failure
    ///
    /// Validation failures are raised before any write, so state is unchanged.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WalletError::EmptyRecipient
                | WalletError::InvalidAmount { .. }
                | WalletError::InvalidRecipient { .. }
                | WalletError::InsufficientFunds { .. }
                | WalletError::ArithmeticOverflow { .. }
        )
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Option<Decimal>) -> Self {
        WalletError::InvalidAmount { amount }
    }

    /// Create an InvalidRecipient error
    pub fn invalid_recipient(recipient: &str) -> Self {
        WalletError::InvalidRecipient {
            recipient: recipient.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        WalletError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a QuotaExceeded error
    pub fn quota_exceeded(key: &str) -> Self {
        WalletError::QuotaExceeded {
            key: key.to_string(),
        }
    }
}

// Conversion from io::Error to WalletError
impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to WalletError
impl From<serde_json::Error> for WalletError {
    fn from(error: serde_json::Error) -> Self {
        WalletError::Encode {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to WalletError
impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        WalletError::Encode {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_recipient(WalletError::EmptyRecipient, "Recipient is required")]
    #[case::invalid_amount_value(
        WalletError::InvalidAmount { amount: Some(Decimal::new(-5, 0)) },
        "Invalid amount '-5'"
    )]
    #[case::invalid_amount_missing(WalletError::InvalidAmount { amount: None }, "Invalid amount")]
    #[case::invalid_recipient(
        WalletError::InvalidRecipient { recipient: "Ana123".to_string() },
        "Invalid recipient 'Ana123': only letters and spaces are allowed"
    )]
    #[case::insufficient_funds(
        WalletError::InsufficientFunds { available: Decimal::new(60, 0), requested: Decimal::new(1000, 0) },
        "Insufficient balance: available 60, requested 1000"
    )]
    #[case::not_authenticated(WalletError::NotAuthenticated, "Not logged in")]
    #[case::invalid_credentials(WalletError::InvalidCredentials, "Invalid credentials")]
    #[case::quota(
        WalletError::QuotaExceeded { key: "transactions".to_string() },
        "Storage quota exceeded while writing 'transactions'"
    )]
    fn test_error_display(#[case] error: WalletError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::empty_recipient(WalletError::EmptyRecipient, true)]
    #[case::invalid_amount(WalletError::invalid_amount(None), true)]
    #[case::invalid_recipient(WalletError::invalid_recipient("x1"), true)]
    #[case::insufficient(WalletError::insufficient_funds(Decimal::ZERO, Decimal::ONE), true)]
    #[case::overflow(WalletError::arithmetic_overflow("deposit"), true)]
    #[case::not_authenticated(WalletError::NotAuthenticated, false)]
    #[case::invalid_credentials(WalletError::InvalidCredentials, false)]
    #[case::quota(WalletError::quota_exceeded("balance"), false)]
    #[case::io(WalletError::Io { message: "disk".to_string() }, false)]
    fn test_is_validation(#[case] error: WalletError, #[case] expected: bool) {
        assert_eq!(error.is_validation(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: WalletError = io_error.into();
        assert!(matches!(error, WalletError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
