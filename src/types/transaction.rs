//! Transaction-related types for the wallet
//!
//! This module defines the transaction record kept in the wallet history,
//! the kind tag that distinguishes deposits from sends, and the filter used
//! when browsing the history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction identifier
///
/// Random (v4) UUID assigned when the transaction is created.
pub type TransactionId = Uuid;

/// Kind of a recorded transaction
///
/// Serialized as the `type` field of the stored record. A send also carries
/// the recipient it was addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds credited to the wallet
    Deposit,

    /// Funds debited from the wallet to a named recipient
    Send {
        /// Recipient name as entered by the user (already validated)
        recipient: String,
    },
}

impl TransactionKind {
    /// Display label for a transaction of this kind
    ///
    /// `"Deposit"` for deposits, `"Send to {recipient}"` for sends.
    pub fn title(&self) -> String {
        match self {
            TransactionKind::Deposit => "Deposit".to_string(),
            TransactionKind::Send { recipient } => format!("Send to {}", recipient),
        }
    }

    /// Lowercase name of the kind as it appears in storage and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Send { .. } => "send",
        }
    }

    /// Signed effect of an amount of this kind on the balance
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Send { .. } => -amount,
        }
    }
}

/// A recorded wallet transaction
///
/// Immutable once created. The history holds these newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Deposit or send (flattened into `type` / `recipient`)
    #[serde(flatten)]
    pub kind: TransactionKind,

    /// Display label, e.g. "Deposit" or "Send to Juan Perez"
    pub title: String,

    /// Positive amount moved by this transaction
    pub amount: Decimal,

    /// Free-text annotation, possibly empty
    #[serde(default)]
    pub note: String,

    /// Formatted creation timestamp
    pub date: String,
}

impl Transaction {
    /// Create a new transaction with a fresh random id
    ///
    /// The title is derived from the kind.
    pub fn new(kind: TransactionKind, amount: Decimal, note: &str, date: String) -> Self {
        Transaction {
            id: Uuid::new_v4(),
            title: kind.title(),
            kind,
            amount,
            note: note.to_string(),
            date,
        }
    }

    /// Create a deposit transaction
    pub fn deposit(amount: Decimal, note: &str, date: String) -> Self {
        Self::new(TransactionKind::Deposit, amount, note, date)
    }

    /// Create a send transaction addressed to `recipient`
    pub fn send(recipient: &str, amount: Decimal, note: &str, date: String) -> Self {
        Self::new(
            TransactionKind::Send {
                recipient: recipient.to_string(),
            },
            amount,
            note,
            date,
        )
    }

    /// Whether this is a deposit
    pub fn is_deposit(&self) -> bool {
        matches!(self.kind, TransactionKind::Deposit)
    }

    /// Whether this is a send
    pub fn is_send(&self) -> bool {
        matches!(self.kind, TransactionKind::Send { .. })
    }

    /// Signed effect of this transaction on the balance
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Filter applied when listing the transaction history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TransactionFilter {
    /// Every transaction
    #[default]
    All,
    /// Deposits only
    Deposit,
    /// Sends only
    Send,
}

impl TransactionFilter {
    /// Whether `tx` passes this filter
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Deposit => tx.is_deposit(),
            TransactionFilter::Send => tx.is_send(),
        }
    }
}
