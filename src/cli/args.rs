use crate::types::TransactionFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Demo wallet: balance, deposits, sends and transaction history
#[derive(Parser, Debug)]
#[command(name = "alke-wallet")]
#[command(about = "Demo wallet: balance, deposits, sends and transaction history", long_about = None)]
pub struct CliArgs {
    /// Path of the JSON file holding the wallet state
    #[arg(
        long = "store",
        value_name = "PATH",
        env = "ALKE_WALLET_STORE",
        default_value = "wallet.json",
        help = "Path of the JSON file holding the wallet state"
    )]
    pub store: PathBuf,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Wallet operations available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a session with the demo account
    Login {
        #[arg(long, value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },

    /// Close the session (balance and history are kept)
    Logout,

    /// Show user, balance, last update and recent transactions
    Status {
        /// Number of recent transactions to show
        #[arg(long, value_name = "COUNT", default_value_t = 3)]
        recent: usize,
    },

    /// Add funds to the wallet
    Deposit {
        /// Amount to deposit
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Send funds to a named recipient
    Send {
        /// Recipient name (letters and spaces only)
        #[arg(value_name = "RECIPIENT")]
        recipient: String,
        /// Amount to send
        #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// List transactions, newest first
    History {
        /// Only show transactions of this kind
        #[arg(long, value_enum, default_value_t = TransactionFilter::All)]
        filter: TransactionFilter,
        /// Show at most this many transactions
        #[arg(long, value_name = "COUNT")]
        limit: Option<usize>,
        /// Write CSV instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Delete the transaction history (the balance is not changed)
    ClearHistory,
}

impl Command {
    /// Whether this command may run without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Command::Login { .. })
    }
}
