//! Alke Wallet CLI
//!
//! Command-line front end for the demo wallet.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- login --email demo@alkewallet.com --password 1234
//! cargo run -- deposit 100 --note salary
//! cargo run -- send "Juan Perez" 40
//! cargo run -- history --filter send --csv > sends.csv
//! cargo run -- --store /tmp/other.json status
//! ```
//!
//! State is kept in a JSON file (`--store`, `ALKE_WALLET_STORE`, default
//! `wallet.json`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (not logged in, rejected operation, unreadable store, etc.)

use alke_wallet::cli;
use alke_wallet::core::Wallet;
use alke_wallet::storage::FileStore;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging();

    let store = match FileStore::open(&args.store) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let mut wallet = Wallet::new(store);

    let mut output = std::io::stdout();
    if let Err(e) = cli::execute(&args.command, &mut wallet, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
