//! Command execution
//!
//! Runs a parsed [`Command`] against a wallet and writes the human-readable
//! result to the supplied output. Every command except `login` requires an
//! open session.

use crate::cli::Command;
use crate::core::session;
use crate::core::validation::parse_amount;
use crate::core::{Clock, Wallet};
use crate::io::write_transactions_csv;
use crate::storage::KeyValueStore;
use crate::types::{Transaction, WalletError};
use rust_decimal::Decimal;
use std::io::Write;

/// Execute `command` against `wallet`, writing its report to `output`
///
/// # Errors
///
/// Returns `NotAuthenticated` for protected commands without a session,
/// `InvalidCredentials` for a failed login, validation errors from the
/// wallet, and storage or output errors.
pub fn execute<S: KeyValueStore, C: Clock>(
    command: &Command,
    wallet: &mut Wallet<S, C>,
    output: &mut dyn Write,
) -> Result<(), WalletError> {
    if !command.is_public() {
        session::require_auth(wallet.ledger())?;
    }

    match command {
        Command::Login { email, password } => {
            if !session::login(wallet.ledger_mut(), email, password)? {
                return Err(WalletError::InvalidCredentials);
            }
            writeln!(output, "Logged in as {}", email.trim())?;
        }
        Command::Logout => {
            session::logout(wallet.ledger_mut())?;
            writeln!(output, "Logged out")?;
        }
        Command::Status { recent } => {
            let user = session::user_email(wallet.ledger()).unwrap_or_else(|| "user".to_string());
            writeln!(output, "User: {}", user)?;
            writeln!(output, "Balance: {}", format_money(wallet.balance()))?;
            writeln!(output, "Last update: {}", wallet.last_update())?;

            let transactions = wallet.list_recent(*recent);
            if *recent > 0 {
                writeln!(output, "Recent transactions:")?;
                write_table(&transactions, output)?;
            }
        }
        Command::Deposit { amount, note } => {
            let tx = wallet.deposit(parse_amount(amount), note)?;
            writeln!(
                output,
                "Deposited {}. New balance: {}",
                format_money(tx.amount),
                format_money(wallet.balance())
            )?;
        }
        Command::Send {
            recipient,
            amount,
            note,
        } => {
            let tx = wallet.send(recipient, parse_amount(amount), note)?;
            writeln!(
                output,
                "{}: {}. New balance: {}",
                tx.title,
                format_money(tx.amount),
                format_money(wallet.balance())
            )?;
        }
        Command::History { filter, limit, csv } => {
            let view = wallet.list_transactions(*filter);
            let limit = limit.unwrap_or(usize::MAX);
            let transactions: Vec<&Transaction> = view.iter().take(limit).collect();

            if *csv {
                write_transactions_csv(transactions, output)?;
            } else {
                write_table(transactions, output)?;
            }
        }
        Command::ClearHistory => {
            wallet.clear_history()?;
            writeln!(output, "Transaction history cleared")?;
        }
    }

    Ok(())
}

/// Format an amount for display, rounded to two decimal places
///
/// Only the table and status output round; stored amounts and the CSV
/// export keep every decimal.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// One table row: date, title, signed amount and note
pub fn format_transaction_line(tx: &Transaction) -> String {
    let sign = if tx.is_deposit() { '+' } else { '-' };
    let line = format!(
        "{:<17}  {:<28} {}{:>10}",
        tx.date,
        tx.title,
        sign,
        format_money(tx.amount)
    );

    if tx.note.is_empty() {
        line
    } else {
        format!("{}  {}", line, tx.note)
    }
}

fn write_table<'a, I>(transactions: I, output: &mut dyn Write) -> Result<(), WalletError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut empty = true;
    for tx in transactions {
        writeln!(output, "  {}", format_transaction_line(tx))?;
        empty = false;
    }
    if empty {
        writeln!(output, "  No transactions")?;
    }
    Ok(())
}
