//! CSV export of the transaction history
//!
//! Writes transactions with columns: id, type, recipient, title, amount, note, date.
//! Amounts are written exactly as stored, with no rounding, so the export
//! matches the wallet state. Rows keep the order they are given in (the
//! history is newest first).
//!
//! All functions are pure apart from writing to the supplied output.

use crate::types::{Transaction, TransactionKind, WalletError};
use csv::Writer;
use std::io::Write;

/// Header row of the export
pub const CSV_HEADER: [&str; 7] = ["id", "type", "recipient", "title", "amount", "note", "date"];

/// Write transactions to CSV format
///
/// # Arguments
///
/// * `transactions` - Transactions to write, in output order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(WalletError)` if a write error occurred
pub fn write_transactions_csv<'a, I>(transactions: I, output: &mut dyn Write) -> Result<(), WalletError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut writer = Writer::from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for tx in transactions {
        let recipient = match &tx.kind {
            TransactionKind::Send { recipient } => recipient.as_str(),
            TransactionKind::Deposit => "",
        };

        writer.write_record([
            tx.id.to_string().as_str(),
            tx.kind.as_str(),
            recipient,
            tx.title.as_str(),
            tx.amount.to_string().as_str(),
            tx.note.as_str(),
            tx.date.as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
