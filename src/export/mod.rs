//! CSV export of the transaction list.

use std::io::Write;

use crate::domain::transaction::Transaction;
use crate::errors::BookError;

const HEADER: [&str; 5] = ["Date", "Type", "Category", "Amount", "Note"];

/// Writes transactions as CSV in the given display order. Amounts are bare
/// numbers; the dialect only quotes fields that require it.
pub fn write_transactions_csv<W: Write>(
    writer: W,
    transactions: &[Transaction],
) -> Result<(), BookError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for txn in transactions {
        out.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.label().to_string(),
            txn.category.clone(),
            txn.amount.to_string(),
            txn.note.clone(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the export as one in-memory document for download handoff.
pub fn transactions_csv_string(transactions: &[Transaction]) -> Result<String, BookError> {
    let mut buffer = Vec::new();
    write_transactions_csv(&mut buffer, transactions)?;
    String::from_utf8(buffer)
        .map_err(|err| BookError::Persistence(format!("export was not valid UTF-8: {err}")))
}
