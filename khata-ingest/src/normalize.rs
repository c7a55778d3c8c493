//! Raw rows → ordered transactions with a reconstructed running balance.

use chrono::{NaiveDate, NaiveDateTime};
use khata_core::{MISC_DESCRIPTION, NO_CHEQUE, SchemaError, Transaction};
use tracing::debug;

use crate::types::RawRow;

/// Formats tried in order; day-first variants match the source locale.
/// `%d-%b-%y` sits before `%d-%b-%Y` because chrono's `%Y` also accepts
/// two-digit input and would read "17" as the year 17.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d-%b-%y", "%d-%b-%Y"];

/// Exports sometimes carry a time-of-day; it is dropped.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Strip whitespace and grouping separators, then parse. Blank or otherwise
/// unparsable text is "no value", never an error.
fn parse_amount(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

fn fill_text(raw: Option<&str>, sentinel: &str) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => sentinel.to_string(),
    }
}

fn ensure_schema(rows: &[RawRow]) -> Result<(), SchemaError> {
    if rows.is_empty() {
        return Ok(());
    }
    if rows.iter().all(|r| r.date.is_none()) {
        return Err(SchemaError::MissingColumn("date"));
    }
    if rows.iter().all(|r| r.description.is_none()) {
        return Err(SchemaError::MissingColumn("description"));
    }
    if rows.iter().all(|r| r.withdrawal.is_none()) {
        return Err(SchemaError::MissingColumn("withdrawal"));
    }
    if rows.iter().all(|r| r.deposit.is_none()) {
        return Err(SchemaError::MissingColumn("deposit"));
    }
    Ok(())
}

/// Normalize raw statement rows into a date-ordered transaction sequence.
///
/// Rows without a parsable date are dropped silently (a debug log carries the
/// count). The running balance is recomputed from withdrawals and deposits;
/// whatever balance text the source carried is discarded. Calling this twice
/// on the same input yields identical output.
pub fn normalize(rows: &[RawRow]) -> Result<Vec<Transaction>, SchemaError> {
    ensure_schema(rows)?;

    let mut txns: Vec<Transaction> = Vec::with_capacity(rows.len());
    let mut excluded = 0usize;
    for row in rows {
        let Some(date) = row.date.as_deref().and_then(parse_date) else {
            excluded += 1;
            continue;
        };
        txns.push(Transaction {
            date,
            value_date: row.value_date.as_deref().and_then(parse_date),
            description: fill_text(row.description.as_deref(), MISC_DESCRIPTION),
            cheque_number: fill_text(row.cheque_number.as_deref(), NO_CHEQUE),
            withdrawal: parse_amount(row.withdrawal.as_deref()).unwrap_or(0.0),
            deposit: parse_amount(row.deposit.as_deref()).unwrap_or(0.0),
            balance: 0.0,
            category: None,
        });
    }
    if excluded > 0 {
        debug!(excluded, "dropped rows without a parsable date");
    }

    // stable: equal dates keep source order
    txns.sort_by_key(|t| t.date);

    let mut running = 0.0;
    for txn in &mut txns {
        running += txn.net();
        txn.balance = running;
    }
    Ok(txns)
}
