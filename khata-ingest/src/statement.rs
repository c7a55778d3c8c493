//! CSV statement reader.
//!
//! Expected header row (column order free, unknown columns ignored):
//!   DATE, VALUE DATE, TRANSACTION DETAILS, CHQ.NO.,
//!   WITHDRAWAL AMT, DEPOSIT AMT, BALANCE AMT

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::types::RawRow;

#[derive(Debug, Clone, Copy, Default)]
struct ColumnMap {
    date: Option<usize>,
    value_date: Option<usize>,
    description: Option<usize>,
    cheque_number: Option<usize>,
    withdrawal: Option<usize>,
    deposit: Option<usize>,
    balance: Option<usize>,
}

fn resolve_columns(headers: &csv::StringRecord) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (idx, name) in headers.iter().enumerate() {
        match name.trim().to_uppercase().as_str() {
            "DATE" => map.date = Some(idx),
            "VALUE DATE" => map.value_date = Some(idx),
            "TRANSACTION DETAILS" => map.description = Some(idx),
            "CHQ.NO." | "CHQ.NO" | "CHQ NO" => map.cheque_number = Some(idx),
            "WITHDRAWAL AMT" => map.withdrawal = Some(idx),
            "DEPOSIT AMT" => map.deposit = Some(idx),
            "BALANCE AMT" => map.balance = Some(idx),
            _ => {}
        }
    }
    map
}

fn field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i)).map(str::to_string)
}

/// Read raw statement rows from any CSV reader.
///
/// A column missing from the header yields `None` in every row, which is what
/// drives the normalizer's schema check downstream.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr
        .headers()
        .context("reading statement header row")?
        .clone();
    let columns = resolve_columns(&headers);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.context("reading statement row")?;
        rows.push(RawRow {
            date: field(&record, columns.date),
            value_date: field(&record, columns.value_date),
            description: field(&record, columns.description),
            cheque_number: field(&record, columns.cheque_number),
            withdrawal: field(&record, columns.withdrawal),
            deposit: field(&record, columns.deposit),
            balance: field(&record, columns.balance),
        });
    }
    Ok(rows)
}

/// Read raw statement rows from a CSV file on disk.
pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_rows(file)
}
