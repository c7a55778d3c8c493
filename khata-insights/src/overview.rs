//! Headline ledger metrics and date-range filtering.

use chrono::NaiveDate;
use khata_core::Transaction;

/// Totals shown at the top of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub transactions: usize,
    pub total_spent: f64,
    pub total_received: f64,
    /// Mean withdrawal across all transactions, deposits counted as zeros.
    pub avg_withdrawal: f64,
}

pub fn compute_overview(txns: &[Transaction]) -> Overview {
    let total_spent: f64 = txns.iter().map(|t| t.withdrawal).sum();
    let total_received: f64 = txns.iter().map(|t| t.deposit).sum();
    let avg_withdrawal = if txns.is_empty() {
        0.0
    } else {
        total_spent / txns.len() as f64
    };
    Overview {
        transactions: txns.len(),
        total_spent,
        total_received,
        avg_withdrawal,
    }
}

/// Keep transactions dated within `start..=end`.
pub fn filter_by_date(txns: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    txns.iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect()
}
