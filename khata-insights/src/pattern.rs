//! Weekly and monthly withdrawal/deposit totals.

use chrono::{Datelike, Duration, NaiveDate};
use khata_core::Transaction;
use std::collections::BTreeMap;

/// Withdrawal and deposit sums for one period, labeled by its closing date.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTotals {
    pub period_end: NaiveDate,
    pub withdrawals: f64,
    pub deposits: f64,
}

fn totals_by<F>(txns: &[Transaction], bucket: F) -> Vec<PeriodTotals>
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    let mut buckets: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for txn in txns {
        let entry = buckets.entry(bucket(txn.date)).or_insert((0.0, 0.0));
        entry.0 += txn.withdrawal;
        entry.1 += txn.deposit;
    }
    buckets
        .into_iter()
        .map(|(period_end, (withdrawals, deposits))| PeriodTotals {
            period_end,
            withdrawals,
            deposits,
        })
        .collect()
}

/// Last day of the month containing `date`.
fn month_end(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).unwrap_or(date)
}

/// Monday on or after `date`, the label closing its week.
fn week_end_monday(date: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(days_ahead as i64)
}

/// Monthly totals, ascending, labeled by the last day of each month.
pub fn monthly_totals(txns: &[Transaction]) -> Vec<PeriodTotals> {
    totals_by(txns, month_end)
}

/// Weekly totals, ascending, labeled by the Monday closing each week.
pub fn weekly_totals(txns: &[Transaction]) -> Vec<PeriodTotals> {
    totals_by(txns, week_end_monday)
}
