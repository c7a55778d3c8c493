//! Normalized ledger transaction records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel description for rows whose source value was absent or blank.
pub const MISC_DESCRIPTION: &str = "Miscellaneous";

/// Sentinel cheque number for rows without one.
pub const NO_CHEQUE: &str = "NA";

/// One normalized ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Booking date; rows without a parsable one never reach this type
    pub date: NaiveDate,
    /// Value date, when the statement carries a parsable one
    pub value_date: Option<NaiveDate>,
    /// Never empty; `MISC_DESCRIPTION` when the source had none
    pub description: String,
    /// `NO_CHEQUE` when the source had none
    pub cheque_number: String,
    /// Non-negative; malformed source text normalizes to 0.0
    pub withdrawal: f64,
    /// Non-negative; malformed source text normalizes to 0.0
    pub deposit: f64,
    /// Running balance, always recomputed in date order
    pub balance: f64,
    /// Populated by the categorizer; `None` straight out of normalization
    pub category: Option<String>,
}

impl Transaction {
    /// Net effect of this entry on the balance.
    pub fn net(&self) -> f64 {
        self.deposit - self.withdrawal
    }

    /// Returns true if this entry moves money out of the account.
    pub fn is_withdrawal(&self) -> bool {
        self.withdrawal > 0.0
    }
}
