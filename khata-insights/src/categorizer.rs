//! Keyword categorization with digit-run fallbacks.
//!
//! No learning involved — an ordered keyword scan plus two numeric patterns
//! covers the statement formats this pipeline targets.

use anyhow::Result;
use khata_core::{MISC_DESCRIPTION, RuleTable, Transaction};
use regex::Regex;

/// Category for descriptions that carry a 16-digit card-style reference.
pub const CARD_REFERENCE: &str = "Card Reference";
/// Category for descriptions that carry a 12-digit account-style reference.
pub const ACCOUNT: &str = "Account";
/// Category of last resort.
pub const OTHERS: &str = "Others";

/// Assigns exactly one category per description: sentinel short-circuit,
/// then the ordered keyword table, then the digit-run fallbacks.
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: RuleTable,
    card_reference: Regex,
    account_reference: Regex,
}

impl Categorizer {
    pub fn new(rules: RuleTable) -> Result<Self> {
        Ok(Self {
            rules,
            // exactly 16 / exactly 12 contiguous digits; \b keeps longer runs out
            card_reference: Regex::new(r"\b\d{16}\b")?,
            account_reference: Regex::new(r"\b\d{12}\b")?,
        })
    }

    /// Categorizer over the built-in rule table.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(RuleTable::default())
    }

    /// Pure and deterministic. An earlier rule always wins, even when a
    /// longer keyword declared later would match too — `"CR"` preempting a
    /// more specific rule inside a longer token is the ordering contract at
    /// work, not a defect.
    pub fn categorize(&self, description: &str) -> String {
        if description == MISC_DESCRIPTION {
            return MISC_DESCRIPTION.to_string();
        }

        let upper = description.to_uppercase();
        for rule in self.rules.iter() {
            if upper.contains(rule.keyword.as_str()) {
                return rule.category.clone();
            }
        }

        if self.card_reference.is_match(&upper) {
            return CARD_REFERENCE.to_string();
        }
        if self.account_reference.is_match(&upper) {
            return ACCOUNT.to_string();
        }
        OTHERS.to_string()
    }

    /// Categorize every transaction, returning a new sequence; the input is
    /// left untouched.
    pub fn categorize_all(&self, txns: &[Transaction]) -> Vec<Transaction> {
        txns.iter()
            .map(|txn| {
                let mut txn = txn.clone();
                txn.category = Some(self.categorize(&txn.description));
                txn
            })
            .collect()
    }
}
