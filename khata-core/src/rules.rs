//! Ordered keyword rules and the essential-category set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One `(keyword, category)` pair. Keywords are matched as raw substrings of
/// the uppercased description, so a lowercase keyword only matches literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }
}

/// Ordered rule table. Declaration order is load-bearing: the first keyword
/// found in a description wins, even over a longer keyword declared later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter()
    }

    /// Append a rule after all existing ones.
    pub fn push(&mut self, rule: CategoryRule) {
        self.rules.push(rule);
    }

    /// Append rules after all existing ones, preserving their order.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = CategoryRule>) {
        self.rules.extend(rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Built-in rule table, in its original declaration order.
/// Note the trailing space in `"BY "` and the mixed-case `"Miscellaneous"`
/// entry (which can only ever match via the sentinel short-circuit).
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("INDIAFORENSIC", "Salary & Income"),
    ("INDIAFORENS", "Salary & Income"),
    ("RMCPL", "Salary & Income"),
    ("POS", "Entertainment"),
    ("SETTLEMENT", "Payments"),
    ("SETT", "Payments"),
    ("NEFT", "Transfers"),
    ("RTGS", "Transfers"),
    ("IMPS", "Transfers"),
    ("TRF FROM", "Transfers"),
    ("FTR FROM", "Transfers"),
    ("TRF TO", "Transfers"),
    ("SWEEP TRF TO", "Transfers"),
    ("COMMISSION", "Fees & Charges"),
    ("SERVICE TAX", "Fees & Charges"),
    ("S TAX", "Fees & Charges"),
    ("GROCERY", "Entertainment"),
    ("RENT", "Salary & Income"),
    ("INSURANCE", "Insurance"),
    ("INDO GIBL", "Insurance"),
    ("BBPS", "Utilities & Telecom"),
    ("FDRL", "Transfers"),
    ("INTERNAL FUND TRANSFER", "Transfers"),
    ("MICRO ATM", "Cash Handling"),
    ("ATM", "Cash Handling"),
    ("CASHDEP", "Cash Handling"),
    ("DSB CASH PICKP", "Cash Handling"),
    ("BEAT CASH PICKP", "Cash Handling"),
    ("SHORT CSH", "Cash Handling"),
    ("LOAN RECOVERY", "Loans & EMI"),
    ("AIRTEL", "Utilities & Telecom"),
    ("IRCTC", "Entertainment"),
    ("CHQ DEPOSIT RETURN", "Fees & Charges"),
    ("INCOME", "Salary & Income"),
    ("REMI", "Salary & Income"),
    ("INDFOR", "Salary & Income"),
    ("STL", "Payments"),
    ("AEPS", "Fees & Charges"),
    ("ADJ", "Fees & Charges"),
    ("CB", "Payments"),
    ("CR", "Payments"),
    ("DR", "Payments"),
    ("MAW", "Fees & Charges"),
    ("Miscellaneous", "Miscellaneous"),
    ("CHQ DEP", "Payments"),
    ("CHEQUE DEPOSIT", "Payments"),
    ("CHQ", "Payments"),
    ("SBI", "Miscellaneous"),
    ("VODAFONE", "Utilities & Telecom"),
    ("MOBILE SERVICES", "Utilities & Telecom"),
    ("CASHPICKUP", "Cash Handling"),
    ("CASH PICKUP", "Cash Handling"),
    ("RVSL DSB CSH PCKUP", "Cash Handling"),
    ("DSB CSH PCKUP", "Cash Handling"),
    ("PICKUP CHARGE", "Cash Handling"),
    ("SER TAX", "Fees & Charges"),
    ("NORTH DELHI POWER", "Utilities & Telecom"),
    ("RAJDHANI POWER", "Utilities & Telecom"),
    ("BSES", "Utilities & Telecom"),
    ("INDIAIDEAS", "Payments"),
    ("BIGTREE", "Entertainment"),
    ("BOOKMYSHOW", "Entertainment"),
    ("SONATA FINANCE", "Loans & EMI"),
    ("MANGALA FINANCE", "Loans & EMI"),
    ("SHETTY", "Loans & EMI"),
    ("BY ", "Transfers"),
];

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(keyword, category)| CategoryRule::new(*keyword, *category))
                .collect(),
        }
    }
}

/// Categories exempt from discretionary-spend analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssentialCategories(HashSet<String>);

impl EssentialCategories {
    pub fn new(categories: impl IntoIterator<Item = String>) -> Self {
        Self(categories.into_iter().collect())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }
}

impl Default for EssentialCategories {
    fn default() -> Self {
        Self::new(
            [
                "Transfers",
                "Loans & EMI",
                "Fees & Charges",
                "Utilities & Telecom",
                "Salary & Income",
                "Insurance",
                "Payments",
                "Miscellaneous",
            ]
            .into_iter()
            .map(String::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_keeps_declaration_order() {
        let table = RuleTable::default();
        assert_eq!(table.len(), 66);

        let first = table.iter().next().unwrap();
        assert_eq!(first.keyword, "INDIAFORENSIC");
        assert_eq!(first.category, "Salary & Income");

        // NEFT must come before ATM for precedence to resolve transfers first
        let pos = |kw: &str| table.iter().position(|r| r.keyword == kw).unwrap();
        assert!(pos("NEFT") < pos("ATM"));
        assert!(pos("MICRO ATM") < pos("ATM"));
    }

    #[test]
    fn test_trailing_space_keyword_survives() {
        let table = RuleTable::default();
        assert!(
            table
                .iter()
                .any(|r| r.keyword == "BY " && r.category == "Transfers")
        );
    }

    #[test]
    fn test_extend_appends_after_defaults() {
        let mut table = RuleTable::default();
        table.push(CategoryRule::new("SWIGGY", "Entertainment"));
        assert_eq!(table.len(), 67);
        assert_eq!(table.iter().last().unwrap().keyword, "SWIGGY");
    }

    #[test]
    fn test_default_essential_set() {
        let essential = EssentialCategories::default();
        for category in [
            "Transfers",
            "Loans & EMI",
            "Fees & Charges",
            "Utilities & Telecom",
            "Salary & Income",
            "Insurance",
            "Payments",
            "Miscellaneous",
        ] {
            assert!(essential.contains(category), "{category} should be essential");
        }
        assert!(!essential.contains("Entertainment"));
        assert!(!essential.contains("Cash Handling"));
    }
}
