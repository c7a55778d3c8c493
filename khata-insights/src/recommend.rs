//! Discretionary-spend summaries and tiered recommendations.

use khata_core::{EssentialCategories, Transaction};
use serde::Serialize;
use std::collections::HashMap;

/// Severity of a category's share of discretionary spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    HighBurn,
    AboveAverage,
    WellControlled,
}

impl Tier {
    /// Presentation icon for this tier.
    pub fn icon(&self) -> &'static str {
        match self {
            Tier::HighBurn => "🔥",
            Tier::AboveAverage => "⚠️",
            Tier::WellControlled => "✅",
        }
    }
}

/// One discretionary category's summary. Computed fresh from a transaction
/// sequence; consumers re-derive rather than patch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub category: String,
    /// Sum of withdrawals in this category.
    pub total_spend: f64,
    /// This category's share of all discretionary spend, 0–100.
    pub pct_of_discretionary: f64,
    pub tier: Tier,
    /// Rendered recommendation text.
    pub message: String,
    /// Presentation metadata, fixed at computation time.
    pub icon: &'static str,
}

/// Group discretionary withdrawals by category and attach a tiered
/// recommendation to each, ranked by total spend descending.
///
/// Discretionary means: categorized, not in the essential set, and an actual
/// withdrawal. An empty discretionary set yields an empty result, which also
/// guards the percentage division below.
pub fn generate_recommendations(
    txns: &[Transaction],
    essential: &EssentialCategories,
) -> Vec<RecommendationSummary> {
    // Single forward pass; groups keep first-appearance order.
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for txn in txns {
        let Some(category) = txn.category.as_deref() else {
            continue;
        };
        if essential.contains(category) || txn.withdrawal <= 0.0 {
            continue;
        }
        if !totals.contains_key(category) {
            order.push(category.to_string());
        }
        *totals.entry(category.to_string()).or_insert(0.0) += txn.withdrawal;
    }

    if order.is_empty() {
        return Vec::new();
    }

    let total_discretionary: f64 = totals.values().sum();
    let mean_pct = 100.0 / order.len() as f64;

    let mut summaries: Vec<RecommendationSummary> = order
        .into_iter()
        .map(|category| {
            let total_spend = totals[&category];
            let pct = total_spend / total_discretionary * 100.0;
            let (tier, message) = tier_and_message(&category, total_spend, pct, mean_pct);
            RecommendationSummary {
                icon: tier.icon(),
                category,
                total_spend,
                pct_of_discretionary: pct,
                tier,
                message,
            }
        })
        .collect();

    // stable: equal spends keep group order
    summaries.sort_by(|a, b| b.total_spend.partial_cmp(&a.total_spend).unwrap());
    summaries
}

/// First matching tier wins: high-burn above 30%, above-average past the
/// equal-share mean, well-controlled otherwise.
fn tier_and_message(category: &str, total: f64, pct: f64, mean_pct: f64) -> (Tier, String) {
    if pct > 30.0 {
        return (
            Tier::HighBurn,
            format!(
                "You're spending {pct:.0}% of all discretionary in {category} (₹{}). \
                 Consider setting a strict cap here.",
                fmt_inr(total)
            ),
        );
    }
    if pct > mean_pct {
        let cap = total * 0.9;
        return (
            Tier::AboveAverage,
            format!(
                "{category} is above average at {pct:.0}% of discretionary. \
                 Try reducing by 10% (cap at ₹{}).",
                fmt_inr(cap)
            ),
        );
    }
    (
        Tier::WellControlled,
        format!(
            "{category} is well-controlled at just {pct:.0}% (~₹{}). Keep it up!",
            fmt_inr(total)
        ),
    )
}

/// Round to whole rupees and insert thousands separators.
fn fmt_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Pure pagination split: the first `max_recs` summaries and the overflow.
/// `max_recs` is clamped to at least 1; the two halves concatenate back to
/// the full ranked sequence.
pub fn split_recommendations(
    recs: &[RecommendationSummary],
    max_recs: usize,
) -> (&[RecommendationSummary], &[RecommendationSummary]) {
    let cut = max_recs.max(1).min(recs.len());
    recs.split_at(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn spend(category: &str, withdrawal: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            value_date: None,
            description: category.to_string(),
            cheque_number: "NA".to_string(),
            withdrawal,
            deposit: 0.0,
            balance: 0.0,
            category: Some(category.to_string()),
        }
    }

    fn receive(category: &str, deposit: f64) -> Transaction {
        Transaction {
            deposit,
            withdrawal: 0.0,
            ..spend(category, 0.0)
        }
    }

    #[test]
    fn test_tiering_boundaries_with_four_categories() {
        // four discretionary categories: mean share is 25%
        let txns = vec![
            spend("Entertainment", 35.0),
            spend("Cash Handling", 26.0),
            spend("Card Reference", 34.0),
            spend("Others", 5.0),
        ];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        assert_eq!(recs.len(), 4);

        let tier_of = |cat: &str| recs.iter().find(|r| r.category == cat).unwrap().tier;
        assert_eq!(tier_of("Entertainment"), Tier::HighBurn); // 35% > 30%
        assert_eq!(tier_of("Cash Handling"), Tier::AboveAverage); // 26% > 25%
        assert_eq!(tier_of("Card Reference"), Tier::HighBurn);
        assert_eq!(tier_of("Others"), Tier::WellControlled);
    }

    #[test]
    fn test_essential_and_deposit_only_rows_are_excluded() {
        let txns = vec![
            spend("Transfers", 500.0),
            receive("Entertainment", 100.0),
            spend("Entertainment", 50.0),
        ];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].category, "Entertainment");
        assert_eq!(recs[0].total_spend, 50.0);
        assert_eq!(recs[0].pct_of_discretionary, 100.0);
    }

    #[test]
    fn test_uncategorized_rows_are_skipped() {
        let mut txn = spend("Entertainment", 50.0);
        txn.category = None;
        assert!(generate_recommendations(&[txn], &EssentialCategories::default()).is_empty());
    }

    #[test]
    fn test_empty_discretionary_returns_empty() {
        let txns = vec![spend("Transfers", 10.0), spend("Payments", 5.0)];
        assert!(generate_recommendations(&txns, &EssentialCategories::default()).is_empty());
        assert!(generate_recommendations(&[], &EssentialCategories::default()).is_empty());
    }

    #[test]
    fn test_ranked_by_spend_descending() {
        let txns = vec![
            spend("Others", 10.0),
            spend("Entertainment", 200.0),
            spend("Cash Handling", 90.0),
        ];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        let order: Vec<_> = recs.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, ["Entertainment", "Cash Handling", "Others"]);
    }

    #[test]
    fn test_equal_spends_keep_group_order() {
        let txns = vec![
            spend("Others", 50.0),
            spend("Entertainment", 50.0),
            spend("Cash Handling", 50.0),
        ];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        let order: Vec<_> = recs.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, ["Others", "Entertainment", "Cash Handling"]);
    }

    #[test]
    fn test_high_burn_message_and_icon() {
        let txns = vec![spend("Entertainment", 4000.0), spend("Others", 1000.0)];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        let ent = recs.iter().find(|r| r.category == "Entertainment").unwrap();
        assert_eq!(ent.tier, Tier::HighBurn);
        assert_eq!(ent.icon, "🔥");
        assert!(
            ent.message
                .contains("80% of all discretionary in Entertainment (₹4,000)"),
            "{}",
            ent.message
        );
    }

    #[test]
    fn test_above_average_message_proposes_ten_pct_cap() {
        // five categories, mean 20%; Entertainment at 28% is above average
        let txns = vec![
            spend("Entertainment", 2800.0),
            spend("Cash Handling", 2600.0),
            spend("Card Reference", 2400.0),
            spend("Others", 1200.0),
            spend("Account", 1000.0),
        ];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        let ent = recs.iter().find(|r| r.category == "Entertainment").unwrap();
        assert_eq!(ent.tier, Tier::AboveAverage);
        assert_eq!(ent.icon, "⚠️");
        assert!(ent.message.contains("cap at ₹2,520"), "{}", ent.message);
    }

    #[test]
    fn test_well_controlled_message() {
        let txns = vec![
            spend("Entertainment", 95.0),
            spend("Others", 5.0),
        ];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        let others = recs.iter().find(|r| r.category == "Others").unwrap();
        assert_eq!(others.tier, Tier::WellControlled);
        assert_eq!(others.icon, "✅");
        assert!(others.message.contains("well-controlled at just 5%"), "{}", others.message);
    }

    #[test]
    fn test_pagination_split_is_exhaustive() {
        let txns: Vec<Transaction> = (1..=7)
            .map(|i| spend(&format!("Bucket {i}"), (i * 10) as f64))
            .collect();
        let recs = generate_recommendations(&txns, &EssentialCategories::default());
        assert_eq!(recs.len(), 7);

        let (primary, secondary) = split_recommendations(&recs, 2);
        assert_eq!(primary.len(), 2);
        assert_eq!(secondary.len(), 5);
        assert_eq!(primary[0].category, "Bucket 7");
        assert_eq!(primary[1].category, "Bucket 6");

        let rejoined: Vec<_> = primary.iter().chain(secondary).map(|r| &r.category).collect();
        let full: Vec<_> = recs.iter().map(|r| &r.category).collect();
        assert_eq!(rejoined, full);
    }

    #[test]
    fn test_split_clamps_max_recs() {
        let txns = vec![spend("Entertainment", 10.0), spend("Others", 5.0)];
        let recs = generate_recommendations(&txns, &EssentialCategories::default());

        let (primary, secondary) = split_recommendations(&recs, 0);
        assert_eq!((primary.len(), secondary.len()), (1, 1));

        let (primary, secondary) = split_recommendations(&recs, 10);
        assert_eq!((primary.len(), secondary.len()), (2, 0));
    }

    #[test]
    fn test_fmt_inr_grouping() {
        assert_eq!(fmt_inr(0.0), "0");
        assert_eq!(fmt_inr(999.4), "999");
        assert_eq!(fmt_inr(1234.0), "1,234");
        assert_eq!(fmt_inr(1234567.0), "1,234,567");
    }
}
