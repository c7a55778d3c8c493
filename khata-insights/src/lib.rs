//! khata-insights: categorization and discretionary-spend analysis over
//! normalized transactions.

pub mod categorizer;
pub mod overview;
pub mod pattern;
pub mod recommend;

pub use categorizer::{ACCOUNT, CARD_REFERENCE, Categorizer, OTHERS};
pub use overview::{Overview, compute_overview, filter_by_date};
pub use pattern::{PeriodTotals, monthly_totals, weekly_totals};
pub use recommend::{
    RecommendationSummary, Tier, generate_recommendations, split_recommendations,
};
