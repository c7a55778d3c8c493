//! khata-core: shared data model for the khata statement pipeline.

pub mod error;
pub mod rules;
pub mod transaction;

pub use error::SchemaError;
pub use rules::{CategoryRule, EssentialCategories, RuleTable};
pub use transaction::{MISC_DESCRIPTION, NO_CHEQUE, Transaction};
