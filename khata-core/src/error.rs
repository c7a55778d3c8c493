//! Typed errors surfaced by the core contracts.

use thiserror::Error;

/// Fatal normalization failure: a structurally required column is entirely
/// absent from the raw input. Every other irregularity degrades row by row
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("required column `{0}` is missing from the source ledger")]
    MissingColumn(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_column() {
        let err = SchemaError::MissingColumn("date");
        assert_eq!(
            err.to_string(),
            "required column `date` is missing from the source ledger"
        );
    }
}
