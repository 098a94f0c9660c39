// Error types for record validation, loading and saving

use rust_decimal::Decimal;
use std::io;
use thiserror::Error;

/// Field-level failure while building an [`ExpenseRecord`](crate::ExpenseRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("unknown category `{0}` (expected one of Food, Transport, Entertainment, Utilities, Other)")]
    UnknownCategory(String),

    #[error("invalid amount `{0}`")]
    InvalidAmount(String),

    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("amount {0} exceeds the maximum of {}", crate::record::MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// Failure while reading a ledger from delimited text.
///
/// A load that returns this error never reaches `Ledger::replace`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open expense file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse expense file: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header: expected [{}], found [{}]", .expected.join(", "), .found.join(", "))]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: RecordError,
    },
}

/// Failure while writing a ledger to its destination.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write expense file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode expense file: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_headers() {
        let err = LoadError::Schema {
            expected: vec!["Date".into(), "Amount".into()],
            found: vec!["When".into()],
        };
        assert_eq!(
            err.to_string(),
            "unexpected header: expected [Date, Amount], found [When]"
        );
    }

    #[test]
    fn test_row_error_carries_line_and_source() {
        let err = LoadError::Row {
            line: 3,
            source: RecordError::InvalidAmount("abc".into()),
        };
        assert_eq!(err.to_string(), "line 3: invalid amount `abc`");
        assert!(std::error::Error::source(&err).is_some());
    }
}
