//! Error types for the statement tool
//!
//! Errors are split by how far they reach:
//!
//! - **Record errors** ([`RecordError`]): one statement line could not be
//!   parsed. The line is reported and skipped, the run continues.
//! - **Configuration errors** ([`ConfigError`]): the requested filters are
//!   contradictory or malformed. Raised before any input is read.
//! - **Run errors** ([`StatementError`]): anything that ends the run with a
//!   failure status (bad configuration, unreadable input, no matches).

use super::transaction::AmountField;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure to turn one statement line into a counted transaction
///
/// Always recoverable: the pipeline logs it and moves to the next line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The line has fewer columns than the statement layout requires
    #[error("Malformed record: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        /// Minimum number of fields
        expected: usize,
        /// Number of fields on the line
        found: usize,
    },

    /// The date column is not a `DD/MM/YY` calendar date
    #[error("Invalid date '{token}'")]
    InvalidDate {
        /// The raw date token
        token: String,
    },

    /// An amount column is not a decimal number
    #[error("Invalid {field} amount '{value}'")]
    InvalidAmount {
        /// Which column failed
        field: AmountField,
        /// The raw amount text
        value: String,
    },

    /// Adding the amount would push the totals past the decimal range
    #[error("{field} amount {value} overflows the running totals")]
    AmountOverflow {
        /// Which column overflowed
        field: AmountField,
        /// The amount that could not be added
        value: Decimal,
    },
}

impl RecordError {
    /// Create a MalformedRecord error
    pub fn malformed(expected: usize, found: usize) -> Self {
        RecordError::MalformedRecord { expected, found }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(token: &str) -> Self {
        RecordError::InvalidDate {
            token: token.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(field: AmountField, value: &str) -> Self {
        RecordError::InvalidAmount {
            field,
            value: value.to_string(),
        }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(field: AmountField, value: Decimal) -> Self {
        RecordError::AmountOverflow { field, value }
    }
}

/// A record error tagged with the input line it came from
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Line {line}: {error}")]
pub struct LineError {
    /// 1-based line number in the input
    pub line: u64,
    /// What was wrong with the line
    #[source]
    pub error: RecordError,
}

/// Invalid filter configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `on` was combined with `from` or `to`
    #[error("cannot use --{option} along with --on")]
    ConflictingDateFilters {
        /// The range option that conflicts with `on`
        option: String,
    },

    /// A filter date is not in `DD/MM/YYYY` form
    #[error("invalid value '{value}' for --{option}: expected DD/MM/YYYY")]
    InvalidFilterDate {
        /// The option the value was given for
        option: String,
        /// The rejected value
        value: String,
    },
}

impl ConfigError {
    /// Create a ConflictingDateFilters error
    pub fn conflicting_date_filters(option: &str) -> Self {
        ConfigError::ConflictingDateFilters {
            option: option.to_string(),
        }
    }

    /// Create an InvalidFilterDate error
    pub fn invalid_filter_date(option: &str, value: &str) -> Self {
        ConfigError::InvalidFilterDate {
            option: option.to_string(),
            value: value.to_string(),
        }
    }
}

/// Error that ends a run with a failure status
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatementError {
    /// Conflicting or malformed filter options
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The input path cannot be opened for reading
    #[error("Failed to open file '{path}': {message}")]
    InputSource {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// No transaction survived the filters
    #[error("No match found!")]
    NoMatch,
}

impl From<std::io::Error> for StatementError {
    fn from(error: std::io::Error) -> Self {
        StatementError::Io {
            message: error.to_string(),
        }
    }
}

impl StatementError {
    /// Create an InputSource error
    pub fn input_source(path: &str, error: &std::io::Error) -> Self {
        StatementError::InputSource {
            path: path.to_string(),
            message: error.to_string(),
        }
    }
}
