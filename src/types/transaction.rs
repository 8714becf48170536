//! Transaction-related types for the statement tool
//!
//! This module defines the parsed statement line and the identifiers used when
//! reporting which amount column failed to parse.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// Amount column of a statement line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    /// Outgoing amount (column 3)
    Debit,
    /// Incoming amount (column 4)
    Credit,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Debit => write!(f, "debit"),
            AmountField::Credit => write!(f, "credit"),
        }
    }
}

/// One parsed statement line
///
/// Immutable once constructed. The upper-cased form of the description is
/// computed here so description filters never re-case it per comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    date: NaiveDate,
    date_display: String,
    description: String,
    match_key: String,
    debit: Decimal,
    credit: Decimal,
}

impl Transaction {
    /// Create a transaction from already-validated parts
    ///
    /// # Arguments
    ///
    /// * `date` - Effective date used for range comparisons
    /// * `date_display` - Normalized `DD/MM/YYYY` string shown in reports
    /// * `description` - Free text as stored in the statement
    /// * `debit` - Outgoing amount
    /// * `credit` - Incoming amount
    pub fn new(
        date: NaiveDate,
        date_display: impl Into<String>,
        description: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        let description = description.into();
        let match_key = description.to_uppercase();
        Transaction {
            date,
            date_display: date_display.into(),
            description,
            match_key,
            debit,
            credit,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_display(&self) -> &str {
        &self.date_display
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Upper-cased description used by include/exclude filters
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    pub fn debit(&self) -> Decimal {
        self.debit
    }

    pub fn credit(&self) -> Decimal {
        self.credit
    }
}
