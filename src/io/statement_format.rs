//! Statement line format
//!
//! This module centralizes all knowledge of the statement column layout:
//! - Splitting a line into fields and converting them to a [`Transaction`]
//! - Expanding the two-digit-year date column
//! - Fixed-point amount display and description truncation for reports
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Column Layout
//!
//! | Column | Content                      |
//! |--------|------------------------------|
//! | 0      | Date, `DD/MM/YY`             |
//! | 1      | Description                  |
//! | 2      | Unused (value date)          |
//! | 3      | Debit amount                 |
//! | 4      | Credit amount                |
//! | 5      | Unused (reference number)    |

use crate::types::{AmountField, RecordError, Transaction};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Minimum number of comma-separated fields on a data line
pub const MIN_FIELDS: usize = 6;

/// Maximum number of description characters shown in a table row
pub const DESCRIPTION_MAX_LEN: usize = 15;

/// Format accepted for filter dates and produced by date normalization
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

const CENTURY: &str = "20";

const DATE_FIELD: usize = 0;
const DESCRIPTION_FIELD: usize = 1;
const DEBIT_FIELD: usize = 3;
const CREDIT_FIELD: usize = 4;

/// A statement date expanded to a four-digit year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// Comparable calendar date
    pub date: NaiveDate,
    /// `DD/MM/20YY` display string
    pub display: String,
}

/// Parse one raw statement line
///
/// Splits on commas without any quoting rules and delegates to [`parse_fields`].
///
/// # Examples
///
/// ```
/// use hdfc_statement::io::statement_format::parse_line;
///
/// let tx = parse_line("05/03/23, AMAZON PURCHASE, x, 150.00, 0.00, y").unwrap();
/// assert_eq!(tx.date_display(), "05/03/2023");
/// assert_eq!(tx.description(), "AMAZON PURCHASE");
/// ```
pub fn parse_line(line: &str) -> Result<Transaction, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    parse_fields(&fields)
}

/// Convert the fields of one statement line into a Transaction
///
/// # Errors
///
/// - `MalformedRecord` if there are fewer than [`MIN_FIELDS`] fields
/// - `InvalidDate` if the date column is not a valid `DD/MM/YY` date
/// - `InvalidAmount` if the debit or credit column is not a decimal number
pub fn parse_fields(fields: &[&str]) -> Result<Transaction, RecordError> {
    if fields.len() < MIN_FIELDS {
        return Err(RecordError::malformed(MIN_FIELDS, fields.len()));
    }

    let date = normalize_date(fields[DATE_FIELD].trim())?;
    let description = fields[DESCRIPTION_FIELD].trim();
    let debit = parse_amount(fields[DEBIT_FIELD].trim(), AmountField::Debit)?;
    let credit = parse_amount(fields[CREDIT_FIELD].trim(), AmountField::Credit)?;

    Ok(Transaction::new(
        date.date,
        date.display,
        description,
        debit,
        credit,
    ))
}

/// Expand a `DD/MM/YY` token to `DD/MM/20YY` and parse it
///
/// Day, month and year must each be two digits. The century is fixed: every two-digit year maps into 2000-2099. Parts after
/// the third slash-separated part are ignored.
///
/// # Examples
///
/// ```
/// use hdfc_statement::io::statement_format::normalize_date;
///
/// let normalized = normalize_date("05/03/23").unwrap();
/// assert_eq!(normalized.display, "05/03/2023");
/// ```
pub fn normalize_date(token: &str) -> Result<NormalizedDate, RecordError> {
    let parts: Vec<&str> = token.split('/').collect();
    if parts.len() < 3 {
        return Err(RecordError::invalid_date(token));
    }

    // Zero-padded day and month; the expanded year must be exactly four digits.
    let (day, month, year) = (parts[0], parts[1], parts[2]);
    if !is_digits(day, 2) || !is_digits(month, 2) || !is_digits(year, 2) {
        return Err(RecordError::invalid_date(token));
    }

    let display = format!("{}/{}/{}{}", day, month, CENTURY, year);
    let date = NaiveDate::parse_from_str(&display, DISPLAY_DATE_FORMAT)
        .map_err(|_| RecordError::invalid_date(token))?;

    Ok(NormalizedDate { date, display })
}

/// True when `part` is exactly `width` ASCII digits
pub(crate) fn is_digits(part: &str, width: usize) -> bool {
    part.len() == width && part.bytes().all(|b| b.is_ascii_digit())
}

fn parse_amount(value: &str, field: AmountField) -> Result<Decimal, RecordError> {
    // Decimal::from_str skips digit-group underscores
    if value.contains('_') {
        return Err(RecordError::invalid_amount(field, value));
    }
    Decimal::from_str(value).map_err(|_| RecordError::invalid_amount(field, value))
}

/// Render an amount with two-decimal fixed precision
///
/// # Examples
///
/// ```
/// use hdfc_statement::io::statement_format::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(15, 0)), "15.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Cap a description at [`DESCRIPTION_MAX_LEN`] characters
///
/// Shorter descriptions are returned unchanged.
pub fn truncate_description(description: &str) -> &str {
    match description.char_indices().nth(DESCRIPTION_MAX_LEN) {
        Some((end, _)) => &description[..end],
        None => description,
    }
}
