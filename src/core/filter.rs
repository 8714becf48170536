//! Transaction filtering
//!
//! [`FilterCriteria`] holds the description and date rules for a run and
//! decides, per transaction, whether it is included. Criteria are only
//! obtainable through [`FilterCriteriaBuilder::build`], which rejects
//! contradictory date options before any input is read.
//!
//! Description rules compare upper-cased text on both sides: filter entries
//! are upper-cased when added to the builder, transaction descriptions when
//! the transaction is constructed.

use crate::io::statement_format::{is_digits, DISPLAY_DATE_FORMAT};
use crate::types::{ConfigError, Transaction};
use chrono::NaiveDate;

/// Validated filter rules for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    include_descriptions: Vec<String>,
    exclude_descriptions: Vec<String>,
    on_date: Option<NaiveDate>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Start building criteria
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    pub fn include_descriptions(&self) -> &[String] {
        &self.include_descriptions
    }

    pub fn exclude_descriptions(&self) -> &[String] {
        &self.exclude_descriptions
    }

    pub fn on_date(&self) -> Option<NaiveDate> {
        self.on_date
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from_date
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to_date
    }

    /// Decide whether a transaction passes every rule
    ///
    /// Rules are checked in order and the first failing one rejects:
    /// 1. At least one include entry occurs in the description (if any are set)
    /// 2. No exclude entry occurs in the description
    /// 3. The date equals `on_date`
    /// 4. The date is on or after `from_date`
    /// 5. The date is on or before `to_date`
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let key = transaction.match_key();

        if !self.include_descriptions.is_empty() && !contains_any(&self.include_descriptions, key)
        {
            return false;
        }

        if contains_any(&self.exclude_descriptions, key) {
            return false;
        }

        let date = transaction.date();

        if self.on_date.is_some_and(|on| date != on) {
            return false;
        }

        if self.from_date.is_some_and(|from| date < from) {
            return false;
        }

        if self.to_date.is_some_and(|to| date > to) {
            return false;
        }

        true
    }
}

fn contains_any(needles: &[String], haystack: &str) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// Builder for [`FilterCriteria`]
///
/// # Examples
///
/// ```
/// use hdfc_statement::core::filter::{parse_filter_date, FilterCriteria};
///
/// let criteria = FilterCriteria::builder()
///     .include("amazon, swiggy")
///     .from(parse_filter_date("from", "01/03/2023").unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(criteria.include_descriptions(), ["AMAZON", "SWIGGY"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    include_descriptions: Vec<String>,
    exclude_descriptions: Vec<String>,
    on_date: Option<NaiveDate>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
}

impl FilterCriteriaBuilder {
    /// Add comma-separated descriptions that a transaction must match
    ///
    /// Entries are trimmed and upper-cased; empty entries are dropped.
    pub fn include(mut self, descriptions: &str) -> Self {
        self.include_descriptions
            .extend(split_descriptions(descriptions));
        self
    }

    /// Add comma-separated descriptions that exclude a transaction
    pub fn exclude(mut self, descriptions: &str) -> Self {
        self.exclude_descriptions
            .extend(split_descriptions(descriptions));
        self
    }

    /// Only include transactions on this exact date
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.on_date = Some(date);
        self
    }

    /// Only include transactions on or after this date
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from_date = Some(date);
        self
    }

    /// Only include transactions on or before this date
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to_date = Some(date);
        self
    }

    /// Validate and produce the criteria
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConflictingDateFilters` if an exact date is
    /// combined with either end of a date range.
    pub fn build(self) -> Result<FilterCriteria, ConfigError> {
        if self.on_date.is_some() {
            if self.from_date.is_some() {
                return Err(ConfigError::conflicting_date_filters("from"));
            }
            if self.to_date.is_some() {
                return Err(ConfigError::conflicting_date_filters("to"));
            }
        }

        Ok(FilterCriteria {
            include_descriptions: self.include_descriptions,
            exclude_descriptions: self.exclude_descriptions,
            on_date: self.on_date,
            from_date: self.from_date,
            to_date: self.to_date,
        })
    }
}

fn split_descriptions(descriptions: &str) -> impl Iterator<Item = String> + '_ {
    descriptions
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_uppercase)
}

/// Parse a `DD/MM/YYYY` date given for a filter option
///
/// Day and month must be zero-padded, as in the statement itself.
///
/// # Errors
///
/// Returns `ConfigError::InvalidFilterDate` naming the option.
pub fn parse_filter_date(option: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    let invalid = || ConfigError::invalid_filter_date(option, value);
    let trimmed = value.trim();

    let parts: Vec<&str> = trimmed.split('/').collect();
    let padded = matches!(
        parts.as_slice(),
        [day, month, year] if is_digits(day, 2) && is_digits(month, 2) && is_digits(year, 4)
    );
    if !padded {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT).map_err(|_| invalid())
}
