//! Run configuration
//!
//! Everything a run needs is resolved before the first line is read: where
//! the input comes from, which transactions to keep, and how to report them.

use crate::core::filter::FilterCriteria;
use crate::io::input::InputSource;

/// How matched transactions are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One row per transaction plus a NET footer
    #[default]
    Tabular,
    /// Only the total debit
    DebitOnly,
    /// Only the total credit
    CreditOnly,
    /// Only the absolute net amount
    NetOnly,
}

impl OutputMode {
    /// Resolve the summary flags
    ///
    /// When more than one flag is set, debit takes precedence over credit and
    /// credit over net.
    pub fn from_flags(debit: bool, credit: bool, net: bool) -> Self {
        if debit {
            OutputMode::DebitOnly
        } else if credit {
            OutputMode::CreditOnly
        } else if net {
            OutputMode::NetOnly
        } else {
            OutputMode::Tabular
        }
    }

    /// True for modes that print a single number instead of rows
    pub fn is_summary(self) -> bool {
        !matches!(self, OutputMode::Tabular)
    }
}

/// Fully validated configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: InputSource,
    pub criteria: FilterCriteria,
    pub mode: OutputMode,
}
