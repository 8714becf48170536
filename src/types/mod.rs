//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The parsed statement line
//! - `error`: Record, configuration and run error types

pub mod error;
pub mod transaction;

pub use error::{ConfigError, LineError, RecordError, StatementError};
pub use transaction::{AmountField, Transaction};
