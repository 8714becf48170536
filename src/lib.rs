//! HDFC Statement Library
//! # Overview
//!
//! This library reads a bank statement export line by line, filters the
//! transactions by description and date, and aggregates debit, credit and net
//! totals.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, error types)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::filter`] - Filter criteria and the per-transaction match decision
//!   - [`core::totals`] - Running totals and the net display convention
//!   - [`core::pipeline`] - Line-by-line parse → filter → aggregate driver
//! - [`io`] - Input sources, line parsing and report rendering
//! - [`runner`] - One complete run from configuration to printed report
//!
//! # Statement Layout
//!
//! Each data line holds at least six comma-separated fields:
//!
//! - **0**: Date as `DD/MM/YY`, always read as year `20YY`
//! - **1**: Description
//! - **3**: Debit amount
//! - **4**: Credit amount
//!
//! An optional header line containing `Date` and any blank lines before the
//! first data line are skipped.
//!
//! # Net Display
//!
//! Net is `debit - credit`. A net debit is shown with a leading `-`, a net
//! credit with a leading `+`.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use crate::core::{FilterCriteria, OutputMode, RunConfig, RunningTotals, StatementPipeline};
pub use io::parse_line;
pub use types::{ConfigError, LineError, RecordError, StatementError, Transaction};
