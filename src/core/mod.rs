//! Core statement processing module
//!
//! This module contains the parse-filter-aggregate components:
//! - `config` - Run configuration and output modes
//! - `filter` - Filter criteria, their builder and the match decision
//! - `totals` - Running debit/credit totals and net display
//! - `pipeline` - The line-by-line driver producing a report

pub mod config;
pub mod filter;
pub mod pipeline;
pub mod totals;

pub use config::{OutputMode, RunConfig};
pub use filter::{FilterCriteria, FilterCriteriaBuilder};
pub use pipeline::{PipelineOutput, Report, StatementPipeline, StatementRow};
pub use totals::RunningTotals;
