//! End-to-end run orchestration
//!
//! Ties the pieces together for one invocation: open the input source, run
//! the pipeline over it, and write the report. The input handle lives only
//! for the duration of [`run`] and is closed on every return path.

use crate::core::{RunConfig, RunningTotals, StatementPipeline};
use crate::io::write_report;
use crate::types::StatementError;
use std::io::Write;
use tracing::debug;

/// Process the configured input and write its report
///
/// # Arguments
///
/// * `config` - Validated run configuration
/// * `output` - Receives the rendered report
/// * `diagnostics` - Receives one message per unparseable line
///
/// # Returns
///
/// The final totals of the run.
///
/// # Errors
///
/// - `StatementError::InputSource` if the input cannot be opened
/// - `StatementError::Io` if reading or writing fails
/// - `StatementError::NoMatch` if no transaction passed the filters; nothing
///   is written to `output` in that case
pub fn run(
    config: &RunConfig,
    output: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<RunningTotals, StatementError> {
    debug!(input = %config.input, mode = ?config.mode, criteria = ?config.criteria, "starting run");

    let input = config.input.open()?;
    let pipeline = StatementPipeline::new(&config.criteria, config.mode);
    let result = pipeline.run(input, diagnostics)?;

    write_report(&result.report, output)?;

    Ok(result.totals)
}
