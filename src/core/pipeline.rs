//! Statement processing pipeline
//!
//! Drives one sequential pass over the input:
//!
//! 1. Leading blank lines are skipped, and the first non-blank line is
//!    discarded if it is the column header (contains `Date`)
//! 2. Every following line is parsed; failures are written to the diagnostic
//!    sink as `Line N: <reason>` and the line is skipped
//! 3. Parsed transactions are checked against the filter criteria
//! 4. Matches are accumulated and, in tabular mode, turned into report rows.
//!    A match whose amounts would overflow the totals is reported like an
//!    unparseable line and skipped
//!
//! A run with no matches fails with [`StatementError::NoMatch`].

use crate::core::config::OutputMode;
use crate::core::filter::FilterCriteria;
use crate::core::totals::RunningTotals;
use crate::io::statement_format::{format_amount, parse_line, truncate_description};
use crate::io::statement_reader::StatementReader;
use crate::types::{LineError, StatementError, Transaction};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Label of the table footer row
pub const NET_LABEL: &str = "NET";

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    pub date: String,
    pub description: String,
    pub debit: String,
    pub credit: String,
}

impl StatementRow {
    fn from_transaction(transaction: &Transaction) -> Self {
        StatementRow {
            date: transaction.date_display().to_string(),
            description: truncate_description(transaction.description()).to_string(),
            debit: format_amount(transaction.debit()),
            credit: format_amount(transaction.credit()),
        }
    }

    fn footer(totals: &RunningTotals) -> Self {
        StatementRow {
            date: NET_LABEL.to_string(),
            description: totals.net_display(),
            debit: format_amount(totals.total_debit),
            credit: format_amount(totals.total_credit),
        }
    }
}

/// What a successful run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A single formatted number (summary modes)
    Summary(String),
    /// Matched rows in input order plus the NET footer
    Table {
        rows: Vec<StatementRow>,
        footer: StatementRow,
    },
}

/// Result of a completed pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub totals: RunningTotals,
    pub report: Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    Parsing,
}

/// Parse → filter → aggregate driver
///
/// # Examples
///
/// ```
/// use hdfc_statement::core::config::OutputMode;
/// use hdfc_statement::core::filter::FilterCriteria;
/// use hdfc_statement::core::pipeline::{Report, StatementPipeline};
///
/// let criteria = FilterCriteria::builder().include("amazon").build().unwrap();
/// let pipeline = StatementPipeline::new(&criteria, OutputMode::DebitOnly);
///
/// let input = "05/03/23, AMAZON PURCHASE, x, 150.00, 0.00, y\n";
/// let mut diagnostics = Vec::new();
/// let output = pipeline.run(input.as_bytes(), &mut diagnostics).unwrap();
///
/// assert_eq!(output.report, Report::Summary("150.00".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatementPipeline<'a> {
    criteria: &'a FilterCriteria,
    mode: OutputMode,
}

impl<'a> StatementPipeline<'a> {
    pub fn new(criteria: &'a FilterCriteria, mode: OutputMode) -> Self {
        StatementPipeline { criteria, mode }
    }

    /// Process every line of `input`
    ///
    /// # Arguments
    ///
    /// * `input` - Statement lines
    /// * `diagnostics` - Receives one message per unparseable line
    ///
    /// # Errors
    ///
    /// - `StatementError::Io` if reading input or writing diagnostics fails
    /// - `StatementError::NoMatch` if no transaction passed the filters
    pub fn run<R: BufRead>(
        &self,
        input: R,
        diagnostics: &mut dyn Write,
    ) -> Result<PipelineOutput, StatementError> {
        let mut state = ScanState::SeekingHeader;
        let mut totals = RunningTotals::new();
        let mut rows = Vec::new();

        for next in StatementReader::new(input) {
            let line = next?;

            if state == ScanState::SeekingHeader {
                if line.is_blank() {
                    continue;
                }
                state = ScanState::Parsing;
                if line.is_header() {
                    debug!(line = line.number, "skipping column header");
                    continue;
                }
            }

            let transaction = match parse_line(&line.text) {
                Ok(transaction) => transaction,
                Err(error) => {
                    let error = LineError {
                        line: line.number,
                        error,
                    };
                    debug!(%error, "skipping unparseable line");
                    writeln!(diagnostics, "{}", error)?;
                    continue;
                }
            };

            if !self.criteria.matches(&transaction) {
                trace!(line = line.number, "rejected by filters");
                continue;
            }

            if let Err(error) = totals.accumulate(&transaction) {
                let error = LineError {
                    line: line.number,
                    error,
                };
                debug!(%error, "skipping line that overflows the totals");
                writeln!(diagnostics, "{}", error)?;
                continue;
            }

            if !self.mode.is_summary() {
                rows.push(StatementRow::from_transaction(&transaction));
            }
        }

        debug!(
            matches = totals.match_count,
            total_debit = %totals.total_debit,
            total_credit = %totals.total_credit,
            "statement processed"
        );

        if totals.match_count == 0 {
            return Err(StatementError::NoMatch);
        }

        let report = match self.mode {
            OutputMode::DebitOnly => Report::Summary(format_amount(totals.total_debit)),
            OutputMode::CreditOnly => Report::Summary(format_amount(totals.total_credit)),
            OutputMode::NetOnly => Report::Summary(format_amount(totals.net_magnitude())),
            OutputMode::Tabular => Report::Table {
                rows,
                footer: StatementRow::footer(&totals),
            },
        };

        Ok(PipelineOutput { totals, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::parse_filter_date;
    use rstest::rstest;
    use rust_decimal::Decimal;

    const STATEMENT: &str = "\
Date,Narration,Value Dat,Debit Amount,Credit Amount,Chq/Ref Number,Closing Balance
01/03/23,AMAZON PURCHASE,01/03/23,150.00,0.00,0001,9850.00
05/03/23,NEFT CR-SALARY ACME CORP,05/03/23,0.00,50000.00,0002,59850.00
05/03/23,UPI-SWIGGY,05/03/23,320.50,0.00,0003,59529.50
10/03/23,AMAZON REFUND,10/03/23,0.00,150.00,0004,59679.50
";

    fn run(
        input: &str,
        criteria: &FilterCriteria,
        mode: OutputMode,
    ) -> (Result<PipelineOutput, StatementError>, String) {
        let mut diagnostics = Vec::new();
        let result = StatementPipeline::new(criteria, mode).run(input.as_bytes(), &mut diagnostics);
        (result, String::from_utf8(diagnostics).unwrap())
    }

    fn no_filters() -> FilterCriteria {
        FilterCriteria::builder().build().unwrap()
    }

    #[test]
    fn test_amazon_scenario() {
        let criteria = FilterCriteria::builder().include("AMAZON").build().unwrap();
        let (result, diagnostics) = run(
            "05/03/23, AMAZON PURCHASE, x, 150.00, 0.00, y\n",
            &criteria,
            OutputMode::Tabular,
        );

        let output = result.unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(output.totals.match_count, 1);
        assert_eq!(output.totals.total_debit, Decimal::new(15000, 2));
        assert_eq!(output.totals.total_credit, Decimal::ZERO);
        assert_eq!(
            output.report,
            Report::Table {
                rows: vec![StatementRow {
                    date: "05/03/2023".to_string(),
                    description: "AMAZON PURCHASE".to_string(),
                    debit: "150.00".to_string(),
                    credit: "0.00".to_string(),
                }],
                footer: StatementRow {
                    date: "NET".to_string(),
                    description: "-150.00".to_string(),
                    debit: "150.00".to_string(),
                    credit: "0.00".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_tabular_rows_truncate_description() {
        let (result, _) = run(STATEMENT, &no_filters(), OutputMode::Tabular);

        let Report::Table { rows, footer } = result.unwrap().report else {
            panic!("expected a table report");
        };
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].description, "NEFT CR-SALARY ");
        assert_eq!(rows[2].description, "UPI-SWIGGY");
        assert_eq!(footer.description, "+49679.50");
        assert_eq!(footer.debit, "470.50");
        assert_eq!(footer.credit, "50150.00");
    }

    #[rstest]
    #[case::debit(OutputMode::DebitOnly, "470.50")]
    #[case::credit(OutputMode::CreditOnly, "50150.00")]
    #[case::net(OutputMode::NetOnly, "49679.50")]
    fn test_summary_modes(#[case] mode: OutputMode, #[case] expected: &str) {
        let (result, _) = run(STATEMENT, &no_filters(), mode);

        let output = result.unwrap();
        assert_eq!(output.totals.match_count, 4);
        assert_eq!(output.report, Report::Summary(expected.to_string()));
    }

    #[test]
    fn test_header_and_blank_lines_are_skipped() {
        let body = "01/03/23,A,x,1.00,0.00,y\n02/03/23,B,x,0.00,2.00,y\n";
        let with_preamble = format!("\n\nDate,Narration,x,Debit,Credit,y\n{}", body);

        let (plain, plain_diag) = run(body, &no_filters(), OutputMode::Tabular);
        let (wrapped, wrapped_diag) = run(&with_preamble, &no_filters(), OutputMode::Tabular);

        assert_eq!(plain.unwrap(), wrapped.unwrap());
        assert!(plain_diag.is_empty());
        assert!(wrapped_diag.is_empty());
    }

    #[test]
    fn test_header_is_only_skipped_before_data() {
        let input = "01/03/23,A,x,1.00,0.00,y\nDate,Narration,x,Debit,Credit,y\n";
        let (result, diagnostics) = run(input, &no_filters(), OutputMode::DebitOnly);

        assert_eq!(result.unwrap().totals.match_count, 1);
        assert_eq!(diagnostics, "Line 2: Invalid date 'Date'\n");
    }

    #[test]
    fn test_blank_lines_after_data_are_reported() {
        let input = "01/03/23,A,x,1.00,0.00,y\n\n02/03/23,B,x,2.00,0.00,y\n";
        let (result, diagnostics) = run(input, &no_filters(), OutputMode::DebitOnly);

        assert_eq!(result.unwrap().report, Report::Summary("3.00".to_string()));
        assert_eq!(
            diagnostics,
            "Line 2: Malformed record: expected at least 6 fields, found 1\n"
        );
    }

    #[test]
    fn test_parse_errors_are_reported_and_skipped() {
        let input = "\
Date,Narration,x,Debit,Credit,y
01/03/23,A,x,1.00,0.00,y
garbage
32/03/23,B,x,1.00,0.00,y
03/03/23,C,x,abc,0.00,y
04/03/23,D,x,4.00,0.00,y
";
        let (result, diagnostics) = run(input, &no_filters(), OutputMode::DebitOnly);

        let output = result.unwrap();
        assert_eq!(output.totals.match_count, 2);
        assert_eq!(output.report, Report::Summary("5.00".to_string()));
        assert_eq!(
            diagnostics,
            "Line 3: Malformed record: expected at least 6 fields, found 1\n\
             Line 4: Invalid date '32/03/23'\n\
             Line 5: Invalid debit amount 'abc'\n"
        );
    }

    #[test]
    fn test_overflowing_amount_is_reported_and_skipped() {
        let input = "\
01/03/23,A,x,79228162514264337593543950335,0.00,y
02/03/23,B,x,1,0.00,y
03/03/23,C,x,0.00,2.50,y
";
        let (result, diagnostics) = run(input, &no_filters(), OutputMode::CreditOnly);

        let output = result.unwrap();
        assert_eq!(output.totals.match_count, 2);
        assert_eq!(output.totals.total_debit, Decimal::MAX);
        assert_eq!(output.report, Report::Summary("2.50".to_string()));
        assert_eq!(
            diagnostics,
            "Line 2: debit amount 1 overflows the running totals\n"
        );
    }

    #[test]
    fn test_filters_apply_before_aggregation() {
        let criteria = FilterCriteria::builder()
            .exclude("refund")
            .from(parse_filter_date("from", "01/03/2023").unwrap())
            .to(parse_filter_date("to", "05/03/2023").unwrap())
            .build()
            .unwrap();
        let (result, _) = run(STATEMENT, &criteria, OutputMode::Tabular);

        let output = result.unwrap();
        assert_eq!(output.totals.match_count, 3);
        assert_eq!(output.totals.total_debit, Decimal::new(47050, 2));
        assert_eq!(output.totals.total_credit, Decimal::new(5000000, 2));
    }

    #[test]
    fn test_no_match_is_an_error() {
        let criteria = FilterCriteria::builder().include("FLIPKART").build().unwrap();
        let (result, _) = run(STATEMENT, &criteria, OutputMode::Tabular);

        assert_eq!(result.unwrap_err(), StatementError::NoMatch);
    }

    #[rstest]
    #[case::empty_input("")]
    #[case::header_only("Date,Narration,x,Debit,Credit,y\n")]
    #[case::only_bad_lines("bad line\nanother\n")]
    fn test_nothing_to_report_is_no_match(#[case] input: &str) {
        let (result, _) = run(input, &no_filters(), OutputMode::Tabular);
        assert_eq!(result.unwrap_err(), StatementError::NoMatch);
    }

    #[test]
    fn test_summary_mode_collects_no_rows() {
        let (result, _) = run(STATEMENT, &no_filters(), OutputMode::NetOnly);
        assert!(matches!(result.unwrap().report, Report::Summary(_)));
    }
}
