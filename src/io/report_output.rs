//! Report rendering
//!
//! Summary reports print their single number on one line. Table reports are
//! drawn as an ASCII grid with a `DATE | DESCRIPTION | DEBIT | CREDIT` header,
//! one row per matched transaction and the NET footer as the final row.

use crate::core::pipeline::{Report, StatementRow};
use crate::types::StatementError;
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

/// Column titles of the transaction table
pub const TABLE_HEADER: [&str; 4] = ["DATE", "DESCRIPTION", "DEBIT", "CREDIT"];

/// Write a report to `output`
///
/// # Errors
///
/// Returns `StatementError::Io` if writing fails.
pub fn write_report(report: &Report, output: &mut dyn Write) -> Result<(), StatementError> {
    match report {
        Report::Summary(value) => writeln!(output, "{}", value)?,
        Report::Table { rows, footer } => writeln!(output, "{}", render_table(rows, footer))?,
    }
    output.flush()?;
    Ok(())
}

/// Draw the transaction table
pub fn render_table(rows: &[StatementRow], footer: &StatementRow) -> String {
    let mut builder = Builder::default();
    builder.push_record(TABLE_HEADER);
    for row in rows.iter().chain(std::iter::once(footer)) {
        builder.push_record([
            row.date.as_str(),
            row.description.as_str(),
            row.debit.as_str(),
            row.credit.as_str(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::ascii())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, description: &str, debit: &str, credit: &str) -> StatementRow {
        StatementRow {
            date: date.to_string(),
            description: description.to_string(),
            debit: debit.to_string(),
            credit: credit.to_string(),
        }
    }

    #[test]
    fn test_write_summary() {
        let mut output = Vec::new();
        write_report(&Report::Summary("470.50".to_string()), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "470.50\n");
    }

    #[test]
    fn test_write_table() {
        let report = Report::Table {
            rows: vec![
                row("01/03/2023", "AMAZON PURCHASE", "150.00", "0.00"),
                row("05/03/2023", "NEFT CR-SALARY ", "0.00", "50000.00"),
            ],
            footer: row("NET", "+49850.00", "150.00", "50000.00"),
        };
        let mut output = Vec::new();
        write_report(&report, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("DATE"));
        assert!(lines[1].contains("DESCRIPTION"));
        assert!(text.contains("AMAZON PURCHASE"));
        assert!(text.contains("50000.00"));

        // Footer is the last row of the grid.
        let last_row = lines[lines.len() - 2];
        assert!(last_row.contains("NET"));
        assert!(last_row.contains("+49850.00"));
        assert!(lines[lines.len() - 1].starts_with('+'));
    }

    #[test]
    fn test_render_table_keeps_input_order() {
        let rows = vec![
            row("10/03/2023", "LATER", "1.00", "0.00"),
            row("01/03/2023", "EARLIER", "2.00", "0.00"),
        ];
        let table = render_table(&rows, &row("NET", "-3.00", "3.00", "0.00"));

        let later = table.find("LATER").unwrap();
        let earlier = table.find("EARLIER").unwrap();
        assert!(later < earlier);
    }
}
