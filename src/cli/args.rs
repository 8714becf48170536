use crate::core::filter::parse_filter_date;
use crate::core::{FilterCriteria, OutputMode, RunConfig};
use crate::io::InputSource;
use crate::types::ConfigError;
use clap::Parser;

/// Display info from an HDFC statement export
#[derive(Parser, Debug)]
#[command(name = "hdfc-st")]
#[command(about = "Display info from an HDFC statement CSV file", long_about = None)]
pub struct CliArgs {
    /// Statement file path, or '-' for standard input
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Statement text file | - for stdin"
    )]
    pub file: String,

    /// Descriptions to match (comma-separated, repeatable)
    #[arg(
        short = 'd',
        long = "desc",
        value_name = "TEXT",
        help = "Descriptions to match"
    )]
    pub descriptions: Vec<String>,

    /// Descriptions to exclude (comma-separated, repeatable)
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "TEXT",
        help = "Descriptions to exclude"
    )]
    pub exclude: Vec<String>,

    /// Only transactions on this date
    #[arg(
        long = "on",
        value_name = "DD/MM/YYYY",
        help = "Transactions on specified date"
    )]
    pub on: Option<String>,

    /// Only transactions on or after this date
    #[arg(
        long = "from",
        value_name = "DD/MM/YYYY",
        help = "Transactions from specified date"
    )]
    pub from: Option<String>,

    /// Only transactions on or before this date
    #[arg(
        long = "to",
        value_name = "DD/MM/YYYY",
        help = "Transactions till specified date"
    )]
    pub to: Option<String>,

    /// Print only the total debit
    #[arg(long = "deb", help = "Print debits")]
    pub debit: bool,

    /// Print only the total credit
    #[arg(long = "cred", help = "Print credits")]
    pub credit: bool,

    /// Print only the absolute net amount
    #[arg(long = "net", help = "Print net")]
    pub net: bool,
}

impl CliArgs {
    /// Create a validated RunConfig from CLI arguments
    ///
    /// Filter dates are parsed and the complete criteria validated here, so a
    /// bad combination is reported before the input is opened.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidFilterDate` for a date not in `DD/MM/YYYY` form
    /// - `ConfigError::ConflictingDateFilters` for `--on` with `--from`/`--to`
    pub fn to_run_config(&self) -> Result<RunConfig, ConfigError> {
        let mut builder = FilterCriteria::builder();

        for descriptions in &self.descriptions {
            builder = builder.include(descriptions);
        }
        for descriptions in &self.exclude {
            builder = builder.exclude(descriptions);
        }
        if let Some(value) = &self.on {
            builder = builder.on(parse_filter_date("on", value)?);
        }
        if let Some(value) = &self.from {
            builder = builder.from(parse_filter_date("from", value)?);
        }
        if let Some(value) = &self.to {
            builder = builder.to(parse_filter_date("to", value)?);
        }

        Ok(RunConfig {
            input: InputSource::from_arg(&self.file),
            criteria: builder.build()?,
            mode: OutputMode::from_flags(self.debit, self.credit, self.net),
        })
    }
}
