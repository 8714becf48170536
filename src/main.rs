//! HDFC statement CLI
//!
//! Summarizes a bank statement export: filters transactions by description and
//! date, then prints them as a table with a NET footer or prints a single total.
//!
//! # Usage
//!
//! ```bash
//! hdfc-st -f statement.txt
//! hdfc-st -f statement.txt -d amazon,swiggy -x refund
//! hdfc-st -f statement.txt --from 01/03/2023 --to 31/03/2023 --deb
//! cat statement.txt | hdfc-st -f - --on 05/03/2023
//! ```
//!
//! Unparseable lines are reported on stderr and skipped. Set `RUST_LOG=debug`
//! for processing logs.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (conflicting filters, unreadable input, no matching transaction)

use hdfc_statement::{cli, runner};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    // Validate the complete configuration before touching the input
    let config = match args.to_run_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout();
    let mut diagnostics = std::io::stderr();
    if let Err(e) = runner::run(&config, &mut output, &mut diagnostics) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
