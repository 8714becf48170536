//! I/O module
//!
//! Handles statement input and report output.
//!
//! # Components
//!
//! - `input` - Input source selection (file or stdin)
//! - `statement_reader` - Line-by-line reader with line numbers
//! - `statement_format` - Column layout, date expansion, amount display
//! - `report_output` - Summary and table rendering

pub mod input;
pub mod report_output;
pub mod statement_format;
pub mod statement_reader;

pub use input::InputSource;
pub use report_output::write_report;
pub use statement_format::{parse_line, DESCRIPTION_MAX_LEN};
pub use statement_reader::StatementReader;
