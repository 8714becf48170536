//! Statement input sources
//!
//! A run reads from exactly one source: a file path, or standard input when
//! the path argument is `-`. The opened handle is owned by the caller and
//! closed when it is dropped, on success and error paths alike.

use crate::types::StatementError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Path argument that selects standard input
pub const STDIN_ARG: &str = "-";

/// Where statement lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from standard input
    Stdin,
    /// Read from a file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interpret a command-line path argument
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Open the source for buffered line reading
    ///
    /// # Errors
    ///
    /// Returns `StatementError::InputSource` if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, StatementError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| {
                    StatementError::input_source(&path.display().to_string(), &e)
                })?;
                Ok(Box::new(BufReader::with_capacity(8 * 1024, file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
