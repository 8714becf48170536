//! Streaming reader over statement lines
//!
//! Yields every physical line of the input, blank lines included, together
//! with its 1-based line number. Bytes that are not valid UTF-8 are replaced
//! rather than rejected so one badly encoded narration does not hide the rest
//! of the line from the parser.
//!
//! # Error Handling
//!
//! I/O failures on the underlying stream are fatal and yielded once as
//! [`StatementError::Io`]; iteration stops afterwards.

use crate::types::StatementError;
use std::io::BufRead;

/// Text that marks the column header line
pub const HEADER_MARKER: &str = "Date";

/// One line read from the statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    /// 1-based line number in the input
    pub number: u64,
    /// Line content without the line terminator
    pub text: String,
}

impl StatementLine {
    /// True for empty or whitespace-only lines
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// True when the line contains the column header marker
    pub fn is_header(&self) -> bool {
        self.text.contains(HEADER_MARKER)
    }
}

/// Line-by-line statement reader
///
/// # Examples
///
/// ```
/// use hdfc_statement::io::statement_reader::StatementReader;
///
/// let input = "Date,Narration,Value Dt,Debit,Credit,Ref\n05/03/23,A,x,1.00,0.00,y\n";
/// let reader = StatementReader::new(input.as_bytes());
/// let lines: Vec<_> = reader.filter_map(Result::ok).collect();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].is_header());
/// ```
#[derive(Debug)]
pub struct StatementReader<R: BufRead> {
    input: R,
    buffer: Vec<u8>,
    line_num: u64,
    done: bool,
}

impl<R: BufRead> StatementReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: Vec::with_capacity(256),
            line_num: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for StatementReader<R> {
    type Item = Result<StatementLine, StatementError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buffer.clear();
        match self.input.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_num += 1;
                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                }
                if self.buffer.last() == Some(&b'\r') {
                    self.buffer.pop();
                }
                Some(Ok(StatementLine {
                    number: self.line_num,
                    text: String::from_utf8_lossy(&self.buffer).into_owned(),
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(StatementError::from(e)))
            }
        }
    }
}
