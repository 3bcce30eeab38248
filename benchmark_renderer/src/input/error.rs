//!
//! Benchmark input reading error.
//!

use crate::input::line::Error as LineError;

///
/// Benchmark input reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading from the input stream.
    #[error("Reading benchmark input: {error}")]
    Reading {
        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },
    /// Error parsing a benchmark line.
    #[error("Parsing benchmark line {line_number} `{line}`: {reason}")]
    Parsing {
        /// The 1-based line number in the input stream.
        line_number: usize,
        /// The offending line.
        line: String,
        /// Why the line could not be parsed.
        #[source]
        reason: LineError,
    },
}
