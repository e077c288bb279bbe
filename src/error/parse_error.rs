use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents the requests that cannot be parsed at all.
///
/// A numeral breaking a rule is not an error; it yields an invalid
/// [`ParseResult`](crate::ParseResult).
pub enum ParseError {
    /// No numeral was given.
    #[error("Error on line {line}: A numeral is required.")]
    MissingNumeral {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A vinculum was given on the command line without a numeral.
    #[error("A numeral is required when a vinculum is given.")]
    NumeralRequired,
    /// `--file` was given without a path.
    #[error("A file path is required with --file.")]
    FileRequired,
    /// A vinculum separator was given without a numeral before it.
    #[error("Error on line {line}: Expected a numeral before '|' but none found.")]
    MissingVinculum {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line held more than one vinculum separator.
    #[error("Error on line {line}: Only one '|' is allowed, found {count}.")]
    TooManySeparators {
        /// The number of separators found.
        count: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input file could not be read.
    #[error("Failed to read the input file '{}'. Perhaps this file does not exist?", .path.display())]
    Io {
        /// The file that was requested.
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}
