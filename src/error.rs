/// Errors raised when a request cannot be read.
///
/// Defines the failures that happen before any numeral is looked at: a missing
/// numeral, a malformed batch line or an unreadable input file.
pub mod parse_error;

pub use parse_error::ParseError;
