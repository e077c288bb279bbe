//! # vinculum
//!
//! vinculum validates Roman numerals and computes their integer value.
//! It supports the vinculum notation, where a line drawn above a numeral
//! multiplies it by a thousand.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Reads numerals from line oriented text.
///
/// Each non blank line is one request, `NUMERAL` or `VINCULUM|NUMERAL`, and
/// lines starting with `//` are comments. Malformed lines are reported with
/// their line number.
pub mod batch;
/// Provides the error type for requests that cannot be read.
///
/// Rule violations are not errors: they are reported as invalid
/// [`ParseResult`]s. This module only covers the hard failures, such as a
/// missing numeral or an unreadable file.
pub mod error;
/// Validation and computation of Roman numerals.
///
/// # Responsibilities
/// - Splits a numeral into symbols and maps each to its magnitude.
/// - Checks the syntactic rules and reports every violation.
/// - Computes values, including subtractive pairs and the vinculum.
pub mod roman;

pub use roman::{
    evaluator::compute_without_vinculum,
    parser::parse,
    validator::validate,
    value::{ParseResult, Validity},
};
