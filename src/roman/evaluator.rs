use tracing::debug;

use crate::roman::{
    lexer::{Symbol, tokenize},
    rules::{CHARACTERS_RULE, COMPUTATION_RULE},
    value::ParseResult,
};

/// Largest ratio allowed between a symbol and the one before it.
const MAX_STEP_RATIO: i64 = 10;

/// Computes the value of a numeral, ignoring any vinculum.
///
/// The numeral is read once from left to right. A symbol greater than the one
/// before it forms a subtractive pair: the previous symbol was already added,
/// so `current - 2 * previous` is added to net `current - previous`.
///
/// The form of the numeral is expected to have been checked by
/// [`validate`](crate::validate). Two problems are still reported here:
/// - a symbol more than ten times the previous one (`IM`, `XD`) stops the
///   computation with an invalid result naming the pair;
/// - a character outside the alphabet yields the character rule.
///
/// # Example
/// ```
/// use vinculum::compute_without_vinculum;
///
/// assert_eq!(compute_without_vinculum("XXIX").value(), Some(29));
/// assert_eq!(compute_without_vinculum("CXVII").value(), Some(117));
///
/// let result = compute_without_vinculum("IM");
/// assert!(!result.is_valid());
/// assert!(result.invalidity_reason().unwrap().ends_with("IM"));
/// ```
#[must_use]
pub fn compute_without_vinculum(numeral: &str) -> ParseResult {
    let symbols = match tokenize(numeral) {
        Ok(symbols) => symbols,
        Err(unknown) => {
            debug!(numeral, symbol = %unknown.text, offset = unknown.offset, "unknown symbol");
            return ParseResult::invalid(CHARACTERS_RULE);
        },
    };

    let mut total = 0;
    let mut previous: Option<Symbol> = None;

    for current in symbols {
        let value = current.value();
        match previous {
            Some(prev) if value > MAX_STEP_RATIO * prev.value() => {
                debug!(numeral, "impossible symbol order");
                return ParseResult::invalid(format!("{COMPUTATION_RULE}{}{}",
                                                    prev.as_char(),
                                                    current.as_char()));
            },
            Some(prev) if value > prev.value() => total += value - 2 * prev.value(),
            _ => total += value,
        }
        previous = Some(current);
    }

    ParseResult::valid(total)
}
