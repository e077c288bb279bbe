use tracing::debug;

use crate::roman::{rules::violated_rules, value::ParseResult};

/// Checks the form of a numeral against the syntactic rules.
///
/// Every rule is checked independently. When at least one is violated, the
/// reasons are joined with `", "` in rule order.
///
/// # Returns
/// - `None`: No rule is violated, the numeral can be computed.
/// - `Some(ParseResult)`: An invalid result describing every violation.
///
/// # Example
/// ```
/// use vinculum::{
///     roman::rules::{NO_REPETITION_RULE, THREE_CONSECUTIVE_REPETITION_RULE},
///     validate,
/// };
///
/// assert!(validate("XXIX").is_none());
///
/// let result = validate("IIII").unwrap();
/// assert!(!result.is_valid());
/// assert_eq!(result.invalidity_reason(), Some(THREE_CONSECUTIVE_REPETITION_RULE));
///
/// let result = validate("VV").unwrap();
/// assert_eq!(result.invalidity_reason(), Some(NO_REPETITION_RULE));
/// ```
#[must_use]
pub fn validate(numeral: &str) -> Option<ParseResult> {
    debug!(numeral, "form validation");

    let reasons = violated_rules(numeral).into_iter()
                                         .map(|rule| rule.reason())
                                         .collect::<Vec<_>>();

    if reasons.is_empty() {
        return None;
    }

    debug!(numeral, violations = reasons.len(), "form validation failed");
    Some(ParseResult::invalid(reasons.join(", ")))
}
