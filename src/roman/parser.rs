use tracing::info;

use crate::roman::{
    evaluator::compute_without_vinculum,
    validator::validate,
    value::{ParseResult, Validity},
};

/// Multiplier applied to the numeral carrying the vinculum.
pub const VINCULUM_FACTOR: i64 = 1000;

/// Validates a numeral and, if it is well formed, computes its value.
///
/// `vinculum` is the part of the numeral written with a line above it; its
/// value counts a thousand times. The steps stop at the first failure:
/// 1. the form of `numeral` is validated;
/// 2. the form of `vinculum`, if any, is validated and its failure alone is
///    reported;
/// 3. both parts are computed and combined as `numeral + vinculum * 1000`.
///
/// If a part fails during computation, the combined result is invalid and
/// carries the reason of every failing part, the numeral first.
///
/// # Example
/// ```
/// use vinculum::{compute_without_vinculum, parse};
///
/// assert_eq!(parse("XXIX", Some("CXVII")).value(), Some(117_029));
/// assert_eq!(parse("XXIX", None), compute_without_vinculum("XXIX"));
/// assert!(!parse("VX", Some("CXVII")).is_valid());
/// ```
#[must_use]
pub fn parse(numeral: &str, vinculum: Option<&str>) -> ParseResult {
    info!(numeral, vinculum, "parsing");

    if let Some(invalid) = validate(numeral) {
        return invalid;
    }
    if let Some(invalid) = vinculum.and_then(validate) {
        return invalid;
    }

    let base = compute_without_vinculum(numeral);
    match vinculum {
        None => base,
        Some(vinculum) => combine(&base, &compute_without_vinculum(vinculum)),
    }
}

/// Combines the value of the plain part with the part under the vinculum.
fn combine(base: &ParseResult, vinculum: &ParseResult) -> ParseResult {
    if let (Some(base), Some(vinculum)) = (base.value(), vinculum.value()) {
        return ParseResult::valid(base + vinculum * VINCULUM_FACTOR);
    }

    let reason = [base, vinculum].iter()
                                 .filter_map(|part| part.invalidity_reason())
                                 .collect::<Vec<_>>()
                                 .join(", ");

    ParseResult::builder().validity(Validity::Invalid)
                          .invalidity_reason(reason)
                          .build()
}
