use std::fmt;

use serde::Serialize;

/// Outcome of classifying a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// The numeral is well formed and has a value.
    Valid,
    /// The numeral breaks at least one rule.
    Invalid,
    /// Not classified yet.
    #[default]
    Undetermined,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// The result of validating, computing or parsing a numeral.
///
/// A `ParseResult` is immutable. It carries a value only when valid and a
/// reason only when invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    value:             Option<i64>,
    validity:          Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalidity_reason: Option<String>,
}

impl ParseResult {
    /// A valid result holding `value`.
    #[must_use]
    pub const fn valid(value: i64) -> Self {
        Self { value:             Some(value),
               validity:          Validity::Valid,
               invalidity_reason: None, }
    }

    /// An invalid result explained by `reason`.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self { value:             None,
               validity:          Validity::Invalid,
               invalidity_reason: Some(reason.into()), }
    }

    /// Starts building a result whose validity is `Undetermined` until told
    /// otherwise.
    #[must_use]
    pub fn builder() -> ParseResultBuilder {
        ParseResultBuilder::default()
    }

    /// The computed value; `None` unless the result is valid.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        self.value
    }

    /// How the numeral was classified.
    #[must_use]
    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Shorthand for `validity() == Validity::Valid`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.validity, Validity::Valid)
    }

    /// Every violated rule, comma separated; `None` unless the result is
    /// invalid.
    #[must_use]
    pub fn invalidity_reason(&self) -> Option<&str> {
        self.invalidity_reason.as_deref()
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseResult(validity={}", self.validity)?;
        if let Some(value) = self.value {
            write!(f, ", value={value}")?;
        }
        if let Some(reason) = &self.invalidity_reason {
            write!(f, ", reason=\"{reason}\"")?;
        }
        write!(f, ")")
    }
}

/// Builder for [`ParseResult`].
///
/// The value is only kept for a `Valid` result and the reason only for an
/// `Invalid` one. A `Valid` result without a value or an `Invalid` one without
/// a reason is built as `Undetermined`.
///
/// # Example
/// ```
/// use vinculum::{ParseResult, Validity};
///
/// let result = ParseResult::builder().value(29).validity(Validity::Valid).build();
/// assert_eq!(result, ParseResult::valid(29));
///
/// let pending = ParseResult::builder().value(29).build();
/// assert_eq!(pending.validity(), Validity::Undetermined);
/// assert_eq!(pending.value(), None);
///
/// let unexplained = ParseResult::builder().validity(Validity::Invalid).build();
/// assert_eq!(unexplained.validity(), Validity::Undetermined);
/// ```
#[derive(Debug, Default)]
pub struct ParseResultBuilder {
    value:             Option<i64>,
    validity:          Validity,
    invalidity_reason: Option<String>,
}

impl ParseResultBuilder {
    /// Sets the computed value.
    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the outcome.
    #[must_use]
    pub fn validity(mut self, validity: Validity) -> Self {
        self.validity = validity;
        self
    }

    /// Sets the reason reported for an invalid result.
    #[must_use]
    pub fn invalidity_reason(mut self, reason: impl Into<String>) -> Self {
        self.invalidity_reason = Some(reason.into());
        self
    }

    /// Builds the result, falling back to `Undetermined` when the outcome
    /// lacks what it needs.
    #[must_use]
    pub fn build(self) -> ParseResult {
        match (self.validity, self.value, self.invalidity_reason) {
            (Validity::Valid, Some(value), _) => ParseResult::valid(value),
            (Validity::Invalid, _, Some(reason)) => ParseResult::invalid(reason),
            _ => ParseResult { value:             None,
                               validity:          Validity::Undetermined,
                               invalidity_reason: None, },
        }
    }
}
