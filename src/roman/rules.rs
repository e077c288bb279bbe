use crate::roman::lexer::{Symbol, tokenize};

/// Reason reported when a numeral uses a character outside the alphabet or one
/// of the forbidden pairs.
pub const CHARACTERS_RULE: &str = "The Roman numerals should contain only these characters :  (I, \
                                   V, X, L, C, D, M) and (VX, LC, DM) are forbidden combinations";
/// Reason reported when a numeral is four or more repetitions of `I`, `X`,
/// `C` or `M`.
pub const THREE_CONSECUTIVE_REPETITION_RULE: &str = "The Roman numerals can not have more than 3 \
                                                     consecutive repetitions of these characters \
                                                     : (I, X, C, M)";
/// Reason reported when `V`, `L` or `D` are repeated.
pub const NO_REPETITION_RULE: &str = "The Roman numerals can not have more than 1 repetition on \
                                      these characters : (V, L, D)";
/// Prefix of the reason reported when two adjacent symbols are numerically
/// impossible. The two symbols are appended to it.
pub const COMPUTATION_RULE: &str = "The Roman numerals can not have these two symbols in this \
                                    order : ";

/// Adjacent pairs that never appear in a numeral.
const FORBIDDEN_PAIRS: [(Symbol, Symbol); 3] =
    [(Symbol::V, Symbol::X), (Symbol::L, Symbol::C), (Symbol::D, Symbol::M)];

/// A syntactic rule, in the order its violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Only `I V X L C D M`, and never `VX`, `LC` or `DM`.
    Characters,
    /// No more than three consecutive `I`, `X`, `C` or `M`.
    ThreeConsecutiveRepetition,
    /// No repetition of `V`, `L` or `D`.
    NoRepetition,
}

impl Rule {
    /// All rules, in reporting order.
    pub const ALL: [Self; 3] =
        [Self::Characters, Self::ThreeConsecutiveRepetition, Self::NoRepetition];

    /// Human readable description of the rule.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Characters => CHARACTERS_RULE,
            Self::ThreeConsecutiveRepetition => THREE_CONSECUTIVE_REPETITION_RULE,
            Self::NoRepetition => NO_REPETITION_RULE,
        }
    }

    /// Returns `true` when `numeral` breaks this rule.
    #[must_use]
    pub fn is_violated_by(self, numeral: &str) -> bool {
        match self {
            Self::Characters => violates_characters(numeral),
            Self::ThreeConsecutiveRepetition => is_long_repetition(numeral),
            Self::NoRepetition => has_repeated_non_repeatable(numeral),
        }
    }
}

/// Returns `true` if the numeral contains a character outside the alphabet or
/// one of the pairs `VX`, `LC`, `DM` anywhere.
///
/// # Example
/// ```
/// use vinculum::roman::rules::violates_characters;
///
/// assert!(violates_characters("VX"));
/// assert!(violates_characters("MDM"));
/// assert!(violates_characters("x"));
/// assert!(!violates_characters("MCMXCIV"));
/// ```
#[must_use]
pub fn violates_characters(numeral: &str) -> bool {
    tokenize(numeral).map_or(true, |symbols| {
                         symbols.windows(2)
                                .any(|pair| FORBIDDEN_PAIRS.contains(&(pair[0], pair[1])))
                     })
}

/// Returns `true` if the whole numeral is four or more repetitions of a single
/// `I`, `X`, `C` or `M`.
///
/// Only numerals made entirely of the run are caught: `IIII` is, `VIIII` and
/// `XIIII` are not. This is a known limitation of the rule.
///
/// # Example
/// ```
/// use vinculum::roman::rules::is_long_repetition;
///
/// assert!(is_long_repetition("IIII"));
/// assert!(is_long_repetition("MMMMM"));
/// assert!(!is_long_repetition("III"));
/// assert!(!is_long_repetition("XIIII"));
/// ```
#[must_use]
pub fn is_long_repetition(numeral: &str) -> bool {
    let mut chars = numeral.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    matches!(first, 'I' | 'X' | 'C' | 'M')
    && chars.all(|c| c == first)
    && numeral.len() >= 4
}

/// Returns `true` if the numeral has the shape `[IXCM]*[VLD]{2,}[IXCM]*`: a
/// single run of two or more `V`, `L`, `D` surrounded only by repeatable
/// symbols.
///
/// Any mix of the three counts as a run, so ordinary numerals such as `XLV`
/// and `DL` are rejected too. This is a known limitation of the rule.
///
/// # Example
/// ```
/// use vinculum::roman::rules::has_repeated_non_repeatable;
///
/// assert!(has_repeated_non_repeatable("VV"));
/// assert!(has_repeated_non_repeatable("XLLI"));
/// assert!(has_repeated_non_repeatable("XLV"));
/// assert!(!has_repeated_non_repeatable("VIV"));
/// ```
#[must_use]
pub fn has_repeated_non_repeatable(numeral: &str) -> bool {
    let is_repeatable = |&c: &char| matches!(c, 'I' | 'X' | 'C' | 'M');
    let is_non_repeatable = |&c: &char| matches!(c, 'V' | 'L' | 'D');

    let mut chars = numeral.chars().peekable();
    while chars.next_if(is_repeatable).is_some() {}

    let mut run = 0;
    while chars.next_if(is_non_repeatable).is_some() {
        run += 1;
    }

    run >= 2 && chars.all(|c| is_repeatable(&c))
}

/// Collects every rule `numeral` violates, in reporting order.
#[must_use]
pub fn violated_rules(numeral: &str) -> Vec<Rule> {
    Rule::ALL.into_iter()
             .filter(|rule| rule.is_violated_by(numeral))
             .collect()
}
