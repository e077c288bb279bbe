use tracing::debug;

use crate::{
    error::ParseError,
    roman::{parser::parse, value::ParseResult},
};

/// Separates the numeral carrying the vinculum from the plain numeral.
pub const VINCULUM_SEPARATOR: char = '|';
/// Starts a comment running to the end of the line.
pub const COMMENT_PREFIX: &str = "//";

/// One parsed request of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The source line of the request, starting at 1.
    pub line:     usize,
    /// The plain numeral.
    pub numeral:  String,
    /// The numeral carrying the vinculum, if any.
    pub vinculum: Option<String>,
    /// The outcome of parsing the request.
    pub result:   ParseResult,
}

/// A request read from one line, before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    /// The plain numeral, never empty.
    pub numeral:  &'a str,
    /// The numeral written before the separator, never empty when present.
    pub vinculum: Option<&'a str>,
}

/// Reads a single request line.
///
/// A line is either `NUMERAL` or `VINCULUM|NUMERAL`, the vinculum written first
/// as it counts in thousands. Surrounding whitespace is ignored.
///
/// # Returns
/// - `Ok(None)`: The line is blank or a comment.
/// - `Ok(Some(Request))`: The request on this line.
///
/// # Errors
/// Returns an error when either side of the separator is empty or when more
/// than one separator is present.
///
/// # Example
/// ```
/// use vinculum::batch::{Request, read_request};
///
/// assert_eq!(read_request("CXVII|XXIX", 1).unwrap(),
///            Some(Request { numeral: "XXIX", vinculum: Some("CXVII") }));
/// assert_eq!(read_request("  // comment", 2).unwrap(), None);
/// assert!(read_request("CXVII|", 3).is_err());
/// ```
pub fn read_request(text: &str, line: usize) -> Result<Option<Request<'_>>, ParseError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let count = text.matches(VINCULUM_SEPARATOR).count();
    if count > 1 {
        return Err(ParseError::TooManySeparators { count, line });
    }

    let (vinculum, numeral) = match text.split_once(VINCULUM_SEPARATOR) {
        Some((vinculum, numeral)) => (Some(vinculum.trim()), numeral.trim()),
        None => (None, text),
    };

    if numeral.is_empty() {
        return Err(ParseError::MissingNumeral { line });
    }
    if vinculum.is_some_and(str::is_empty) {
        return Err(ParseError::MissingVinculum { line });
    }

    Ok(Some(Request { numeral, vinculum }))
}

/// Parses every request of a batch source, one per line.
///
/// Blank lines and lines starting with `//` are skipped.
///
/// # Errors
/// Returns the first malformed line. Numerals breaking a rule are not errors;
/// they are reported in the [`Entry`] result.
///
/// # Example
/// ```
/// use vinculum::batch::parse_source;
///
/// let entries = parse_source("// sample\nXXIX\nCXVII|XXIX\nIM\n").unwrap();
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[0].result.value(), Some(29));
/// assert_eq!(entries[1].result.value(), Some(117_029));
/// assert_eq!(entries[2].line, 4);
/// assert!(!entries[2].result.is_valid());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Entry>, ParseError> {
    let mut entries = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let Some(request) = read_request(text, line)? else {
            continue;
        };

        debug!(line, "batch request");
        entries.push(Entry { line,
                             numeral: request.numeral.to_string(),
                             vinculum: request.vinculum.map(str::to_string),
                             result: parse(request.numeral, request.vinculum) });
    }

    Ok(entries)
}
