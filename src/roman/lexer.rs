use logos::Logos;

/// A single Roman symbol.
///
/// The seven classical symbols are the only tokens the lexer recognizes. Any
/// other character, lowercase letters included, is a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `I`
    #[token("I")]
    I,
    /// `V`
    #[token("V")]
    V,
    /// `X`
    #[token("X")]
    X,
    /// `L`
    #[token("L")]
    L,
    /// `C`
    #[token("C")]
    C,
    /// `D`
    #[token("D")]
    D,
    /// `M`
    #[token("M")]
    M,
}

impl Symbol {
    /// Returns the magnitude of the symbol.
    ///
    /// # Example
    /// ```
    /// use vinculum::roman::lexer::Symbol;
    ///
    /// assert_eq!(Symbol::I.value(), 1);
    /// assert_eq!(Symbol::D.value(), 500);
    /// assert_eq!(Symbol::M.value(), 1000);
    /// ```
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    /// Returns the character this symbol is written with.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }
}

/// A character outside the Roman alphabet, found while tokenizing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownSymbol {
    /// The offending text.
    pub text:   String,
    /// Byte offset of the offending text in the numeral.
    pub offset: usize,
}

/// Splits a numeral into its symbols.
///
/// # Errors
/// Returns the first run of text that is not a Roman symbol.
///
/// # Example
/// ```
/// use vinculum::roman::lexer::{Symbol, tokenize};
///
/// assert_eq!(tokenize("XIV").unwrap(), vec![Symbol::X, Symbol::I, Symbol::V]);
/// assert!(tokenize("X4").is_err());
/// assert!(tokenize("").unwrap().is_empty());
/// ```
pub fn tokenize(numeral: &str) -> Result<Vec<Symbol>, UnknownSymbol> {
    let mut symbols = Vec::with_capacity(numeral.len());
    let mut lexer = Symbol::lexer(numeral);

    while let Some(token) = lexer.next() {
        if let Ok(symbol) = token {
            symbols.push(symbol);
        } else {
            return Err(UnknownSymbol { text:   lexer.slice().to_string(),
                                       offset: lexer.span().start, });
        }
    }

    Ok(symbols)
}
