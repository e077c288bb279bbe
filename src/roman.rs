/// The evaluator computes the value of a well formed numeral.
///
/// It walks the symbols once from left to right, handles subtractive pairs
/// and rejects numerically impossible neighbours such as `IM`.
pub mod evaluator;
/// The lexer turns a numeral into Roman symbols.
///
/// # Responsibilities
/// - Defines the seven symbols and the magnitude of each.
/// - Reports the first character outside the alphabet.
pub mod lexer;
/// The parser ties validation and computation together and applies the
/// vinculum.
pub mod parser;
/// Syntactic rules a numeral must obey, as standalone predicates.
pub mod rules;
/// Form validation against the syntactic rules.
pub mod validator;
/// The result type shared by every stage.
pub mod value;
