/// Lexing errors.
///
/// Raised when the source text contains a character sequence that no token
/// pattern accepts, or when a glyph alias or glyph symbol is unknown.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token sequence: unexpected tokens, unmatched or empty brackets, trailing
/// separators, missing modifier operands and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, shape mismatches, out of bounds indices and
/// malformed trains.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
