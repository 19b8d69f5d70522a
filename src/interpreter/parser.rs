/// Parser state and expression-level grammar.
///
/// Defines the parser result type, the nesting depth guard, the entry points
/// and the train and strand rules.
pub mod core;

/// Primaries, modifier-expressions and bracketed literals.
pub mod primary;

/// Programs, statements and bindings.
pub mod statement;

/// Helpers shared by the grammar rules: token peeking, error construction,
/// glyph resolution and literal unescaping.
pub mod utils;
