/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, resolves trains into composed functions by
/// the arities of their tines, applies modifiers, assembles literals and
/// manages the binding environment.
///
/// # Responsibilities
/// - Evaluates AST nodes into values.
/// - Resolves trains into forks and atops.
/// - Reports runtime errors such as shape mismatches or malformed trains.
pub mod evaluator;
/// The glyph table.
///
/// A static registry of every glyph: its symbol, ASCII alias, human name,
/// syntactic category and executable definition. Lexing, parsing, evaluation
/// and highlighting all read from it.
pub mod glyph;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for literals,
/// identifiers, glyphs, punctuation, whitespace and comments. ASCII aliases
/// and negative-number notation are normalized here.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, canonical
///   image and source line.
/// - Resolves glyph aliases against the glyph table.
/// - Reports lexical errors for unknown input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the significant tokens. Trains are kept
/// unresolved; their meaning depends on runtime arities.
///
/// # Responsibilities
/// - Converts tokens into AST nodes: literals, glyphs, modifier applications,
///   strands, trains and bindings.
/// - Validates bracket structure, reporting errors with line numbers.
/// - Bounds nesting depth.
pub mod parser;
/// The primitive library.
///
/// Implements every primitive function and modifier named in the glyph table,
/// including pervasive arithmetic, comparisons and structural operations.
pub mod primitive;
/// The value module defines the runtime data types for evaluation.
///
/// Declares numbers, characters, shape-checked arrays and first-class
/// function descriptors, with display formatting.
pub mod value;
