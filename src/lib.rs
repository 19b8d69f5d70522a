//! # aplfix
//!
//! aplfix is the language core of a small tacit array language in which every
//! primitive has a fixed arity. It lexes, parses and evaluates source text,
//! resolving juxtaposed functions and values into forks and atops purely by
//! their arities.
//!
//! The core is pure: it performs no I/O. A host feeds it source strings,
//! keeps an [`Environment`] between submissions, and presents the displayed
//! result or the error.
//!
//! ```
//! use aplfix::{Environment, display, get_result};
//!
//! let mut env = Environment::new();
//! get_result("Avg ←₁ +/ ÷ ⧻", &mut env).unwrap();
//!
//! let mean = get_result("Avg 1‿2‿3‿4", &mut env).unwrap().unwrap();
//! assert_eq!(display(&mean), "2.5");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the `Arity` type that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// submission. Every error carries the source line it refers to and renders
/// a message suitable for showing verbatim.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with `std::error::Error` so errors can be boxed and
///   downcast.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the glyph table, lexing, parsing, evaluation,
/// the primitive library and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides entry points for each pipeline stage.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `f64`, `i64` and `usize` without silent data
///   loss.
/// - Resolve possibly negative indices against an axis length.
pub mod util;

pub use crate::interpreter::{
    evaluator::core::{EvalResult, Environment},
    lexer::{Token, TokenKind, lex, significant},
    parser::core::{ParseResult, parse, parse_with_limit},
    value::{core::Val, display::display},
};

/// Evaluates a single node against an environment.
///
/// # Errors
/// The first [`RuntimeError`](crate::error::RuntimeError) raised.
pub fn evaluate(node: &ast::Node, env: &mut Environment) -> EvalResult<Val> {
    env.eval(node)
}

/// Evaluates a parsed program and returns the value of its last statement.
///
/// # Errors
/// The first [`RuntimeError`](crate::error::RuntimeError) raised.
pub fn evaluate_program(program: &[ast::Node], env: &mut Environment) -> EvalResult<Option<Val>> {
    env.eval_program(program)
}

/// Runs a source string through every stage and returns the final value.
///
/// Lexing, parsing and evaluation run in order; a failure in one stage stops
/// the pipeline, so a lex error never reaches the parser. Bindings are made in
/// `env` and persist for later calls. An empty program yields `None`.
///
/// # Errors
/// A boxed [`LexError`](crate::error::LexError),
/// [`ParseError`](crate::error::ParseError) or
/// [`RuntimeError`](crate::error::RuntimeError).
///
/// # Examples
/// ```
/// use aplfix::{Environment, error::RuntimeError, get_result};
///
/// let mut env = Environment::new();
///
/// let sum = get_result("2 + 3", &mut env).unwrap().unwrap();
/// assert_eq!(sum.to_string(), "5");
///
/// let err = get_result("1 2", &mut env).unwrap_err();
/// assert!(matches!(err.downcast_ref::<RuntimeError>(),
///                  Some(RuntimeError::NiladOutsideOfFork { line: 1 })));
/// ```
pub fn get_result(source: &str, env: &mut Environment) -> Result<Option<Val>, Box<dyn std::error::Error>> {
    let tokens = lex(source)?;
    let program = parse(&tokens)?;
    Ok(env.eval_program(&program)?)
}
