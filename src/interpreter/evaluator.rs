/// Core evaluation logic and the binding environment.
///
/// Contains the result type, the `Environment` and the dispatch over AST
/// nodes.
pub mod core;

/// Evaluation of array, list and strand literals.
pub mod literal;

/// Train resolution.
///
/// Groups the evaluated tines of an expression into forks and atops by their
/// arities and folds them into a single function.
pub mod train;
