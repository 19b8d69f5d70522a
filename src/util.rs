/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the `f64`
/// numbers of the language and the integer types used for dimensions and
/// indices, without risking silent truncation or rounding.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or a [`RuntimeError`](crate::error::RuntimeError) otherwise.
pub mod num;
