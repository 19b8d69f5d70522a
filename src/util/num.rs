use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Largest number of elements an array may be built with.
pub const MAX_ELEMENTS: usize = 1 << 24;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// Used whenever a length, a dimension or a generated index becomes a number
/// of the language.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use aplfix::{
///     error::RuntimeError,
///     util::num::{MAX_SAFE_U64_INT, usize_to_f64_checked},
/// };
///
/// assert_eq!(usize_to_f64_checked(100, 1).unwrap(), 100.0);
///
/// let too_big = (MAX_SAFE_U64_INT + 1) as usize;
/// let err = usize_to_f64_checked(too_big, 7).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 7 }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// - `RuntimeError::InvalidArgument` for NaN and infinities.
/// - `RuntimeError::LiteralTooLarge` outside of the exactly representable
///   range.
/// - `RuntimeError::RealIsFractional` for values with a fractional part.
///
/// ## Example
/// ```
/// use aplfix::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(-3.0, 1).unwrap(), -3);
///
/// let err = f64_to_i64_checked(1.5, 123).unwrap_err();
/// assert!(matches!(err, RuntimeError::RealIsFractional { line: 123 }));
///
/// let err = f64_to_i64_checked(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 5 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("cannot use {value} as an integer"),
                                                   line });
    }
    if value.abs() > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::RealIsFractional { line });
    }
    Ok(value as i64)
}

/// Safely converts an `f64` to a `usize` dimension.
///
/// The value must be a non-negative integer; dimensions of reshape and iota
/// go through this conversion.
///
/// ## Errors
/// Everything [`f64_to_i64_checked`] rejects, plus
/// `RuntimeError::InvalidArgument` for negative values.
///
/// ## Example
/// ```
/// use aplfix::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(4.0, 1).unwrap(), 4);
/// assert!(f64_to_usize_checked(-1.0, 1).is_err());
/// ```
pub fn f64_to_usize_checked(value: f64, line: usize) -> EvalResult<usize> {
    let integer = f64_to_i64_checked(value, line)?;

    usize::try_from(integer).map_err(|_| RuntimeError::InvalidArgument { details: format!("expected a non-negative integer, found {integer}"),
                                                                         line })
}

/// Resolves a possibly negative index against an axis of length `length`.
///
/// Negative indices count from the end, so `-1` is the last position.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if the resolved position lies
/// outside `0..length`.
///
/// ## Example
/// ```
/// use aplfix::util::num::resolve_index;
///
/// assert_eq!(resolve_index(-1, 3, 1).unwrap(), 2);
/// assert_eq!(resolve_index(0, 3, 1).unwrap(), 0);
/// assert!(resolve_index(3, 3, 1).is_err());
/// ```
pub fn resolve_index(index: i64, length: usize, line: usize) -> EvalResult<usize> {
    let out_of_bounds = RuntimeError::IndexOutOfBounds { index,
                                                         length,
                                                         line };
    let signed_length = i64::try_from(length).map_err(|_| RuntimeError::LiteralTooLarge { line })?;
    let position = if index < 0 { index + signed_length } else { index };

    if position < 0 || position >= signed_length {
        return Err(out_of_bounds);
    }
    usize::try_from(position).map_err(|_| out_of_bounds)
}

/// Returns the number of elements described by `shape`.
///
/// Zero-length axes do not exempt the others: the product of the non-zero
/// dimensions must also stay within [`MAX_ELEMENTS`], so every cell and frame
/// size of the array is representable too.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` when the product overflows or
/// exceeds [`MAX_ELEMENTS`].
///
/// ## Example
/// ```
/// use aplfix::{error::RuntimeError, util::num::element_count};
///
/// assert_eq!(element_count(&[2, 3], 1).unwrap(), 6);
/// assert_eq!(element_count(&[], 1).unwrap(), 1);
/// assert_eq!(element_count(&[4, 0], 1).unwrap(), 0);
///
/// let err = element_count(&[1 << 32, 1 << 32, 2], 9).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 9 }));
/// assert!(element_count(&[0, 1 << 40], 1).is_err());
/// ```
pub fn element_count(shape: &[usize], line: usize) -> EvalResult<usize> {
    let extent = shape.iter()
                      .filter(|&&d| d != 0)
                      .try_fold(1usize, |acc, &d| acc.checked_mul(d))
                      .filter(|&n| n <= MAX_ELEMENTS)
                      .ok_or(RuntimeError::LiteralTooLarge { line })?;

    if shape.contains(&0) { Ok(0) } else { Ok(extent) }
}
