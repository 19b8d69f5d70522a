use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Val},
};

/// Applies a scalar operation to every non-array leaf of a value.
///
/// Nested arrays are descended recursively; the result has the same
/// structure as the input.
///
/// # Parameters
/// - `x`: The argument.
/// - `line`: Current line number for error reporting.
/// - `f`: The operation on a single number, character or function.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::pervade::pervade_monadic,
///     value::core::{Array, Val},
/// };
///
/// let x = Val::Array(Array::numbers([1.0, 2.0]));
/// let r = pervade_monadic(&x, 1, &|v| Ok(Val::Number(v.as_number("double", 1)? * 2.0))).unwrap();
///
/// assert_eq!(r, Val::Array(Array::numbers([2.0, 4.0])));
/// ```
pub fn pervade_monadic<F>(x: &Val, line: usize, f: &F) -> EvalResult<Val>
    where F: Fn(&Val) -> EvalResult<Val>
{
    match x {
        Val::Array(a) => Ok(Val::Array(a.try_map(|v| pervade_monadic(v, line, f))?)),
        scalar => f(scalar),
    }
}

/// Applies a scalar operation elementwise between two values.
///
/// This unifies all the pairing cases:
/// - Array with array: shapes must be identical.
/// - Array with non-array: the non-array is paired with every element.
/// - Non-array with non-array: `f` is called directly.
///
/// Pairing recurses, so nested arrays are combined at every level. There is
/// no broadcasting between arrays of different shapes.
///
/// # Errors
/// `RuntimeError::ShapeMismatch` for arrays of different shapes, or the first
/// error returned by `f`.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::pervade::pervade_dyadic,
///     value::core::{Array, Val},
/// };
///
/// let left = Val::Array(Array::numbers([1.0, 2.0]));
/// let right = Val::Array(Array::numbers([1.0, 2.0, 3.0]));
///
/// assert!(pervade_dyadic(&left, &right, 1, &|a, _| Ok(a.clone())).is_err());
/// ```
pub fn pervade_dyadic<F>(x: &Val, y: &Val, line: usize, f: &F) -> EvalResult<Val>
    where F: Fn(&Val, &Val) -> EvalResult<Val>
{
    match (x, y) {
        (Val::Array(a), Val::Array(b)) => {
            if a.shape() != b.shape() {
                return Err(RuntimeError::ShapeMismatch { details: format!("Cannot pair arrays of shapes {:?} and {:?}",
                                                                          a.shape(),
                                                                          b.shape()),
                                                         line });
            }
            let mut right = b.data().iter();
            let out = a.try_map(|l| match right.next() {
                           Some(r) => pervade_dyadic(l, r, line, f),
                           None => Err(RuntimeError::ShapeMismatch { details: "Array data ended early".to_string(),
                                                                     line }),
                       })?;
            Ok(Val::Array(out))
        },
        (Val::Array(a), scalar) => Ok(Val::Array(a.try_map(|l| pervade_dyadic(l, scalar, line, f))?)),
        (scalar, Val::Array(b)) => Ok(Val::Array(b.try_map(|r| pervade_dyadic(scalar, r, line, f))?)),
        (l, r) => f(l, r),
    }
}
