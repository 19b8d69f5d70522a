use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, primitive::pervade::pervade_dyadic, value::core::Val},
};

/// Scalar equality. Values of different kinds are unequal; functions are
/// never equal to anything.
fn scalar_equal(x: &Val, y: &Val) -> bool {
    match (x, y) {
        (Val::Number(a), Val::Number(b)) => a == b,
        (Val::Character(a), Val::Character(b)) => a == b,
        _ => false,
    }
}

/// Scalar ordering. Numbers use a total order so that `NaN` compares
/// consistently.
fn scalar_order(x: &Val, y: &Val, line: usize) -> EvalResult<Ordering> {
    match (x, y) {
        (Val::Number(a), Val::Number(b)) => Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (Val::Character(a), Val::Character(b)) => Ok(a.cmp(b)),
        (Val::Function(_), _) | (_, Val::Function(_)) => {
            Err(RuntimeError::TypeError { details: "Cannot compare functions".to_string(),
                                          line })
        },
        _ => Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {}",
                                                            x.kind_name(),
                                                            y.kind_name()),
                                           line }),
    }
}

fn ordering<P>(x: &Val, y: &Val, line: usize, predicate: P) -> EvalResult<Val>
    where P: Fn(Ordering) -> bool
{
    pervade_dyadic(x, y, line, &|a, b| Ok(Val::from(predicate(scalar_order(a, b, line)?))))
}

/// `x = y`, elementwise. Never fails on mismatched kinds.
///
/// # Example
/// ```
/// use aplfix::interpreter::{primitive::comparison::equal, value::core::Val};
///
/// let r = equal(&Val::Number(97.0), &Val::Character('a'), 1).unwrap();
/// assert_eq!(r, Val::Number(0.0));
/// ```
pub fn equal(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    pervade_dyadic(x, y, line, &|a, b| Ok(Val::from(scalar_equal(a, b))))
}

/// `x ≠ y`, elementwise.
pub fn not_equal(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    pervade_dyadic(x, y, line, &|a, b| Ok(Val::from(!scalar_equal(a, b))))
}

/// `x > y`, elementwise.
pub fn greater(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    ordering(x, y, line, Ordering::is_gt)
}

/// `x ≥ y`, elementwise.
pub fn greater_equal(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    ordering(x, y, line, Ordering::is_ge)
}

/// `x < y`, elementwise.
pub fn less(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    ordering(x, y, line, Ordering::is_lt)
}

/// `x ≤ y`, elementwise.
pub fn less_equal(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    ordering(x, y, line, Ordering::is_le)
}

/// Deep structural equality, as used by `≡` and `≢`.
///
/// Two arrays match when their shapes are equal and every pair of elements
/// matches. Values of different kinds never match. Numbers match under the
/// total order, so `NaN` matches itself.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::comparison::matches,
///     value::core::{Array, Val},
/// };
///
/// let a = Val::Array(Array::string("ab"));
/// let b = Val::Array(Array::string("ab"));
///
/// assert!(matches(&a, &b));
/// assert!(!matches(&a, &Val::Character('a')));
/// ```
#[must_use]
pub fn matches(x: &Val, y: &Val) -> bool {
    match (x, y) {
        (Val::Number(a), Val::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
        (Val::Character(a), Val::Character(b)) => a == b,
        (Val::Array(a), Val::Array(b)) => {
            a.shape() == b.shape() && a.data().iter().zip(b.data()).all(|(l, r)| matches(l, r))
        },
        (Val::Function(f), Val::Function(g)) => f == g,
        _ => false,
    }
}
