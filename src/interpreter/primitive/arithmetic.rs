use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        primitive::pervade::{pervade_dyadic, pervade_monadic},
        value::core::Val,
    },
    util::num::f64_to_i64_checked,
};

fn type_error(what: &str, x: &Val, y: &Val, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot {what} {} and {}", x.kind_name(), y.kind_name()),
                              line }
}

/// Applies a number-only operation elementwise.
fn numeric_dyadic<F>(what: &str, x: &Val, y: &Val, line: usize, op: F) -> EvalResult<Val>
    where F: Fn(f64, f64) -> f64
{
    pervade_dyadic(x, y, line, &|a, b| match (a, b) {
        (Val::Number(a), Val::Number(b)) => Ok(Val::Number(op(*a, *b))),
        _ => Err(type_error(what, a, b, line)),
    })
}

fn numeric_monadic<F>(what: &str, x: &Val, line: usize, op: F) -> EvalResult<Val>
    where F: Fn(f64) -> f64
{
    pervade_monadic(x, line, &|v| Ok(Val::Number(op(v.as_number(what, line)?))))
}

/// Moves a character by a number of code points.
fn shift_character(c: char, offset: f64, line: usize) -> EvalResult<Val> {
    let code = f64_to_i64_checked(f64::from(u32::from(c)) + offset, line)?;
    u32::try_from(code).ok()
                       .and_then(char::from_u32)
                       .map(Val::Character)
                       .ok_or(RuntimeError::InvalidArgument { details: format!("{code} is not a character code point"),
                                                              line })
}

/// `x + y`.
///
/// Numbers add; a character plus a number (in either order) moves the
/// character by that many code points. Two characters cannot be added.
///
/// # Example
/// ```
/// use aplfix::interpreter::{primitive::arithmetic::add, value::core::Val};
///
/// let r = add(&Val::Character('a'), &Val::Number(2.0), 1).unwrap();
/// assert_eq!(r, Val::Character('c'));
/// ```
pub fn add(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    pervade_dyadic(x, y, line, &|a, b| match (a, b) {
        (Val::Number(a), Val::Number(b)) => Ok(Val::Number(a + b)),
        (Val::Character(c), Val::Number(n)) | (Val::Number(n), Val::Character(c)) => {
            shift_character(*c, *n, line)
        },
        _ => Err(type_error("add", a, b, line)),
    })
}

/// `x - y`.
///
/// A character minus a number is a character; the difference of two
/// characters is the distance between their code points.
pub fn subtract(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    pervade_dyadic(x, y, line, &|a, b| match (a, b) {
        (Val::Number(a), Val::Number(b)) => Ok(Val::Number(a - b)),
        (Val::Character(c), Val::Number(n)) => shift_character(*c, -n, line),
        (Val::Character(a), Val::Character(b)) => {
            Ok(Val::Number(f64::from(u32::from(*a)) - f64::from(u32::from(*b))))
        },
        _ => Err(type_error("subtract", a, b, line)),
    })
}

/// `x × y`.
pub fn multiply(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    numeric_dyadic("multiply", x, y, line, |a, b| a * b)
}

/// `x ÷ y`. Division by zero follows IEEE 754.
pub fn divide(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    numeric_dyadic("divide", x, y, line, |a, b| a / b)
}

/// `x % y`, floored: the result takes the sign of `y`.
///
/// # Example
/// ```
/// use aplfix::interpreter::{primitive::arithmetic::modulo, value::core::Val};
///
/// assert_eq!(modulo(&Val::Number(7.0), &Val::Number(-3.0), 1).unwrap(),
///            Val::Number(-2.0));
/// ```
pub fn modulo(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    numeric_dyadic("take the modulo of", x, y, line, |a, b| a - b * (a / b).floor())
}

/// `x * y`.
pub fn power(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    numeric_dyadic("raise", x, y, line, f64::powf)
}

/// `x ↥ y`. Characters are ordered by code point.
pub fn maximum(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    pervade_dyadic(x, y, line, &|a, b| match (a, b) {
        (Val::Number(a), Val::Number(b)) => Ok(Val::Number(a.max(*b))),
        (Val::Character(a), Val::Character(b)) => Ok(Val::Character(*a.max(b))),
        _ => Err(type_error("take the maximum of", a, b, line)),
    })
}

/// `x ↧ y`. Characters are ordered by code point.
pub fn minimum(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    pervade_dyadic(x, y, line, &|a, b| match (a, b) {
        (Val::Number(a), Val::Number(b)) => Ok(Val::Number(a.min(*b))),
        (Val::Character(a), Val::Character(b)) => Ok(Val::Character(*a.min(b))),
        _ => Err(type_error("take the minimum of", a, b, line)),
    })
}

/// `¯ x`.
pub fn negate(x: &Val, line: usize) -> EvalResult<Val> {
    numeric_monadic("negate", x, line, |n| -n)
}

/// `¬ x`, computed as `1 - x`.
pub fn not(x: &Val, line: usize) -> EvalResult<Val> {
    numeric_monadic("take NOT of", x, line, |n| 1.0 - n)
}

/// `| x`.
pub fn absolute(x: &Val, line: usize) -> EvalResult<Val> {
    numeric_monadic("take the absolute value of", x, line, f64::abs)
}

/// `⌊ x`.
pub fn floor(x: &Val, line: usize) -> EvalResult<Val> {
    numeric_monadic("take the floor of", x, line, f64::floor)
}

/// `⁅ x`. Halves round toward positive infinity.
///
/// # Example
/// ```
/// use aplfix::interpreter::{primitive::arithmetic::round, value::core::Val};
///
/// assert_eq!(round(&Val::Number(-2.5), 1).unwrap(), Val::Number(-2.0));
/// ```
pub fn round(x: &Val, line: usize) -> EvalResult<Val> {
    numeric_monadic("round", x, line, |n| (n + 0.5).floor())
}

/// `⌈ x`.
pub fn ceiling(x: &Val, line: usize) -> EvalResult<Val> {
    numeric_monadic("take the ceiling of", x, line, f64::ceil)
}
