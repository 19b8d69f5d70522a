use crate::{
    ast::Arity,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Array, Val},
            function::Function,
        },
    },
};

fn require_dyadic<'a>(operand: &'a Val, modifier: &str, line: usize) -> EvalResult<&'a Function> {
    let f = operand.as_function(&format!("Operand to {modifier}"), line)?;
    if f.arity() == Arity::Dyadic {
        Ok(f)
    } else {
        Err(RuntimeError::ExpectedFunction { details: format!("Operand to {modifier} must be a dyadic function, found a {} function",
                                                              f.arity()),
                                             line })
    }
}

/// `f¨`
pub fn make_each(operand: &Val, line: usize) -> EvalResult<Val> {
    let f = operand.as_function("Operand to each", line)?;
    Ok(Val::Function(Function::Each(Box::new(f.clone()))))
}

/// `f˜`. Swapping only means something for dyadic functions; any other
/// function is returned unchanged.
pub fn make_backwards(operand: &Val, line: usize) -> EvalResult<Val> {
    let f = operand.as_function("Operand to backwards", line)?;
    match f.arity() {
        Arity::Dyadic => Ok(Val::Function(Function::Backwards(Box::new(f.clone())))),
        _ => Ok(operand.clone()),
    }
}

/// `f˙`
pub fn make_self(operand: &Val, line: usize) -> EvalResult<Val> {
    let f = require_dyadic(operand, "self", line)?;
    Ok(Val::Function(Function::SelfApply(Box::new(f.clone()))))
}

/// `f/`
///
/// # Errors
/// `RuntimeError::ExpectedFunction` unless the operand is a dyadic function.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::{Primitive, modifier::make_reduce},
///     value::{core::Val, function::Function},
/// };
///
/// let floor = Val::Function(Function::Primitive(Primitive::Floor));
/// assert!(make_reduce(&floor, 1).is_err());
/// ```
pub fn make_reduce(operand: &Val, line: usize) -> EvalResult<Val> {
    let f = require_dyadic(operand, "reduce", line)?;
    Ok(Val::Function(Function::Reduce(Box::new(f.clone()))))
}

/// `f\`
pub fn make_scan(operand: &Val, line: usize) -> EvalResult<Val> {
    let f = require_dyadic(operand, "scan", line)?;
    Ok(Val::Function(Function::Scan(Box::new(f.clone()))))
}

/// `f∘g`: composition, with values standing in for fixed arguments.
///
/// - Two functions form an atop.
/// - A monadic function composed with a value is applied to it at once.
/// - A dyadic function with a value on the right binds its right argument:
///   `-∘2` subtracts two.
/// - A value on the left binds the left argument of a dyadic function:
///   `2∘-` subtracts from two.
///
/// # Errors
/// `RuntimeError::ExpectedFunction` when both operands are values.
pub fn compose(left: &Val, right: &Val, line: usize) -> EvalResult<Val> {
    match (left, right) {
        (Val::Function(f), Val::Function(g)) => {
            Function::Atop { outer: Box::new(f.clone()),
                             inner: Box::new(g.clone()), }.settle(line)
        },
        (Val::Function(f), value) => match f.arity() {
            Arity::Dyadic => {
                Ok(Val::Function(Function::Atop { outer: Box::new(f.clone()),
                                                  inner: Box::new(Function::lift(value.clone())), }))
            },
            _ => f.call_adapted(std::slice::from_ref(value), line),
        },
        (value, Val::Function(g)) => match g.arity() {
            Arity::Dyadic => {
                let swapped = Function::Backwards(Box::new(g.clone()));
                Ok(Val::Function(Function::Atop { outer: Box::new(swapped),
                                                  inner: Box::new(Function::lift(value.clone())), }))
            },
            _ => g.call_adapted(std::slice::from_ref(value), line),
        },
        _ => Err(RuntimeError::ExpectedFunction { details: "Cannot compose two non-functions".to_string(),
                                                  line }),
    }
}

/// `f○g`: applies `g` to each argument before `f` combines them.
///
/// # Errors
/// `RuntimeError::ExpectedFunction` when an operand is not a function, or
/// when both are dyadic.
pub fn over(left: &Val, right: &Val, line: usize) -> EvalResult<Val> {
    let f = left.as_function("Left operand to over", line)?;
    let g = right.as_function("Right operand to over", line)?;

    match (f.arity(), g.arity()) {
        (Arity::Dyadic, Arity::Dyadic) => {
            Err(RuntimeError::ExpectedFunction { details: "Over cannot combine two dyadic functions".to_string(),
                                                 line })
        },
        (_, Arity::Niladic) | (Arity::Niladic, _) => {
            Err(RuntimeError::ExpectedFunction { details: "Operands to over must take arguments".to_string(),
                                                 line })
        },
        _ => Ok(Val::Function(Function::Over { outer: Box::new(f.clone()),
                                               inner: Box::new(g.clone()), })),
    }
}

/// Calls `f` one level inside array arguments.
///
/// Array arguments are split into elements; a non-array argument is paired
/// with every element of an array argument. Two array arguments must share a
/// shape.
///
/// # Errors
/// `RuntimeError::ShapeMismatch` for arrays of different shapes, or the first
/// error raised by `f`.
pub fn each(f: &Function, args: &[Val], line: usize) -> EvalResult<Val> {
    match args {
        [Val::Array(a)] => Ok(Val::Array(a.try_map(|x| f.call(std::slice::from_ref(x), line))?)),
        [Val::Array(a), Val::Array(b)] => {
            if a.shape() != b.shape() {
                return Err(RuntimeError::ShapeMismatch { details: format!("Each needs arrays of equal shape, found {:?} and {:?}",
                                                                          a.shape(),
                                                                          b.shape()),
                                                         line });
            }
            let mut right = b.data().iter();
            Ok(Val::Array(a.try_map(|x| {
                               let y = right.next().cloned().unwrap_or_else(|| x.clone());
                               f.call(&[x.clone(), y], line)
                           })?))
        },
        [Val::Array(a), y] => Ok(Val::Array(a.try_map(|x| f.call(&[x.clone(), y.clone()], line))?)),
        [x, Val::Array(b)] => Ok(Val::Array(b.try_map(|y| f.call(&[x.clone(), y.clone()], line))?)),
        _ => f.call(args, line),
    }
}

fn cells_of<'a>(x: &'a Val, what: &str, line: usize) -> EvalResult<&'a Array> {
    match x {
        Val::Array(a) => Ok(a),
        other => Err(RuntimeError::TypeError { details: format!("Cannot {what} {}", other.kind_name()),
                                               line }),
    }
}

fn fold_right(f: &Function, cells: &[Val], line: usize) -> EvalResult<Val> {
    let Some((last, rest)) = cells.split_last() else {
        return Err(RuntimeError::InvalidArgument { details: "Cannot reduce an empty array".to_string(),
                                                   line });
    };
    rest.iter()
        .rev()
        .try_fold(last.clone(), |acc, cell| f.call(&[cell.clone(), acc], line))
}

/// Right fold of `f` over the major cells of `x`.
///
/// `f/ [a ⋄ b ⋄ c]` is `a f (b f c)`.
///
/// # Errors
/// `RuntimeError::TypeError` for non-arrays, `RuntimeError::InvalidArgument`
/// for empty arrays.
pub fn reduce(f: &Function, x: &Val, line: usize) -> EvalResult<Val> {
    fold_right(f, &cells_of(x, "reduce", line)?.major_cells(), line)
}

/// The reduction of every prefix of the major cells of `x`.
///
/// Each partial result is `f/` of a prefix, so the last one equals `f/ x`:
/// `-\ [1 ⋄ 2 ⋄ 3]` is `[1 ⋄ 1-2 ⋄ 1-(2-3)]`. A vector keeps its frame
/// whatever the partial results are; higher ranks stack them as major cells.
/// Empty and rank 0 arrays are returned unchanged.
///
/// # Errors
/// `RuntimeError::TypeError` for non-arrays, or a shape mismatch when the
/// partial results of a rank 2 or higher array cannot be stacked.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::{Primitive, modifier::scan},
///     value::{core::{Array, Val}, function::Function},
/// };
///
/// let minus = Function::Primitive(Primitive::Subtract);
/// let x = Val::Array(Array::numbers([1.0, 2.0, 3.0]));
///
/// assert_eq!(scan(&minus, &x, 1).unwrap(), Val::Array(Array::numbers([1.0, -1.0, 2.0])));
/// ```
pub fn scan(f: &Function, x: &Val, line: usize) -> EvalResult<Val> {
    let array = cells_of(x, "scan", line)?;
    if array.rank() == 0 || array.len() == 0 {
        return Ok(x.clone());
    }

    let cells = array.major_cells();
    let results = (1..=cells.len()).map(|n| fold_right(f, &cells[..n], line))
                                   .collect::<EvalResult<Vec<_>>>()?;
    if array.rank() == 1 {
        Ok(Val::Array(Array::vector(results)))
    } else {
        Ok(Val::Array(Array::from_major_cells(results, line)?))
    }
}
