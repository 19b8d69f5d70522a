use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Array, Val, as_dimensions},
    },
    util::num::{element_count, f64_to_i64_checked, resolve_index, usize_to_f64_checked},
};

/// `⍳ y`: the indices `0..n`, or a numeric array of shape `y` counting up in
/// row-major order.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::structure::iota,
///     value::core::{Array, Val},
/// };
///
/// let r = iota(&Val::Number(3.0), 1).unwrap();
/// assert_eq!(r, Val::Array(Array::numbers([0.0, 1.0, 2.0])));
/// ```
pub fn iota(y: &Val, line: usize) -> EvalResult<Val> {
    let shape = as_dimensions(y, "take the range of", line)?;
    let size = element_count(&shape, line)?;
    let data = (0..size).map(|i| usize_to_f64_checked(i, line).map(Val::Number))
                        .collect::<EvalResult<Vec<_>>>()?;
    Ok(Val::Array(Array::new(shape, data, line)?))
}

/// `⧻ y`: the size of the leading axis, 0 for non-arrays.
pub fn length(y: &Val, line: usize) -> EvalResult<Val> {
    let n = match y {
        Val::Array(a) => a.len(),
        _ => 0,
    };
    Ok(Val::Number(usize_to_f64_checked(n, line)?))
}

/// `△ y`: the shape as a vector, empty for non-arrays.
pub fn shape(y: &Val, line: usize) -> EvalResult<Val> {
    match y {
        Val::Array(a) => Ok(Val::Array(a.shape_vector(line)?)),
        _ => Ok(Val::Array(Array::vector(Vec::new()))),
    }
}

/// `, y`: the elements as a vector in storage order.
#[must_use]
pub fn flat(y: &Val) -> Val {
    match y {
        Val::Array(a) => Val::Array(Array::vector(a.data().to_vec())),
        other => Val::Array(Array::vector(vec![other.clone()])),
    }
}

/// `x ⍮ y`: a two-element vector.
#[must_use]
pub fn pair(x: &Val, y: &Val) -> Val {
    Val::Array(Array::vector(vec![x.clone(), y.clone()]))
}

/// Promotes a rank-0 array to a one-element vector.
fn at_least_vector(a: &Array, line: usize) -> EvalResult<Array> {
    if a.rank() == 0 {
        a.reshaped(vec![1], line)
    } else {
        Ok(a.clone())
    }
}

/// Builds a single major cell filled with `fill`, shaped like a cell of
/// `partner`.
fn replicate_cell(fill: &Val, partner: &Array, line: usize) -> EvalResult<Array> {
    let mut shape = vec![1];
    shape.extend(partner.shape().iter().skip(1));
    let size = element_count(&shape, line)?;
    Array::new(shape, vec![fill.clone(); size], line)
}

/// Prepends a leading axis of length 1.
fn with_unit_axis(a: &Array, line: usize) -> EvalResult<Array> {
    let mut shape = vec![1];
    shape.extend(a.shape());
    a.reshaped(shape, line)
}

fn join(x: &Array, y: &Array, line: usize) -> EvalResult<Array> {
    let mut x = at_least_vector(x, line)?;
    let mut y = at_least_vector(y, line)?;

    if x.rank() == y.rank() + 1 {
        y = with_unit_axis(&y, line)?;
    } else if x.rank() + 1 == y.rank() {
        x = with_unit_axis(&x, line)?;
    }

    if x.rank() != y.rank() || x.shape()[1..] != y.shape()[1..] {
        return Err(RuntimeError::ShapeMismatch { details: format!("Arguments to catenate must have matching cells, found shapes {:?} and {:?}",
                                                                  x.shape(),
                                                                  y.shape()),
                                                 line });
    }

    let mut shape = x.shape().to_vec();
    shape[0] += y.len();
    let mut data = x.into_data();
    data.extend(y.into_data());
    Array::new(shape, data, line)
}

/// `x ⍪ y`: joins two values along the leading axis.
///
/// An array one rank lower than its partner gains a leading axis first, and
/// a non-array is replicated into one cell of its partner. Two non-arrays
/// form a two-element vector. Neither argument is modified.
///
/// # Errors
/// `RuntimeError::ShapeMismatch` when the cells do not agree.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::structure::catenate,
///     value::core::{Array, Val},
/// };
///
/// let v = Val::Array(Array::numbers([1.0, 2.0, 3.0]));
/// let r = catenate(&v, &Val::Number(4.0), 1).unwrap();
///
/// assert_eq!(r, Val::Array(Array::numbers([1.0, 2.0, 3.0, 4.0])));
/// ```
pub fn catenate(x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    let joined = match (x, y) {
        (Val::Array(a), Val::Array(b)) => join(a, b, line)?,
        (Val::Array(a), scalar) => join(a, &replicate_cell(scalar, a, line)?, line)?,
        (scalar, Val::Array(b)) => join(&replicate_cell(scalar, b, line)?, b, line)?,
        (a, b) => Array::vector(vec![a.clone(), b.clone()]),
    };
    Ok(Val::Array(joined))
}

/// `s ⍴ y`: reinterprets the elements of `y` under the shape `s`.
///
/// Elements are taken in storage order, repeating from the start when the
/// new shape needs more and truncating when it needs fewer. A non-array `y`
/// counts as a single element.
///
/// # Errors
/// `RuntimeError::InvalidArgument` when `y` is empty but the shape is not.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::structure::reshape,
///     value::core::{Array, Val},
/// };
///
/// let source = Val::Array(Array::string("abc"));
/// let r = reshape(&Val::Number(5.0), &source, 1).unwrap();
///
/// assert_eq!(r, Val::Array(Array::string("abcab")));
/// ```
pub fn reshape(s: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    let shape = as_dimensions(s, "reshape by", line)?;
    let size = element_count(&shape, line)?;
    let source = match y {
        Val::Array(a) => a.data(),
        other => std::slice::from_ref(other),
    };

    if source.is_empty() && size > 0 {
        return Err(RuntimeError::InvalidArgument { details: "Cannot reshape an empty array into a non-empty shape".to_string(),
                                                   line });
    }

    let data = source.iter().cycle().take(size).cloned().collect();
    Ok(Val::Array(Array::new(shape, data, line)?))
}

fn as_index(value: &Val, line: usize) -> EvalResult<i64> {
    f64_to_i64_checked(value.as_number("index with", line)?, line)
}

/// `i ⊏ y`: selects major cells of `y`.
///
/// The result has the shape of the index followed by the shape of one cell.
/// Negative indices count from the end.
///
/// # Errors
/// `RuntimeError::TypeError` when `y` is not an array of rank 1 or more, or an
/// index is not a number; `RuntimeError::IndexOutOfBounds` for indices
/// outside the leading axis.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::structure::select,
///     value::core::{Array, Val},
/// };
///
/// let y = Val::Array(Array::string("abcd"));
/// let i = Val::Array(Array::numbers([0.0, -1.0]));
///
/// assert_eq!(select(&i, &y, 1).unwrap(), Val::Array(Array::string("ad")));
/// ```
pub fn select(i: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    let Val::Array(source) = y else {
        return Err(RuntimeError::TypeError { details: format!("Cannot select from {}", y.kind_name()),
                                             line });
    };
    if source.rank() == 0 {
        return Err(RuntimeError::TypeError { details: "Cannot select from a rank 0 array".to_string(),
                                             line });
    }

    let cell_shape = &source.shape()[1..];
    let cell_size: usize = cell_shape.iter().product();
    let start = |index: &Val| -> EvalResult<usize> {
        Ok(resolve_index(as_index(index, line)?, source.len(), line)? * cell_size)
    };

    match i {
        Val::Array(indices) => {
            let mut shape = indices.shape().to_vec();
            shape.extend(cell_shape);
            let mut data = Vec::with_capacity(element_count(&shape, line)?);
            for index in indices.data() {
                let from = start(index)?;
                data.extend_from_slice(&source.data()[from..from + cell_size]);
            }
            Ok(Val::Array(Array::new(shape, data, line)?))
        },
        index if cell_shape.is_empty() => Ok(source.data()[start(index)?].clone()),
        index => {
            let from = start(index)?;
            let data = source.data()[from..from + cell_size].to_vec();
            Ok(Val::Array(Array::new(cell_shape.to_vec(), data, line)?))
        },
    }
}

/// `i ⊑ y`: picks a single element of `y` by its full position.
///
/// The index is a vector with one entry per axis of `y`, or a bare number
/// when `y` is a vector. An index array that itself contains arrays picks
/// once per contained index and keeps the index's structure.
///
/// # Errors
/// `RuntimeError::ShapeMismatch` when the index length differs from the rank,
/// `RuntimeError::IndexOutOfBounds` for positions outside an axis.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     primitive::structure::pick,
///     value::core::{Array, Val},
/// };
///
/// let y = Val::Array(Array::new(vec![2, 2], Array::string("abcd").into_data(), 1).unwrap());
/// let i = Val::Array(Array::numbers([1.0, 0.0]));
///
/// assert_eq!(pick(&i, &y, 1).unwrap(), Val::Character('c'));
/// ```
pub fn pick(i: &Val, y: &Val, line: usize) -> EvalResult<Val> {
    let Val::Array(source) = y else {
        return Err(RuntimeError::TypeError { details: format!("Cannot pick from {}", y.kind_name()),
                                             line });
    };

    let position = match i {
        Val::Array(index) if index.data().iter().any(|v| matches!(v, Val::Array(_))) => {
            return Ok(Val::Array(index.try_map(|inner| pick(inner, y, line))?));
        },
        Val::Array(index) => index.data().iter().map(|v| as_index(v, line)).collect::<EvalResult<Vec<_>>>()?,
        number => vec![as_index(number, line)?],
    };

    if position.len() != source.rank() {
        return Err(RuntimeError::ShapeMismatch { details: format!("Index of length {} cannot pick from an array of rank {}",
                                                                  position.len(),
                                                                  source.rank()),
                                                 line });
    }

    let mut offset = 0;
    for (&index, &axis) in position.iter().zip(source.shape()) {
        offset = offset * axis + resolve_index(index, axis, line)?;
    }
    source.data()
          .get(offset)
          .cloned()
          .ok_or(RuntimeError::IndexOutOfBounds { index: i64::try_from(offset).unwrap_or(i64::MAX),
                                                  length: source.data().len(),
                                                  line })
}
