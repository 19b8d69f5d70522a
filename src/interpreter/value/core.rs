use crate::{
    ast::Arity,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::function::Function},
    util::num::{element_count, f64_to_usize_checked, usize_to_f64_checked},
};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these variants. Arrays own
/// their elements, so values behave as plain data: no operation ever mutates a
/// value another binding can observe.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    /// A double precision number.
    Number(f64),
    /// A single unicode scalar.
    Character(char),
    /// A multi-dimensional array of values.
    Array(Array),
    /// A first-class function with a fixed arity.
    Function(Function),
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<char> for Val {
    fn from(c: char) -> Self {
        Self::Character(c)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Self::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<Array> for Val {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Function> for Val {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl Val {
    /// Returns the arity of the value.
    ///
    /// Non-function values are niladic.
    ///
    /// # Example
    /// ```
    /// use aplfix::{ast::Arity, interpreter::value::core::Val};
    ///
    /// assert_eq!(Val::Number(1.0).arity(), Arity::Niladic);
    /// ```
    #[must_use]
    pub fn arity(&self) -> Arity {
        match self {
            Self::Function(f) => f.arity(),
            _ => Arity::Niladic,
        }
    }

    /// Returns a short name of the value's kind for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Character(_) => "character",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
        }
    }

    /// Returns the number, or a type error naming `what` was being attempted.
    ///
    /// # Errors
    /// `RuntimeError::TypeError` if the value is not a number.
    pub fn as_number(&self, what: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("Cannot {what} {}",
                                                                    other.kind_name()),
                                                   line }),
        }
    }

    /// Returns the function, or an error if the value is not callable.
    ///
    /// # Errors
    /// `RuntimeError::ExpectedFunction` if the value is not a function.
    pub fn as_function(&self, what: &str, line: usize) -> EvalResult<&Function> {
        match self {
            Self::Function(f) => Ok(f),
            other => {
                Err(RuntimeError::ExpectedFunction { details: format!("{what} must be a function, found {}",
                                                                      other.kind_name()),
                                                     line })
            },
        }
    }
}

/// A rectangular array stored in row-major order.
///
/// The product of `shape` always equals the number of stored elements; the
/// fields are private so that every constructor can uphold this. A rank-0
/// array holds exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    data:  Vec<Val>,
}

impl Array {
    /// Creates an array from a shape and row-major data.
    ///
    /// # Errors
    /// - `RuntimeError::LiteralTooLarge` if the shape describes more than
    ///   [`MAX_ELEMENTS`](crate::util::num::MAX_ELEMENTS) elements.
    /// - `RuntimeError::ShapeMismatch` if the shape does not describe exactly
    ///   `data.len()` elements.
    ///
    /// # Example
    /// ```
    /// use aplfix::interpreter::value::core::{Array, Val};
    ///
    /// let data = (0..6).map(|n| Val::Number(f64::from(n))).collect();
    /// let a = Array::new(vec![2, 3], data, 1).unwrap();
    ///
    /// assert_eq!(a.rank(), 2);
    /// assert!(Array::new(vec![4], vec![], 1).is_err());
    /// ```
    pub fn new(shape: Vec<usize>, data: Vec<Val>, line: usize) -> EvalResult<Self> {
        let size = element_count(&shape, line)?;
        if size != data.len() {
            return Err(RuntimeError::ShapeMismatch { details: format!("Shape {shape:?} needs {size} elements, found {}",
                                                                      data.len()),
                                                     line });
        }
        Ok(Self { shape, data })
    }

    /// Creates a rank-1 array.
    #[must_use]
    pub fn vector(data: Vec<Val>) -> Self {
        Self { shape: vec![data.len()],
               data }
    }

    /// Creates a character vector.
    ///
    /// # Example
    /// ```
    /// use aplfix::interpreter::value::core::Array;
    ///
    /// let s = Array::string("abc");
    /// assert_eq!(s.shape(), &[3]);
    /// assert!(s.is_string());
    /// ```
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self::vector(text.chars().map(Val::Character).collect())
    }

    /// Creates a numeric vector.
    #[must_use]
    pub fn numbers(values: impl IntoIterator<Item = f64>) -> Self {
        Self::vector(values.into_iter().map(Val::Number).collect())
    }

    /// The dimension sizes.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The elements in row-major order.
    #[must_use]
    pub fn data(&self) -> &[Val] {
        &self.data
    }

    /// The number of dimensions.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.shape.len()
    }

    /// The size of the leading axis, 0 for rank-0 arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    /// Returns `true` when the array holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the array and returns its elements.
    #[must_use]
    pub fn into_data(self) -> Vec<Val> {
        self.data
    }

    /// Returns `true` for a non-empty rank-1 array of characters.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.rank() == 1 && !self.is_empty() && self.data.iter().all(|v| matches!(v, Val::Character(_)))
    }

    /// Returns the shape as a numeric vector.
    ///
    /// # Errors
    /// `RuntimeError::LiteralTooLarge` if a dimension cannot be represented
    /// exactly.
    pub fn shape_vector(&self, line: usize) -> EvalResult<Self> {
        let dims = self.shape
                       .iter()
                       .map(|&d| usize_to_f64_checked(d, line))
                       .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self::numbers(dims))
    }

    /// Splits the array into a frame of cells of the trailing `rank` axes.
    ///
    /// Returns the frame shape and the cells in row-major frame order. Cells of
    /// rank 0 are the bare elements, never rank-0 arrays. A `rank` at or above
    /// the array's rank yields an empty frame holding the whole array.
    ///
    /// # Example
    /// ```
    /// use aplfix::interpreter::value::core::{Array, Val};
    ///
    /// let data = (0..6).map(|n| Val::Number(f64::from(n))).collect();
    /// let a = Array::new(vec![2, 3], data, 1).unwrap();
    ///
    /// let (frame, cells) = a.cells(1);
    /// assert_eq!(frame, vec![2]);
    /// assert_eq!(cells.len(), 2);
    /// ```
    #[must_use]
    pub fn cells(&self, rank: usize) -> (Vec<usize>, Vec<Val>) {
        if rank == 0 {
            return (self.shape.clone(), self.data.clone());
        }
        if rank >= self.rank() {
            return (Vec::new(), vec![Val::Array(self.clone())]);
        }

        let split = self.rank() - rank;
        let cell_shape = self.shape[split..].to_vec();
        let cell_size: usize = cell_shape.iter().product();
        let frame = self.shape[..split].to_vec();
        let count: usize = frame.iter().product();

        let cells = (0..count).map(|i| {
                                  let data = self.data[i * cell_size..(i + 1) * cell_size].to_vec();
                                  Val::Array(Self { shape: cell_shape.clone(),
                                                    data })
                              })
                              .collect();
        (frame, cells)
    }

    /// Splits the array along its leading axis.
    ///
    /// A vector yields its elements; a rank-0 array yields its single
    /// element.
    #[must_use]
    pub fn major_cells(&self) -> Vec<Val> {
        match self.rank() {
            0 | 1 => self.data.clone(),
            rank => self.cells(rank - 1).1,
        }
    }

    /// Builds an array from major cells.
    ///
    /// If no cell is an array the result is a vector of the cells. If every
    /// cell is an array of the same shape, the result gains a new leading
    /// axis. Anything else is a shape mismatch.
    ///
    /// # Errors
    /// `RuntimeError::ShapeMismatch` for mixed or ragged cells.
    pub fn from_major_cells(cells: Vec<Val>, line: usize) -> EvalResult<Self> {
        let arrays = cells.iter().filter(|c| matches!(c, Val::Array(_))).count();
        if arrays == 0 {
            return Ok(Self::vector(cells));
        }
        if arrays != cells.len() {
            return Err(RuntimeError::ShapeMismatch { details: "Cannot mix arrays and non-arrays in an array".to_string(),
                                                     line });
        }

        let count = cells.len();
        let mut cell_shape: Option<Vec<usize>> = None;
        let mut data = Vec::new();

        for cell in cells {
            let Val::Array(cell) = cell else { continue };
            match &cell_shape {
                Some(expected) if *expected != cell.shape => {
                    return Err(RuntimeError::ShapeMismatch { details: format!("Array elements have different shapes: {expected:?} vs {:?}",
                                                                              cell.shape),
                                                             line });
                },
                Some(_) => {},
                None => cell_shape = Some(cell.shape.clone()),
            }
            data.extend(cell.data);
        }

        let mut shape = vec![count];
        shape.extend(cell_shape.unwrap_or_default());
        Ok(Self { shape, data })
    }

    /// Applies a fallible function to every element, keeping the shape.
    ///
    /// # Errors
    /// The first error returned by `f`.
    pub fn try_map<F>(&self, mut f: F) -> EvalResult<Self>
        where F: FnMut(&Val) -> EvalResult<Val>
    {
        let data = self.data.iter().map(&mut f).collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { shape: self.shape.clone(),
                  data })
    }

    /// Returns a copy of the array with a different shape over the same data.
    ///
    /// # Errors
    /// `RuntimeError::ShapeMismatch` if the element count differs.
    pub fn reshaped(&self, shape: Vec<usize>, line: usize) -> EvalResult<Self> {
        Self::new(shape, self.data.clone(), line)
    }
}

/// Reads a value as a list of non-negative integers.
///
/// Accepts a bare number or a rank-1 array of numbers, as used by shape and
/// index operands.
///
/// # Errors
/// `RuntimeError::TypeError` for anything else, or a conversion error for
/// negative or fractional numbers.
pub fn as_dimensions(value: &Val, what: &str, line: usize) -> EvalResult<Vec<usize>> {
    match value {
        Val::Number(n) => Ok(vec![f64_to_usize_checked(*n, line)?]),
        Val::Array(a) if a.rank() == 1 => {
            a.data()
             .iter()
             .map(|v| f64_to_usize_checked(v.as_number(what, line)?, line))
             .collect()
        },
        other => Err(RuntimeError::TypeError { details: format!("Cannot {what} {}",
                                                                other.kind_name()),
                                               line }),
    }
}
