use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Environment},
        value::core::{Array, Val},
    },
};

impl Environment {
    /// Evaluates strand or list elements into a vector.
    ///
    /// Elements may be anything, including arrays of differing shapes.
    ///
    /// # Errors
    /// The first error raised by an element.
    pub fn eval_list(&mut self, elements: &[Node]) -> EvalResult<Val> {
        let values = elements.iter().map(|e| self.eval(e)).collect::<EvalResult<Vec<_>>>()?;
        Ok(Val::Array(Array::vector(values)))
    }

    /// Evaluates an array literal.
    ///
    /// Elements that are all arrays of one shape are stacked along a new
    /// leading axis; elements that are all non-arrays form a vector.
    ///
    /// # Errors
    /// `RuntimeError::ShapeMismatch` for ragged or mixed elements.
    ///
    /// # Example
    /// ```
    /// use aplfix::{get_result, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// let matrix = get_result("△ [1‿2 ⋄ 3‿4 ⋄ 5‿6]", &mut env).unwrap().unwrap();
    ///
    /// assert_eq!(matrix.to_string(), "[3 ⋄ 2]");
    /// assert!(get_result("[1‿2 ⋄ 3]", &mut env).is_err());
    /// ```
    pub fn eval_array_literal(&mut self, elements: &[Node], line: usize) -> EvalResult<Val> {
        let values = elements.iter().map(|e| self.eval(e)).collect::<EvalResult<Vec<_>>>()?;
        Ok(Val::Array(Array::from_major_cells(values, line)?))
    }
}
