use std::collections::VecDeque;

use crate::{
    ast::{Arity, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Environment},
        value::{core::Val, function::Function},
    },
};

/// A deferred step of train resolution.
///
/// Each combinator still waits for the function built from the tines to its
/// right.
#[derive(Debug, Clone, PartialEq)]
pub enum Combinator {
    /// `left center …`: a fork whose right tine is the remainder.
    Fork {
        /// The left tine, lifted to a function.
        left:   Function,
        /// The dyadic function between the sides.
        center: Function,
    },
    /// `outer …`: `outer` applied after the remainder.
    Atop {
        /// The function applied last.
        outer: Function,
    },
}

impl Combinator {
    /// Completes the combinator with the function built from the remainder.
    #[must_use]
    pub fn wrap(self, remainder: Function) -> Function {
        match self {
            Self::Fork { left, center } => Function::Fork { left:   Box::new(left),
                                                            center: Box::new(center),
                                                            right:  Box::new(remainder), },
            Self::Atop { outer } => Function::Atop { outer: Box::new(outer),
                                                     inner: Box::new(remainder), },
        }
    }
}

/// Groups evaluated tines into combinators and a terminal function.
///
/// The scan runs left to right:
/// 1. The last tine is the terminal; a value becomes a constant function.
/// 2. A tine followed by a dyadic function with something after it opens a
///    fork, consuming both.
/// 3. Otherwise a function tine is an atop over the rest.
/// 4. Otherwise the tine is a value with nothing to combine it:
///    `RuntimeError::NiladOutsideOfFork`.
///
/// # Errors
/// `RuntimeError::NiladOutsideOfFork` for a malformed train.
///
/// # Example
/// ```
/// use aplfix::interpreter::{
///     evaluator::train::plan,
///     primitive::Primitive,
///     value::{core::Val, function::Function},
/// };
///
/// let add = Val::Function(Function::Primitive(Primitive::Add));
/// let (combinators, _) = plan(vec![Val::Number(2.0), add, Val::Number(3.0)], 1).unwrap();
/// assert_eq!(combinators.len(), 1);
///
/// assert!(plan(vec![Val::Number(1.0), Val::Number(2.0)], 1).is_err());
/// ```
pub fn plan(tines: Vec<Val>, line: usize) -> EvalResult<(Vec<Combinator>, Function)> {
    let mut queue = VecDeque::from(tines);
    let mut combinators = Vec::new();

    while let Some(tine) = queue.pop_front() {
        if queue.is_empty() {
            return Ok((combinators, Function::lift(tine)));
        }

        if queue.len() >= 2
           && let Some(Val::Function(center)) = queue.front()
           && center.arity() == Arity::Dyadic
        {
            let center = center.clone();
            queue.pop_front();
            combinators.push(Combinator::Fork { left: Function::lift(tine),
                                                center });
            continue;
        }

        match tine {
            Val::Function(outer) => combinators.push(Combinator::Atop { outer }),
            _ => return Err(RuntimeError::NiladOutsideOfFork { line }),
        }
    }

    Err(RuntimeError::InvalidArgument { details: "Cannot resolve an empty train".to_string(),
                                        line })
}

/// Folds combinators right to left onto the terminal.
#[must_use]
pub fn fold(combinators: Vec<Combinator>, terminal: Function) -> Function {
    combinators.into_iter().rev().fold(terminal, |remainder, c| c.wrap(remainder))
}

impl Environment {
    /// Evaluates a train.
    ///
    /// All tines are evaluated left to right, grouped by [`plan`] and folded
    /// into a single function. A niladic result is invoked at once and its
    /// value returned; any other result is returned as a function value.
    ///
    /// # Errors
    /// Errors from the tines, from resolution, or from invoking the result.
    pub fn eval_train(&mut self, tines: &[Node], line: usize) -> EvalResult<Val> {
        let values = tines.iter().map(|t| self.eval(t)).collect::<EvalResult<Vec<_>>>()?;
        let (combinators, terminal) = plan(values, line)?;
        fold(combinators, terminal).settle(line)
    }
}
