use crate::{
    ast::Arity,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        primitive::{Primitive, modifier},
        value::core::Val,
    },
};

/// A first-class function value.
///
/// Functions are plain descriptors rather than closures: each variant names
/// how it was built, and [`Function::call`] interprets that description. This
/// keeps every composed function inspectable, comparable and printable by
/// arity alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// A table-registered primitive at its declared arity.
    Primitive(Primitive),
    /// A value lifted into a niladic function.
    Constant(Box<Val>),
    /// `f¨`: applies `f` one level into array arguments.
    Each(Box<Self>),
    /// `f˜`: a dyadic function with its arguments swapped.
    Backwards(Box<Self>),
    /// `f˙`: a dyadic function receiving its single argument twice.
    SelfApply(Box<Self>),
    /// `f/`: right fold over major cells.
    Reduce(Box<Self>),
    /// `f\`: left-to-right accumulation over major cells.
    Scan(Box<Self>),
    /// `outer` applied after `inner`.
    Atop {
        /// The function applied last.
        outer: Box<Self>,
        /// The function applied to the arguments first.
        inner: Box<Self>,
    },
    /// `outer○inner`: `inner` preprocesses each argument of `outer`.
    Over {
        /// The combining function.
        outer: Box<Self>,
        /// The preprocessing function.
        inner: Box<Self>,
    },
    /// `left center right` with arity-adapted sides.
    Fork {
        /// Produces the left argument of `center`.
        left:   Box<Self>,
        /// The dyadic combining function.
        center: Box<Self>,
        /// Produces the right argument of `center`.
        right:  Box<Self>,
    },
}

impl Function {
    /// Wraps a value as a function.
    ///
    /// Function values are unwrapped; anything else becomes a
    /// [`Function::Constant`].
    #[must_use]
    pub fn lift(value: Val) -> Self {
        match value {
            Val::Function(f) => f,
            other => Self::Constant(Box::new(other)),
        }
    }

    /// Returns the fixed arity of the function.
    ///
    /// # Example
    /// ```
    /// use aplfix::{
    ///     ast::Arity,
    ///     interpreter::{primitive::Primitive, value::function::Function},
    /// };
    ///
    /// let add = Function::Primitive(Primitive::Add);
    /// let reduce = Function::Reduce(Box::new(add.clone()));
    ///
    /// assert_eq!(add.arity(), Arity::Dyadic);
    /// assert_eq!(reduce.arity(), Arity::Monadic);
    /// ```
    #[must_use]
    pub fn arity(&self) -> Arity {
        match self {
            Self::Primitive(p) => p.arity(),
            Self::Constant(_) => Arity::Niladic,
            Self::Each(f) | Self::Backwards(f) => f.arity(),
            Self::SelfApply(_) | Self::Reduce(_) | Self::Scan(_) => Arity::Monadic,
            Self::Atop { outer, inner } => match outer.arity() {
                Arity::Dyadic => inner.arity().max(Arity::Monadic),
                _ => inner.arity(),
            },
            Self::Over { outer, inner } => match outer.arity() {
                Arity::Dyadic => Arity::Dyadic,
                _ => inner.arity(),
            },
            Self::Fork { left, right, .. } => left.arity().max(right.arity()),
        }
    }

    /// Calls the function with exactly as many arguments as its arity.
    ///
    /// # Errors
    /// `RuntimeError::ArgumentCountMismatch` for a wrong number of arguments,
    /// and whatever the function itself raises.
    ///
    /// # Example
    /// ```
    /// use aplfix::interpreter::{
    ///     primitive::Primitive,
    ///     value::{core::Val, function::Function},
    /// };
    ///
    /// let sub = Function::Backwards(Box::new(Function::Primitive(Primitive::Subtract)));
    /// let r = sub.call(&[Val::Number(1.0), Val::Number(10.0)], 1).unwrap();
    ///
    /// assert_eq!(r, Val::Number(9.0));
    /// ```
    pub fn call(&self, args: &[Val], line: usize) -> EvalResult<Val> {
        let expected = self.arity().count();
        if args.len() != expected {
            return Err(RuntimeError::ArgumentCountMismatch { expected,
                                                             found: args.len(),
                                                             line });
        }

        match self {
            Self::Primitive(p) => p.apply(args, line),
            Self::Constant(value) => Ok((**value).clone()),
            Self::Each(f) => modifier::each(f, args, line),
            Self::Backwards(f) => match args {
                [x, y] => f.call(&[y.clone(), x.clone()], line),
                _ => f.call(args, line),
            },
            Self::SelfApply(f) => f.call(&[args[0].clone(), args[0].clone()], line),
            Self::Reduce(f) => modifier::reduce(f, &args[0], line),
            Self::Scan(f) => modifier::scan(f, &args[0], line),
            Self::Atop { outer, inner } => {
                let inner_result = inner.call_adapted(args, line)?;
                match outer.arity() {
                    Arity::Dyadic => outer.call(&[args[0].clone(), inner_result], line),
                    _ => outer.call(&[inner_result], line),
                }
            },
            Self::Over { outer, inner } => match outer.arity() {
                Arity::Dyadic => {
                    let prepared = args.iter()
                                       .map(|arg| inner.call(std::slice::from_ref(arg), line))
                                       .collect::<EvalResult<Vec<_>>>()?;
                    outer.call(&prepared, line)
                },
                _ => outer.call(&[inner.call(args, line)?], line),
            },
            Self::Fork { left, center, right } => {
                let l = left.call_adapted(args, line)?;
                let r = right.call_adapted(args, line)?;
                center.call(&[l, r], line)
            },
        }
    }

    /// Calls the function with the trailing arguments its arity needs.
    ///
    /// A lower-arity function inside a higher-arity composition drops the
    /// leading arguments: a monadic side of a dyadic fork sees only the right
    /// argument.
    ///
    /// # Errors
    /// `RuntimeError::ArgumentCountMismatch` if fewer arguments are available
    /// than the function takes.
    pub fn call_adapted(&self, args: &[Val], line: usize) -> EvalResult<Val> {
        let expected = self.arity().count();
        let skip = args.len()
                       .checked_sub(expected)
                       .ok_or(RuntimeError::ArgumentCountMismatch { expected,
                                                                    found: args.len(),
                                                                    line })?;
        self.call(&args[skip..], line)
    }

    /// Turns a built function into a value.
    ///
    /// A niladic function has nothing left to wait for, so it is invoked and
    /// its result returned; any other function is returned as a value.
    ///
    /// # Errors
    /// Whatever invoking a niladic function raises.
    pub fn settle(self, line: usize) -> EvalResult<Val> {
        match self.arity() {
            Arity::Niladic => self.call(&[], line),
            _ => Ok(Val::Function(self)),
        }
    }
}
