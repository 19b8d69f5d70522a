use crate::{
    ast::Arity,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        primitive::{arithmetic, comparison, modifier, structure},
        value::core::Val,
    },
};

/// A primitive function.
///
/// Every primitive has exactly one arity; there is no monadic/dyadic
/// overloading of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `=`
    Equal,
    /// `≠`
    NotEqual,
    /// `>`
    Greater,
    /// `≥`
    GreaterEqual,
    /// `<`
    Less,
    /// `≤`
    LessEqual,
    /// `⊣` returns the left argument.
    Left,
    /// `⊢` returns the right argument.
    Right,
    /// `⋅` returns its argument.
    Identity,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
    /// `%`
    Modulo,
    /// `*`
    Power,
    /// `↥`
    Maximum,
    /// `↧`
    Minimum,
    /// `¯`
    Negate,
    /// `¬`
    Not,
    /// `|`
    Absolute,
    /// `⌊`
    Floor,
    /// `⁅`
    Round,
    /// `⌈`
    Ceiling,
    /// `≡`
    Match,
    /// `≢`
    NoMatch,
    /// `⍳`
    Iota,
    /// `⧻`
    Length,
    /// `△`
    Shape,
    /// `,`
    Flat,
    /// `⍮`
    Pair,
    /// `⍪`
    Catenate,
    /// `⍴`
    Reshape,
    /// `⊏`
    Select,
    /// `⊑`
    Pick,
}

impl Primitive {
    /// Returns the declared arity of the primitive.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Identity
            | Self::Negate
            | Self::Not
            | Self::Absolute
            | Self::Floor
            | Self::Round
            | Self::Ceiling
            | Self::Iota
            | Self::Length
            | Self::Shape
            | Self::Flat => Arity::Monadic,
            _ => Arity::Dyadic,
        }
    }

    /// Applies the primitive to its arguments.
    ///
    /// # Errors
    /// `RuntimeError::ArgumentCountMismatch` if the number of arguments does
    /// not equal the arity, or the primitive's own error.
    ///
    /// # Example
    /// ```
    /// use aplfix::interpreter::{primitive::Primitive, value::core::Val};
    ///
    /// let r = Primitive::Modulo.apply(&[Val::Number(-1.0), Val::Number(3.0)], 1).unwrap();
    /// assert_eq!(r, Val::Number(2.0));
    /// ```
    pub fn apply(self, args: &[Val], line: usize) -> EvalResult<Val> {
        match (self.arity(), args) {
            (Arity::Monadic, [x]) => self.apply_monadic(x, line),
            (Arity::Dyadic, [x, y]) => self.apply_dyadic(x, y, line),
            (arity, _) => Err(RuntimeError::ArgumentCountMismatch { expected: arity.count(),
                                                                    found: args.len(),
                                                                    line }),
        }
    }

    fn apply_monadic(self, x: &Val, line: usize) -> EvalResult<Val> {
        match self {
            Self::Identity => Ok(x.clone()),
            Self::Negate => arithmetic::negate(x, line),
            Self::Not => arithmetic::not(x, line),
            Self::Absolute => arithmetic::absolute(x, line),
            Self::Floor => arithmetic::floor(x, line),
            Self::Round => arithmetic::round(x, line),
            Self::Ceiling => arithmetic::ceiling(x, line),
            Self::Iota => structure::iota(x, line),
            Self::Length => structure::length(x, line),
            Self::Shape => structure::shape(x, line),
            Self::Flat => Ok(structure::flat(x)),
            _ => Err(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                           found: 1,
                                                           line }),
        }
    }

    fn apply_dyadic(self, x: &Val, y: &Val, line: usize) -> EvalResult<Val> {
        match self {
            Self::Equal => comparison::equal(x, y, line),
            Self::NotEqual => comparison::not_equal(x, y, line),
            Self::Greater => comparison::greater(x, y, line),
            Self::GreaterEqual => comparison::greater_equal(x, y, line),
            Self::Less => comparison::less(x, y, line),
            Self::LessEqual => comparison::less_equal(x, y, line),
            Self::Left => Ok(x.clone()),
            Self::Right => Ok(y.clone()),
            Self::Add => arithmetic::add(x, y, line),
            Self::Subtract => arithmetic::subtract(x, y, line),
            Self::Multiply => arithmetic::multiply(x, y, line),
            Self::Divide => arithmetic::divide(x, y, line),
            Self::Modulo => arithmetic::modulo(x, y, line),
            Self::Power => arithmetic::power(x, y, line),
            Self::Maximum => arithmetic::maximum(x, y, line),
            Self::Minimum => arithmetic::minimum(x, y, line),
            Self::Match => Ok(Val::from(comparison::matches(x, y))),
            Self::NoMatch => Ok(Val::from(!comparison::matches(x, y))),
            Self::Pair => Ok(structure::pair(x, y)),
            Self::Catenate => structure::catenate(x, y, line),
            Self::Reshape => structure::reshape(x, y, line),
            Self::Select => structure::select(x, y, line),
            Self::Pick => structure::pick(x, y, line),
            _ => Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 2,
                                                           line }),
        }
    }
}

/// A primitive modifier: a transform from functions (or values) to
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `¨`
    Each,
    /// `˜`
    Backwards,
    /// `˙`
    SelfApply,
    /// `/`
    Reduce,
    /// `\`
    Scan,
    /// `∘`
    Atop,
    /// `○`
    Over,
}

impl Modifier {
    /// Returns how many operands the modifier takes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Atop | Self::Over => Arity::Dyadic,
            _ => Arity::Monadic,
        }
    }

    /// Applies a one-operand modifier.
    ///
    /// # Errors
    /// `RuntimeError::ExpectedFunction` when the operand is not a suitable
    /// function, `RuntimeError::ArgumentCountMismatch` for a two-operand
    /// modifier.
    pub fn apply_monadic(self, operand: &Val, line: usize) -> EvalResult<Val> {
        match self {
            Self::Each => modifier::make_each(operand, line),
            Self::Backwards => modifier::make_backwards(operand, line),
            Self::SelfApply => modifier::make_self(operand, line),
            Self::Reduce => modifier::make_reduce(operand, line),
            Self::Scan => modifier::make_scan(operand, line),
            Self::Atop | Self::Over => Err(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                                                 found: 1,
                                                                                 line }),
        }
    }

    /// Applies a two-operand modifier.
    ///
    /// # Errors
    /// Errors from the specific composition rules, or
    /// `RuntimeError::ArgumentCountMismatch` for a one-operand modifier.
    pub fn apply_dyadic(self, left: &Val, right: &Val, line: usize) -> EvalResult<Val> {
        match self {
            Self::Atop => modifier::compose(left, right, line),
            Self::Over => modifier::over(left, right, line),
            _ => Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 2,
                                                           line }),
        }
    }
}
