use crate::interpreter::primitive::{Modifier, Primitive};

/// The fixed number of arguments a function takes.
///
/// Unlike traditional APL, arity never varies per call: a primitive is either
/// monadic or dyadic, and values are niladic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arity {
    /// A constant; takes no arguments.
    Niladic,
    /// Takes one argument.
    Monadic,
    /// Takes two arguments.
    Dyadic,
}

impl Arity {
    /// Returns the number of arguments as a count.
    ///
    /// ## Example
    /// ```
    /// use aplfix::ast::Arity;
    ///
    /// assert_eq!(Arity::Dyadic.count(), 2);
    /// ```
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Niladic => 0,
            Self::Monadic => 1,
            Self::Dyadic => 2,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Niladic => "niladic",
            Self::Monadic => "monadic",
            Self::Dyadic => "dyadic",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree (AST) node.
///
/// Trees are immutable once built; the evaluator only reads them. Every
/// variant records the line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A number literal such as `42` or `¯1.5`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, evaluated to a character vector.
    String {
        /// The unescaped contents.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A character literal such as `'a'`.
    Character {
        /// The unescaped character.
        value: char,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a named binding.
    Reference {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A primitive function.
    Glyph {
        /// The primitive the glyph stands for.
        primitive: Primitive,
        /// The declared arity of the primitive.
        arity:     Arity,
        /// Line number in the source code.
        line:      usize,
    },
    /// A monadic modifier applied to its operand, e.g. `+/`.
    MonadicModifier {
        /// The modifier.
        modifier: Modifier,
        /// The operand the modifier wraps.
        operand:  Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A dyadic modifier applied to two operands, e.g. `⌊∘÷`.
    DyadicModifier {
        /// The modifier.
        modifier: Modifier,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A binding such as `Avg ←₁ +/ ÷ ⧻`.
    Binding {
        /// The bound name.
        name:  String,
        /// The optionally declared arity.
        arity: Option<Arity>,
        /// The bound expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An unresolved train; arity-based composition happens at evaluation.
    Expression {
        /// The juxtaposed tines, left to right.
        tines: Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Values joined by ligatures, forming an implicit vector.
    Strand {
        /// The strand elements.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A bracketed array literal with uniform elements.
    ArrayLiteral {
        /// The separated elements.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A list literal holding arbitrary, possibly ragged, elements.
    ListLiteral {
        /// The separated elements.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use aplfix::ast::Node;
    ///
    /// let node = Node::Reference { name: "X".to_string(),
    ///                              line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::String { line, .. }
            | Self::Character { line, .. }
            | Self::Reference { line, .. }
            | Self::Glyph { line, .. }
            | Self::MonadicModifier { line, .. }
            | Self::DyadicModifier { line, .. }
            | Self::Binding { line, .. }
            | Self::Expression { line, .. }
            | Self::Strand { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::ListLiteral { line, .. } => *line,
        }
    }
}
