#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The image of the token encountered.
        got:      String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: String,
        /// The source line of the construct left open.
        line:     usize,
    },
    /// A pair of parentheses with nothing inside.
    EmptyParentheses {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array or list literal without elements.
    EmptyLiteral {
        /// The opening bracket of the literal.
        bracket: char,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A separator directly followed by a closing bracket.
    TrailingSeparator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A dyadic modifier without its right operand.
    MissingOperand {
        /// The modifier glyph.
        modifier: char,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Brackets or parentheses nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::EmptyParentheses { line }
            | Self::EmptyLiteral { line, .. }
            | Self::TrailingSeparator { line }
            | Self::MissingOperand { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got, line } => {
                write!(f, "Error on line {line}: Expected {expected} but got '{got}'.")
            },
            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Error on line {line}: Expected {expected} but reached end of input.")
            },
            Self::EmptyParentheses { line } => {
                write!(f, "Error on line {line}: Parentheses must not be empty.")
            },
            Self::EmptyLiteral { bracket, line } => {
                write!(f, "Error on line {line}: Literal opened with '{bracket}' must not be empty.")
            },
            Self::TrailingSeparator { line } => {
                write!(f, "Error on line {line}: Separator before a closing bracket.")
            },
            Self::MissingOperand { modifier, line } => write!(f,
                                                              "Error on line {line}: Modifier '{modifier}' is missing its right operand."),
            Self::NestingTooDeep { max, line } => {
                write!(f, "Error on line {line}: Nesting deeper than {max} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
