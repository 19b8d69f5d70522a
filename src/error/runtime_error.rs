#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a name that has no binding.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible kind.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Two arrays that must agree in shape do not.
    ShapeMismatch {
        /// Details about the shapes involved.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access an element outside the array.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the indexed axis.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A value appeared inside a train with no dyadic function after it.
    NiladOutsideOfFork {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A modifier received an operand it cannot transform.
    ExpectedFunction {
        /// Details about the offending operand.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The arity of the function.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binding declared an arity its value does not have.
    ArityMismatch {
        /// The bound name.
        name:     String,
        /// The declared arity.
        declared: usize,
        /// The arity of the evaluated value.
        actual:   usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to use a fractional number where an integer was required.
    RealIsFractional {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number was too large to be used as an index or dimension.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::ShapeMismatch { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::NiladOutsideOfFork { line }
            | Self::ExpectedFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::RealIsFractional { line }
            | Self::LiteralTooLarge { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ShapeMismatch { details, line } => {
                write!(f, "Error on line {line}: Shape mismatch: {details}.")
            },
            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                     "Error on line {line}: Index {index} is out of bounds for length {length}."),
            Self::NiladOutsideOfFork { line } => {
                write!(f, "Error on line {line}: Nilad outside of fork.")
            },
            Self::ExpectedFunction { details, line } => {
                write!(f, "Error on line {line}: Expected function: {details}.")
            },
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function takes {expected} arguments but received {found}."),
            Self::ArityMismatch { name,
                                  declared,
                                  actual,
                                  line, } => write!(f,
                                                    "Error on line {line}: '{name}' was declared with arity {declared} but its value has arity {actual}."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::RealIsFractional { line } => write!(f,
                                                      "Error on line {line}: Value is fractional and cannot be used as an integer."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Number is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
