#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing.
pub enum LexError {
    /// No token pattern matches at the current position.
    UnrecognizedInput {
        /// The first few characters of the offending input.
        snippet: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A run of lowercase letters does not start with a known glyph alias.
    UnknownGlyphAlias {
        /// The lowercase run that could not be resolved.
        alias: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A character is neither a glyph nor part of any other token.
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl LexError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedInput { line, .. }
            | Self::UnknownGlyphAlias { line, .. }
            | Self::UnknownGlyph { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { snippet, line } => {
                write!(f, "Error on line {line}: Unrecognized input: {snippet}")
            },
            Self::UnknownGlyphAlias { alias, line } => {
                write!(f, "Error on line {line}: Unknown glyph alias '{alias}'.")
            },
            Self::UnknownGlyph { glyph, line } => {
                write!(f, "Error on line {line}: Unknown glyph '{glyph}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
