use std::fmt::{self, Display, Formatter, Write};

use crate::interpreter::{lexer::NEGATION_MARK, value::core::Val};

impl Display for Val {
    /// Formats a value the way the language writes it.
    ///
    /// Formatting is total: every value has a rendering. Functions are opaque
    /// and print only their arity.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write_number(f, *n),
            Self::Character(c) => {
                f.write_char('\'')?;
                write_escaped(f, *c, '\'')?;
                f.write_char('\'')
            },
            Self::Array(a) if a.rank() > 0 && a.len() == 0 => write!(f, "[]"),
            Self::Array(a) if a.is_string() => {
                f.write_char('"')?;
                for v in a.data() {
                    if let Self::Character(c) = v {
                        write_escaped(f, *c, '"')?;
                    }
                }
                f.write_char('"')
            },
            Self::Array(a) if a.rank() == 0 => {
                write!(f, "⊂")?;
                match a.data().first() {
                    Some(inner) => write!(f, "{inner}"),
                    None => Ok(()),
                }
            },
            Self::Array(a) => {
                write!(f, "[")?;
                for (i, cell) in a.major_cells().iter().enumerate() {
                    if i > 0 {
                        write!(f, " ⋄ ")?;
                    }
                    write!(f, "{cell}")?;
                }
                write!(f, "]")
            },
            Self::Function(function) => write!(f, "{} function", function.arity()),
        }
    }
}

fn write_number(f: &mut Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    }
    if n.is_infinite() {
        return if n > 0.0 { write!(f, "∞") } else { write!(f, "{NEGATION_MARK}∞") };
    }
    if n == 0.0 {
        return write!(f, "0");
    }
    if n < 0.0 {
        write!(f, "{NEGATION_MARK}{}", -n)
    } else {
        write!(f, "{n}")
    }
}

fn write_escaped(f: &mut Formatter<'_>, c: char, quote: char) -> fmt::Result {
    match c {
        '\n' => write!(f, "\\n"),
        '\t' => write!(f, "\\t"),
        '\0' => write!(f, "\\0"),
        '\\' => write!(f, "\\\\"),
        c if c == quote => write!(f, "\\{c}"),
        c => f.write_char(c),
    }
}

/// Renders a value for presentation.
///
/// # Example
/// ```
/// use aplfix::interpreter::value::{
///     core::{Array, Val},
///     display::display,
/// };
///
/// assert_eq!(display(&Val::Number(-2.5)), "¯2.5");
/// assert_eq!(display(&Val::Array(Array::string("hi"))), "\"hi\"");
/// assert_eq!(display(&Val::Array(Array::numbers([1.0, 2.0]))), "[1 ⋄ 2]");
/// ```
#[must_use]
pub fn display(value: &Val) -> String {
    value.to_string()
}
