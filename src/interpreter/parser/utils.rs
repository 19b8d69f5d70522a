use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        glyph::{self, Definition},
        lexer::{Token, TokenKind},
        parser::core::{Depth, ParseResult},
        primitive::{Modifier, Primitive},
    },
};

/// Peeks at the next token that matters at this depth.
///
/// Inside brackets newlines are insignificant and are consumed here, so the
/// grammar functions never see them.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> Option<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    if depth.bracketed {
        while tokens.next_if(|t| t.kind == TokenKind::Newline).is_some() {}
    }
    tokens.peek().copied()
}

/// Builds an `UnexpectedToken` error for `got`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str, got: &Token) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  got:      got.image.clone(),
                                  line:     got.line, }
}

/// Consumes the closing bracket of a construct opened on `open_line`.
///
/// # Errors
/// `UnexpectedEndOfInput` pointing at the opening line if the input ends,
/// `UnexpectedToken` if something else follows.
pub(in crate::interpreter::parser) fn expect_closing<'a, I>(tokens: &mut Peekable<I>,
                                                             depth: Depth,
                                                             closing: TokenKind,
                                                             image: &str,
                                                             open_line: usize)
                                                             -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek(tokens, depth) {
        Some(token) if token.kind == closing => {
            tokens.next();
            Ok(())
        },
        Some(token) => Err(unexpected(&format!("'{image}'"), token)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{image}'"),
                                                       line:     open_line, }),
    }
}

/// Resolves a function token to its primitive.
pub(in crate::interpreter::parser) fn primitive_of(token: &Token) -> ParseResult<Primitive> {
    match token.image.chars().next().and_then(glyph::by_symbol).map(|g| g.definition) {
        Some(Definition::Function(primitive)) => Ok(primitive),
        _ => Err(unexpected("a function glyph", token)),
    }
}

/// Resolves a modifier token to its modifier.
pub(in crate::interpreter::parser) fn modifier_of(token: &Token) -> ParseResult<Modifier> {
    match token.image.chars().next().and_then(glyph::by_symbol).map(|g| g.definition) {
        Some(Definition::Modifier(modifier)) => Ok(modifier),
        _ => Err(unexpected("a modifier glyph", token)),
    }
}

/// Decodes the body of a quoted literal.
///
/// Recognized escapes are `\n`, `\t`, `\0`, `\\`, `\"` and `\'`; any other
/// escaped character stands for itself.
///
/// # Example
/// ```
/// use aplfix::interpreter::parser::utils::unescape;
///
/// assert_eq!(unescape(r#""a\tb\"""#), "a\tb\"");
/// assert_eq!(unescape(r"'\q'"), "q");
/// ```
#[must_use]
pub fn unescape(quoted: &str) -> String {
    let mut chars = quoted.chars();
    chars.next();
    chars.next_back();

    let mut out = String::with_capacity(quoted.len());
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
