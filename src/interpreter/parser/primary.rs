use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{NEGATION_MARK, Token, TokenKind},
        parser::{
            core::{Depth, ParseResult, parse_expression},
            statement::parse_statement,
            utils::{expect_closing, modifier_of, peek, primitive_of, unescape, unexpected},
        },
    },
};

/// Returns `true` if a token of this kind can begin a primary.
#[must_use]
pub const fn starts_primary(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Number
             | TokenKind::String
             | TokenKind::Character
             | TokenKind::Identifier
             | TokenKind::MonadicFunction
             | TokenKind::DyadicFunction
             | TokenKind::OpenParen
             | TokenKind::OpenArray
             | TokenKind::OpenList)
}

/// Parses a primary followed by its modifiers.
///
/// Monadic modifiers stack left to right, each wrapping the result so far.
/// A dyadic modifier takes the next primary as its right operand and ends
/// the modifier-expression.
///
/// Grammar: `modified := primary monadic_modifier* (dyadic_modifier primary)?`
///
/// # Errors
/// `MissingOperand` if a dyadic modifier has no right operand.
pub fn parse_modified<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut node = parse_primary(tokens, depth)?;

    while let Some(token) = peek(tokens, depth)
          && token.kind == TokenKind::MonadicModifier
    {
        tokens.next();
        node = Node::MonadicModifier { modifier: modifier_of(token)?,
                                       operand:  Box::new(node),
                                       line:     token.line, };
    }

    if let Some(token) = peek(tokens, depth)
       && token.kind == TokenKind::DyadicModifier
    {
        tokens.next();
        let modifier = modifier_of(token)?;
        let missing = ParseError::MissingOperand { modifier: token.image.chars().next().unwrap_or('∘'),
                                                   line:     token.line, };
        let right = match peek(tokens, depth) {
            Some(next) if starts_primary(next.kind) => parse_primary(tokens, depth.descend(token.line)?)?,
            _ => return Err(missing),
        };
        node = Node::DyadicModifier { modifier,
                                      left: Box::new(node),
                                      right: Box::new(right),
                                      line: token.line };
    }

    Ok(node)
}

/// Parses a primary expression.
///
/// Grammar:
/// ```text
/// primary := number | string | character | identifier | function
///          | "(" statement ")" | "[" elements "]" | "⟨" elements "⟩"
/// ```
///
/// # Errors
/// `UnexpectedToken` if the next token cannot start a primary, or errors from
/// the bracketed forms.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = peek(tokens, depth) else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string(),
                                                      line:     depth.end_line, });
    };
    tokens.next();
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            let value = token.image
                             .replace(NEGATION_MARK, "-")
                             .parse::<f64>()
                             .map_err(|_| unexpected("a number", token))?;
            Ok(Node::Number { value, line })
        },
        TokenKind::String => Ok(Node::String { value: unescape(&token.image),
                                               line }),
        TokenKind::Character => {
            let mut chars = unescape(&token.image).chars().collect::<Vec<_>>();
            match (chars.pop(), chars.is_empty()) {
                (Some(value), true) => Ok(Node::Character { value, line }),
                _ => Err(unexpected("a single character", token)),
            }
        },
        TokenKind::Identifier => Ok(Node::Reference { name: token.image.clone(),
                                                      line }),
        TokenKind::MonadicFunction | TokenKind::DyadicFunction => {
            let primitive = primitive_of(token)?;
            Ok(Node::Glyph { primitive,
                             arity: primitive.arity(),
                             line })
        },
        TokenKind::OpenParen => parse_parenthesized(tokens, depth.enter_brackets(line)?, line),
        TokenKind::OpenArray => {
            let elements = parse_elements(tokens, depth.enter_brackets(line)?, TokenKind::CloseArray, '[', line)?;
            Ok(Node::ArrayLiteral { elements, line })
        },
        TokenKind::OpenList => {
            let elements = parse_elements(tokens, depth.enter_brackets(line)?, TokenKind::CloseList, '⟨', line)?;
            Ok(Node::ListLiteral { elements, line })
        },
        _ => Err(unexpected("an expression", token)),
    }
}

/// Parses the inside of `( ... )`, positioned after the opening parenthesis.
fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>, depth: Depth, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek(tokens, depth) {
        Some(token) if token.kind == TokenKind::CloseParen => {
            return Err(ParseError::EmptyParentheses { line });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "')'".to_string(),
                                                          line });
        },
        Some(_) => {},
    }

    let inner = parse_statement(tokens, depth)?;
    expect_closing(tokens, depth, TokenKind::CloseParen, ")", line)?;
    Ok(inner)
}

/// Parses `⋄`-separated elements up to `closing`, positioned after the
/// opening bracket.
///
/// Grammar: `elements := expression ("⋄" expression)*`
///
/// # Errors
/// - `EmptyLiteral` for `[]` or `⟨⟩`.
/// - `TrailingSeparator` for a `⋄` directly before the closing bracket.
/// - `UnexpectedEndOfInput` on the opening line if the bracket is never
///   closed.
fn parse_elements<'a, I>(tokens: &mut Peekable<I>,
                         depth: Depth,
                         closing: TokenKind,
                         bracket: char,
                         line: usize)
                         -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let close_image = if closing == TokenKind::CloseArray { "]" } else { "⟩" };
    let end_of_input = || ParseError::UnexpectedEndOfInput { expected: format!("'{close_image}'"),
                                                             line };

    match peek(tokens, depth) {
        Some(token) if token.kind == closing => return Err(ParseError::EmptyLiteral { bracket, line }),
        None => return Err(end_of_input()),
        Some(_) => {},
    }

    let mut elements = Vec::new();
    loop {
        elements.push(parse_expression(tokens, depth)?);

        match peek(tokens, depth) {
            Some(token) if token.kind == closing => {
                tokens.next();
                return Ok(elements);
            },
            Some(token) if token.kind == TokenKind::Separator => {
                tokens.next();
                match peek(tokens, depth) {
                    Some(next) if next.kind == closing => {
                        return Err(ParseError::TrailingSeparator { line: next.line });
                    },
                    None => return Err(end_of_input()),
                    Some(_) => {},
                }
            },
            Some(token) => return Err(unexpected(&format!("'⋄' or '{close_image}'"), token)),
            None => return Err(end_of_input()),
        }
    }
}
