use std::iter::Peekable;

use crate::{
    ast::{Arity, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{Depth, ParseResult, parse_expression},
            primary::starts_primary,
            utils::peek,
        },
    },
};

const fn is_separator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Separator | TokenKind::Newline)
}

/// Parses a sequence of statements separated by `⋄` or newlines.
///
/// Parsing stops without error at the first token that cannot start a
/// statement; everything after it is ignored.
///
/// Grammar: `program := sep* (statement (sep+ statement)*)? sep*`
///
/// # Errors
/// The first error raised by a statement.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    loop {
        while tokens.next_if(|t| is_separator(t.kind)).is_some() {}

        match peek(tokens, depth) {
            Some(token) if starts_primary(token.kind) => statements.push(parse_statement(tokens, depth)?),
            _ => return Ok(statements),
        }

        match peek(tokens, depth) {
            Some(token) if is_separator(token.kind) => {},
            _ => return Ok(statements),
        }
    }
}

/// Parses a binding or a bare expression.
///
/// Grammar: `statement := binding | expression`
///
/// # Errors
/// Propagates errors from the binding or expression.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = peek(tokens, depth)
       && token.kind == TokenKind::Identifier
    {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if let Some(next) = peek(&mut lookahead, depth)
           && let TokenKind::Binding(arity) = next.kind
        {
            tokens.next();
            tokens.next();
            return parse_binding(tokens, depth, token, arity);
        }
    }

    parse_expression(tokens, depth)
}

/// Parses the value of a binding, positioned after the binding marker.
///
/// The value may itself be a binding, so `A ← B ← 3` binds both names.
///
/// Grammar: `binding := identifier "←" digit? statement`
///
/// # Errors
/// `UnexpectedEndOfInput` if nothing follows the marker, and errors from the
/// value.
fn parse_binding<'a, I>(tokens: &mut Peekable<I>,
                        depth: Depth,
                        name: &Token,
                        arity: Option<Arity>)
                        -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = name.line;
    if peek(tokens, depth).is_none() {
        return Err(ParseError::UnexpectedEndOfInput { expected: format!("a value for {}", name.image),
                                                      line });
    }

    let value = parse_statement(tokens, depth.descend(line)?)?;
    Ok(Node::Binding { name: name.image.clone(),
                       arity,
                       value: Box::new(value),
                       line })
}
