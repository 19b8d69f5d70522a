use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            primary::{parse_modified, starts_primary},
            statement::parse_program,
            utils::{peek, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tracks how deeply the parser has recursed.
///
/// Every construct that makes the parser recurse (parentheses, array and list
/// brackets, modifier operands, chained bindings) descends one level. The
/// limit turns runaway nesting into a [`ParseError::NestingTooDeep`] instead of
/// a stack overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    /// Current nesting level.
    pub current:   usize,
    /// Maximum nesting level allowed.
    pub max:       usize,
    /// Whether the parser is inside brackets or parentheses, where newlines
    /// carry no meaning.
    pub bracketed: bool,
    /// Line reported when the input runs out.
    pub end_line:  usize,
}

impl Depth {
    /// Creates the depth of a top-level statement whose input ends on
    /// `end_line`.
    #[must_use]
    pub const fn new(max: usize, end_line: usize) -> Self {
        Self { current: 0,
               max,
               bracketed: false,
               end_line }
    }

    /// Returns the depth one level further in.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` when the limit would be exceeded.
    pub const fn descend(self, line: usize) -> ParseResult<Self> {
        if self.current >= self.max {
            return Err(ParseError::NestingTooDeep { max: self.max,
                                                    line });
        }
        Ok(Self { current: self.current + 1,
                  ..self })
    }

    /// Returns the depth inside a pair of brackets.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` when the limit would be exceeded.
    pub fn enter_brackets(self, line: usize) -> ParseResult<Self> {
        let inner = self.descend(line)?;
        Ok(Self { bracketed: true,
                  ..inner })
    }
}

/// Parses significant tokens into a program with the default nesting limit.
///
/// Whitespace and comment tokens are skipped, so the output of
/// [`lex`](crate::interpreter::lexer::lex) can be passed in directly.
///
/// # Errors
/// The first [`ParseError`] encountered; no partial tree is returned.
///
/// # Example
/// ```
/// use aplfix::interpreter::{lexer::lex, parser::core::parse};
///
/// let tokens = lex("A ← 1 ⋄ A + 2").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Node>> {
    parse_with_limit(tokens, DEFAULT_MAX_DEPTH)
}

/// Parses tokens into a program, refusing nesting deeper than `max_depth`.
///
/// # Errors
/// The first [`ParseError`] encountered.
pub fn parse_with_limit(tokens: &[Token], max_depth: usize) -> ParseResult<Vec<Node>> {
    let end_line = tokens.last().map_or(1, |t| t.line);
    let mut iter = tokens.iter().filter(|t| t.is_significant()).peekable();
    parse_program(&mut iter, Depth::new(max_depth, end_line))
}

/// Parses a train: a maximal run of strands.
///
/// The tines are kept unresolved; a single tine collapses to itself.
///
/// Grammar: `expression := strand strand*`
///
/// # Errors
/// `UnexpectedToken` or `UnexpectedEndOfInput` if no strand starts here.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let first = parse_strand(tokens, depth)?;
    let line = first.line_number();
    let mut tines = vec![first];

    while let Some(token) = peek(tokens, depth)
          && starts_primary(token.kind)
    {
        tines.push(parse_strand(tokens, depth)?);
    }

    if tines.len() == 1 {
        return Ok(tines.remove(0));
    }
    Ok(Node::Expression { tines, line })
}

/// Parses modifier-expressions joined by ligatures.
///
/// Grammar: `strand := modified ("‿" modified)*`
///
/// # Errors
/// Propagates errors from the elements; a ligature must be followed by an
/// element.
pub fn parse_strand<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek(tokens, depth) {
        Some(token) if starts_primary(token.kind) => {},
        Some(token) => return Err(unexpected("an expression", token)),
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string(),
                                                          line:     depth.end_line, });
        },
    }

    let first = parse_modified(tokens, depth)?;
    let line = first.line_number();
    let mut elements = vec![first];

    while let Some(token) = peek(tokens, depth)
          && token.kind == TokenKind::Ligature
    {
        tokens.next();
        match peek(tokens, depth) {
            Some(next) if starts_primary(next.kind) => elements.push(parse_modified(tokens, depth)?),
            Some(next) => return Err(unexpected("a strand element after ‿", next)),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "a strand element after ‿".to_string(),
                                                              line:     token.line, });
            },
        }
    }

    if elements.len() == 1 {
        return Ok(elements.remove(0));
    }
    Ok(Node::Strand { elements, line })
}
