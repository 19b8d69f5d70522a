use logos::Logos;

use crate::{
    ast::Arity,
    error::LexError,
    interpreter::glyph::{self, GlyphKind},
};

/// Number of characters of the remaining input quoted by a lexing error.
const SNIPPET_LENGTH: usize = 10;

/// Canonical spelling of the negation mark.
pub const NEGATION_MARK: char = '¯';

/// Raw lexemes recognized by the state machine.
///
/// These are the first pass over the source text. Everything that is not a
/// literal, identifier, comment, whitespace or punctuation lands in
/// [`Lexeme::Other`], which is re-scanned into numbers and glyphs afterwards.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// `"Hello, world!"`
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    /// `'a'`
    #[regex(r"'([^'\\]|\\.)'")]
    Character,
    /// Capitalized names such as `Avg`.
    #[regex(r"[A-Z][A-Za-z]*")]
    Identifier,
    /// `# comments`
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,
    /// Spaces and tabs.
    #[regex(r"[ \t\r]+")]
    Whitespace,
    /// `\n`
    #[token("\n")]
    Newline,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`
    #[token("[")]
    OpenArray,
    /// `]`
    #[token("]")]
    CloseArray,
    /// `⟨` or `{`
    #[token("⟨")]
    #[token("{")]
    OpenList,
    /// `⟩` or `}`
    #[token("⟩")]
    #[token("}")]
    CloseList,
    /// `⋄` or `;`
    #[token("⋄")]
    #[token(";")]
    Separator,
    /// `‿` or `_`
    #[token("‿")]
    #[token("_")]
    Ligature,
    /// `←` or `:`, optionally followed by an arity digit.
    #[regex(r"[:←][012₀₁₂]?")]
    Binding,
    /// Any run of characters not covered above.
    #[regex(r#"[^ \t\r\n"'A-Z#()\[\]{}⟨⟩;⋄_‿:←]+"#, allow_greedy = true)]
    Other,
}

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A string literal, image includes the quotes.
    String,
    /// A number literal, image uses `¯` for negation.
    Number,
    /// A character literal, image includes the quotes.
    Character,
    /// A capitalized name.
    Identifier,
    /// A `#` comment up to the end of the line.
    Comment,
    /// Spaces and tabs.
    Whitespace,
    /// A line break.
    Newline,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenArray,
    /// `]`
    CloseArray,
    /// `⟨`
    OpenList,
    /// `⟩`
    CloseList,
    /// `⋄`
    Separator,
    /// `←`, with the declared arity if one was written.
    Binding(Option<Arity>),
    /// `‿`
    Ligature,
    /// A glyph of a monadic function.
    MonadicFunction,
    /// A glyph of a dyadic function.
    DyadicFunction,
    /// A glyph of a monadic modifier.
    MonadicModifier,
    /// A glyph of a dyadic modifier.
    DyadicModifier,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Character => write!(f, "character"),
            Self::Identifier => write!(f, "identifier"),
            Self::Comment => write!(f, "comment"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Newline => write!(f, "newline"),
            Self::OpenParen => write!(f, "open parenthesis"),
            Self::CloseParen => write!(f, "close parenthesis"),
            Self::OpenArray => write!(f, "open array"),
            Self::CloseArray => write!(f, "close array"),
            Self::OpenList => write!(f, "open list"),
            Self::CloseList => write!(f, "close list"),
            Self::Separator => write!(f, "separator"),
            Self::Binding(None) => write!(f, "binding"),
            Self::Binding(Some(arity)) => write!(f, "{arity} binding"),
            Self::Ligature => write!(f, "ligature"),
            Self::MonadicFunction => write!(f, "monadic function"),
            Self::DyadicFunction => write!(f, "dyadic function"),
            Self::MonadicModifier => write!(f, "monadic modifier"),
            Self::DyadicModifier => write!(f, "dyadic modifier"),
        }
    }
}

/// A lexical token.
///
/// Tokens preserve source order and the line they start on. The `image` is
/// canonical: an ASCII alias and its unicode glyph produce the same image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind:  TokenKind,
    /// The canonical text of the token.
    pub image: String,
    /// The 1-based source line.
    pub line:  usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, image: impl Into<String>, line: usize) -> Self {
        Self { kind,
               image: image.into(),
               line }
    }

    /// Returns `true` unless the token is whitespace or a comment.
    ///
    /// The parser only ever looks at significant tokens.
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        !matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Converts source text into a sequence of tokens.
///
/// Whitespace and comments are kept so that a host can rebuild a highlighted
/// rendering of the input; see [`significant`] for the parser's view.
///
/// # Errors
/// Returns a [`LexError`] as soon as some input matches no pattern, or an
/// alias or glyph is unknown. No partial token sequence is returned.
///
/// # Example
/// ```
/// use aplfix::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("`3 add 4").unwrap();
/// let images: Vec<_> = tokens.iter().map(|t| t.image.as_str()).collect();
///
/// assert_eq!(images, ["¯3", " ", "+", " ", "4"]);
/// assert_eq!(tokens[2].kind, TokenKind::DyadicFunction);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        let Ok(lexeme) = lexeme else {
            let rest = &source[lexer.span().start..];
            return Err(LexError::UnrecognizedInput { snippet: rest.chars()
                                                                  .take(SNIPPET_LENGTH)
                                                                  .collect(),
                                                     line });
        };

        match lexeme {
            Lexeme::Other => scan_other(slice, line, &mut tokens)?,
            Lexeme::Binding => {
                let arity = slice.chars().nth(1).and_then(arity_digit);
                tokens.push(Token::new(TokenKind::Binding(arity), binding_image(arity), line));
            },
            _ => tokens.push(Token::new(simple_kind(lexeme), canonical_image(lexeme, slice), line)),
        }

        line += slice.matches('\n').count();
    }

    Ok(tokens)
}

/// Removes whitespace and comment tokens.
///
/// # Example
/// ```
/// use aplfix::interpreter::lexer::{lex, significant};
///
/// let tokens = lex("1 + 2 # sum").unwrap();
/// assert_eq!(significant(&tokens).len(), 3);
/// ```
#[must_use]
pub fn significant(tokens: &[Token]) -> Vec<Token> {
    tokens.iter().filter(|t| t.is_significant()).cloned().collect()
}

/// Maps every raw lexeme except `Other` and `Binding` to its token kind.
const fn simple_kind(lexeme: Lexeme) -> TokenKind {
    match lexeme {
        Lexeme::String => TokenKind::String,
        Lexeme::Character => TokenKind::Character,
        Lexeme::Identifier => TokenKind::Identifier,
        Lexeme::Comment => TokenKind::Comment,
        Lexeme::Whitespace => TokenKind::Whitespace,
        Lexeme::Newline => TokenKind::Newline,
        Lexeme::OpenParen => TokenKind::OpenParen,
        Lexeme::CloseParen => TokenKind::CloseParen,
        Lexeme::OpenArray => TokenKind::OpenArray,
        Lexeme::CloseArray => TokenKind::CloseArray,
        Lexeme::OpenList => TokenKind::OpenList,
        Lexeme::CloseList => TokenKind::CloseList,
        Lexeme::Separator => TokenKind::Separator,
        Lexeme::Ligature => TokenKind::Ligature,
        Lexeme::Binding => TokenKind::Binding(None),
        Lexeme::Other => TokenKind::MonadicFunction,
    }
}

/// Replaces ASCII punctuation spellings with their canonical glyphs.
fn canonical_image(lexeme: Lexeme, slice: &str) -> String {
    match lexeme {
        Lexeme::OpenList => "⟨".to_string(),
        Lexeme::CloseList => "⟩".to_string(),
        Lexeme::Separator => "⋄".to_string(),
        Lexeme::Ligature => "‿".to_string(),
        _ => slice.to_string(),
    }
}

const fn arity_digit(digit: char) -> Option<Arity> {
    match digit {
        '0' | '₀' => Some(Arity::Niladic),
        '1' | '₁' => Some(Arity::Monadic),
        '2' | '₂' => Some(Arity::Dyadic),
        _ => None,
    }
}

fn binding_image(arity: Option<Arity>) -> String {
    match arity {
        None => "←".to_string(),
        Some(Arity::Niladic) => "←₀".to_string(),
        Some(Arity::Monadic) => "←₁".to_string(),
        Some(Arity::Dyadic) => "←₂".to_string(),
    }
}

/// Re-scans an `Other` span left to right.
///
/// At each position the scanner tries, in order: a number (possibly negated
/// with `¯` or a backtick), a glyph alias of three or two lowercase letters,
/// and a single glyph character.
fn scan_other(span: &str, line: usize, tokens: &mut Vec<Token>) -> Result<(), LexError> {
    let mut rest = span;

    while let Some(first) = rest.chars().next() {
        if let Some(length) = number_length(rest) {
            let image = rest[..length].replace('`', "¯");
            tokens.push(Token::new(TokenKind::Number, image, line));
            rest = &rest[length..];
            continue;
        }

        if first.is_ascii_lowercase() {
            let run = rest.chars().take_while(char::is_ascii_lowercase).count();
            let found = [3, 2].into_iter()
                              .filter(|&n| n <= run)
                              .find_map(|n| glyph::by_alias(&rest[..n]).map(|g| (n, g)));

            let Some((length, glyph)) = found else {
                return Err(LexError::UnknownGlyphAlias { alias: rest[..run].to_string(),
                                                         line });
            };
            tokens.push(glyph_token(glyph, line));
            rest = &rest[length..];
            continue;
        }

        let symbol = if first == '`' { NEGATION_MARK } else { first };
        match glyph::by_symbol(symbol) {
            Some(glyph) if glyph.kind() != GlyphKind::Syntax => tokens.push(glyph_token(glyph, line)),
            _ => return Err(LexError::UnknownGlyph { glyph: first,
                                                     line }),
        }
        rest = &rest[first.len_utf8()..];
    }

    Ok(())
}

fn glyph_token(glyph: &glyph::Glyph, line: usize) -> Token {
    let kind = match glyph.kind() {
        GlyphKind::DyadicFunction => TokenKind::DyadicFunction,
        GlyphKind::MonadicModifier => TokenKind::MonadicModifier,
        GlyphKind::DyadicModifier => TokenKind::DyadicModifier,
        GlyphKind::MonadicFunction | GlyphKind::Syntax => TokenKind::MonadicFunction,
    };
    Token::new(kind, glyph.symbol.to_string(), line)
}

/// Returns the byte length of a number literal at the start of `text`.
///
/// Grammar: `[¯`]? digit+ ("." digit+)?`.
fn number_length(text: &str) -> Option<usize> {
    let sign = text.chars()
                   .next()
                   .filter(|&c| c == NEGATION_MARK || c == '`')
                   .map_or(0, char::len_utf8);
    let digits = |from: usize| text[from..].bytes().take_while(u8::is_ascii_digit).count();

    let integer = digits(sign);
    if integer == 0 {
        return None;
    }
    let mut end = sign + integer;

    if text[end..].starts_with('.') {
        let fraction = digits(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    Some(end)
}
