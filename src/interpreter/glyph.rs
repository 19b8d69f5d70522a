use crate::{
    ast::Arity,
    interpreter::primitive::{Modifier, Primitive},
};

/// Syntactic category of a glyph.
///
/// The four executable categories decide how the parser treats a glyph and
/// how a host colors it; syntax glyphs carry no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    /// A function taking one argument.
    MonadicFunction,
    /// A function taking two arguments.
    DyadicFunction,
    /// A modifier taking one operand.
    MonadicModifier,
    /// A modifier taking two operands.
    DyadicModifier,
    /// Punctuation: brackets, separator, binding marker, ligature.
    Syntax,
}

impl std::fmt::Display for GlyphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::MonadicFunction => "monadic function",
            Self::DyadicFunction => "dyadic function",
            Self::MonadicModifier => "monadic modifier",
            Self::DyadicModifier => "dyadic modifier",
            Self::Syntax => "syntax",
        };
        write!(f, "{name}")
    }
}

/// What a glyph does when evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Definition {
    /// A primitive function.
    Function(Primitive),
    /// A primitive modifier.
    Modifier(Modifier),
    /// Pure syntax.
    Syntax,
}

/// One record of the glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// The canonical symbol, as it appears in token images.
    pub symbol:     char,
    /// The ASCII spelling accepted by the lexer.
    pub alias:      &'static str,
    /// The human readable name.
    pub name:       &'static str,
    /// The executable definition.
    pub definition: Definition,
}

impl Glyph {
    /// Returns the syntactic category of the glyph.
    ///
    /// ## Example
    /// ```
    /// use aplfix::interpreter::glyph::{GlyphKind, by_symbol};
    ///
    /// let glyph = by_symbol('/').unwrap();
    /// assert_eq!(glyph.kind(), GlyphKind::MonadicModifier);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> GlyphKind {
        match self.definition {
            Definition::Function(primitive) => match primitive.arity() {
                Arity::Dyadic => GlyphKind::DyadicFunction,
                Arity::Monadic | Arity::Niladic => GlyphKind::MonadicFunction,
            },
            Definition::Modifier(modifier) => match modifier.arity() {
                Arity::Dyadic => GlyphKind::DyadicModifier,
                Arity::Monadic | Arity::Niladic => GlyphKind::MonadicModifier,
            },
            Definition::Syntax => GlyphKind::Syntax,
        }
    }
}

macro_rules! function {
    ($alias:literal, $symbol:literal, $name:literal, $primitive:ident) => {
        Glyph { symbol:     $symbol,
                alias:      $alias,
                name:       $name,
                definition: Definition::Function(Primitive::$primitive), }
    };
}

macro_rules! modifier {
    ($alias:literal, $symbol:literal, $name:literal, $modifier:ident) => {
        Glyph { symbol:     $symbol,
                alias:      $alias,
                name:       $name,
                definition: Definition::Modifier(Modifier::$modifier), }
    };
}

macro_rules! syntax {
    ($alias:literal, $symbol:literal, $name:literal) => {
        Glyph { symbol:     $symbol,
                alias:      $alias,
                name:       $name,
                definition: Definition::Syntax, }
    };
}

/// The glyph table.
///
/// This is the single registry shared by the lexer (aliases), the parser
/// (categories), the evaluator (definitions) and highlighting (names).
pub static GLYPHS: &[Glyph] = &[function!("eq", '=', "equal", Equal),
                                function!("ne", '≠', "not equal", NotEqual),
                                function!("grt", '>', "greater than", Greater),
                                function!("gte", '≥', "greater or equal", GreaterEqual),
                                function!("les", '<', "less than", Less),
                                function!("lte", '≤', "less or equal", LessEqual),
                                function!("lft", '⊣', "left argument", Left),
                                function!("rgt", '⊢', "right argument", Right),
                                function!("id", '⋅', "identity", Identity),
                                function!("add", '+', "add", Add),
                                function!("sub", '-', "subtract", Subtract),
                                function!("mul", '×', "multiply", Multiply),
                                function!("div", '÷', "divide", Divide),
                                function!("mod", '%', "modulo", Modulo),
                                function!("pow", '*', "power", Power),
                                function!("max", '↥', "maximum", Maximum),
                                function!("min", '↧', "minimum", Minimum),
                                function!("ng", '¯', "negate", Negate),
                                function!("not", '¬', "not", Not),
                                function!("abs", '|', "absolute value", Absolute),
                                function!("flo", '⌊', "floor", Floor),
                                function!("rou", '⁅', "round", Round),
                                function!("cei", '⌈', "ceiling", Ceiling),
                                function!("mat", '≡', "match", Match),
                                function!("nmt", '≢', "nomatch", NoMatch),
                                function!("iot", '⍳', "iota", Iota),
                                function!("len", '⧻', "length", Length),
                                function!("sha", '△', "shape", Shape),
                                function!("fla", ',', "flat", Flat),
                                function!("par", '⍮', "pair", Pair),
                                function!("cat", '⍪', "catenate", Catenate),
                                function!("res", '⍴', "reshape", Reshape),
                                function!("sel", '⊏', "select", Select),
                                function!("pic", '⊑', "pick", Pick),
                                modifier!("eac", '¨', "each", Each),
                                modifier!("bac", '˜', "backwards", Backwards),
                                modifier!("slf", '˙', "self", SelfApply),
                                modifier!("red", '/', "reduce", Reduce),
                                modifier!("sca", '\\', "scan", Scan),
                                modifier!("jot", '∘', "atop", Atop),
                                modifier!("ov", '○', "over", Over),
                                syntax!("[", '[', "open array"),
                                syntax!("]", ']', "close array"),
                                syntax!("(", '(', "open parenthesis"),
                                syntax!(")", ')', "close parenthesis"),
                                syntax!("{", '⟨', "open list"),
                                syntax!("}", '⟩', "close list"),
                                syntax!(";", '⋄', "separator"),
                                syntax!(":", '←', "binding"),
                                syntax!("_", '‿', "ligature")];

/// Looks up a glyph by its canonical symbol.
///
/// ## Example
/// ```
/// use aplfix::interpreter::glyph::by_symbol;
///
/// assert_eq!(by_symbol('⍴').unwrap().name, "reshape");
/// assert!(by_symbol('x').is_none());
/// ```
#[must_use]
pub fn by_symbol(symbol: char) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|glyph| glyph.symbol == symbol)
}

/// Looks up an executable glyph by its lowercase alias.
///
/// Syntax glyphs are not reachable by alias; their ASCII spellings are plain
/// punctuation handled by the lexer directly.
///
/// ## Example
/// ```
/// use aplfix::interpreter::glyph::by_alias;
///
/// assert_eq!(by_alias("res").unwrap().symbol, '⍴');
/// assert!(by_alias("zz").is_none());
/// ```
#[must_use]
pub fn by_alias(alias: &str) -> Option<&'static Glyph> {
    GLYPHS.iter()
          .filter(|glyph| glyph.definition != Definition::Syntax)
          .find(|glyph| glyph.alias == alias)
}
