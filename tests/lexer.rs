use aplfix::{
    ast::Arity,
    error::LexError,
    interpreter::lexer::{Token, TokenKind, lex, significant},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn images(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.image.as_str()).collect()
}

#[test]
fn simple_expression() {
    let tokens = lex("1 + 2").unwrap();
    assert_eq!(kinds(&tokens),
               [TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::DyadicFunction,
                TokenKind::Whitespace,
                TokenKind::Number]);
}

#[test]
fn images_reproduce_canonical_source() {
    let source = "A ← 1‿2 ⍪ ⍳3 # note\n[\"x\" ⋄ 'y']";
    let tokens = lex(source).unwrap();
    assert_eq!(images(&tokens).concat(), source);
}

#[test]
fn aliases_resolve_to_glyphs() {
    let tokens = significant(&lex("iot 3 addsub").unwrap());
    assert_eq!(images(&tokens), ["⍳", "3", "+", "-"]);
    assert_eq!(tokens[0].kind, TokenKind::MonadicFunction);
    assert_eq!(tokens[2].kind, TokenKind::DyadicFunction);
}

#[test]
fn modifier_kinds() {
    let tokens = lex("/∘").unwrap();
    assert_eq!(kinds(&tokens), [TokenKind::MonadicModifier, TokenKind::DyadicModifier]);
}

#[test]
fn ascii_punctuation_is_canonicalized() {
    let tokens = lex("{1;2}_3").unwrap();
    assert_eq!(images(&tokens), ["⟨", "1", "⋄", "2", "⟩", "‿", "3"]);
}

#[test]
fn binding_markers_carry_arity() {
    let tokens = lex("F:1 ⌊").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Binding(Some(Arity::Monadic)));
    assert_eq!(tokens[1].image, "←₁");

    let tokens = lex("G ←₂ +").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Binding(Some(Arity::Dyadic)));

    let tokens = lex("H ← 5").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Binding(None));
}

#[test]
fn negative_numbers() {
    let tokens = lex("`5 ¯2.5 `").unwrap();
    assert_eq!(images(&tokens), ["¯5", " ", "¯2.5", " ", "¯"]);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::MonadicFunction);
}

#[test]
fn number_stops_before_glyphs() {
    let tokens = lex("2.5×3").unwrap();
    assert_eq!(images(&tokens), ["2.5", "×", "3"]);

    assert_eq!(lex("3."),
               Err(LexError::UnknownGlyph { glyph: '.',
                                            line:  1, }));
}

#[test]
fn literals_and_identifiers() {
    let tokens = lex(r#""a\"b" 'c' Name"#).unwrap();
    assert_eq!(kinds(&significant(&tokens)),
               [TokenKind::String, TokenKind::Character, TokenKind::Identifier]);
    assert_eq!(tokens[0].image, r#""a\"b""#);
}

#[test]
fn lines_are_counted() {
    let tokens = lex("1\n2 \"a\nb\" 3").unwrap();
    let lines: Vec<_> = significant(&tokens).iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 1, 2, 2, 3]);
}

#[test]
fn significant_drops_whitespace_and_comments() {
    let tokens = lex("1 # one\n2").unwrap();
    assert_eq!(kinds(&significant(&tokens)),
               [TokenKind::Number, TokenKind::Newline, TokenKind::Number]);
}

#[test]
fn unknown_glyph_is_an_error() {
    assert_eq!(lex("1 $ 2"),
               Err(LexError::UnknownGlyph { glyph: '$',
                                            line:  1, }));
}

#[test]
fn unknown_alias_is_an_error() {
    assert_eq!(lex("\nzz"),
               Err(LexError::UnknownGlyphAlias { alias: "zz".to_string(),
                                                 line:  2, }));
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex("1 \"abc").unwrap_err();
    assert!(matches!(err, LexError::UnrecognizedInput { line: 1, .. }));
}
