use aplfix::{
    ast::{Arity, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, lex},
        parser::{
            core::{DEFAULT_MAX_DEPTH, Depth, parse, parse_expression, parse_with_limit},
            primary::parse_primary,
        },
        primitive::{Modifier, Primitive},
    },
};

fn parse_source(source: &str) -> Result<Vec<Node>, ParseError> {
    parse(&lex(source).expect("source should lex"))
}

fn single(source: &str) -> Node {
    let mut program = parse_source(source).unwrap_or_else(|e| panic!("`{source}` failed: {e}"));
    assert_eq!(program.len(), 1, "`{source}` should hold one statement");
    program.remove(0)
}

#[test]
fn single_tine_collapses() {
    assert_eq!(single("5"),
               Node::Number { value: 5.0,
                              line:  1, });
}

#[test]
fn train_keeps_tines_unresolved() {
    let Node::Expression { tines, line } = single("1 + 2") else {
        panic!("expected an expression");
    };
    assert_eq!(line, 1);
    assert_eq!(tines.len(), 3);
    assert_eq!(tines[1],
               Node::Glyph { primitive: Primitive::Add,
                             arity:     Arity::Dyadic,
                             line:      1, });
}

#[test]
fn strands() {
    let Node::Strand { elements, .. } = single("1‿2‿'c'") else {
        panic!("expected a strand");
    };
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[2],
               Node::Character { value: 'c',
                                 line:  1, });
}

#[test]
fn monadic_modifiers_stack() {
    let Node::MonadicModifier { modifier, operand, .. } = single("+/¨") else {
        panic!("expected a modifier");
    };
    assert_eq!(modifier, Modifier::Each);
    assert!(matches!(*operand,
                     Node::MonadicModifier { modifier: Modifier::Reduce,
                                             .. }));
}

#[test]
fn dyadic_modifier_takes_one_right_operand() {
    let Node::Expression { tines, .. } = single("⌊∘÷ 2") else {
        panic!("expected an expression");
    };
    assert_eq!(tines.len(), 2);
    assert!(matches!(&tines[0],
                     Node::DyadicModifier { modifier: Modifier::Atop,
                                            .. }));
}

#[test]
fn missing_modifier_operand() {
    assert_eq!(parse_source("⌊∘"),
               Err(ParseError::MissingOperand { modifier: '∘',
                                                line:     1, }));
}

#[test]
fn bindings() {
    assert_eq!(single("A ←₂ +"),
               Node::Binding { name:  "A".to_string(),
                               arity: Some(Arity::Dyadic),
                               value: Box::new(Node::Glyph { primitive: Primitive::Add,
                                                             arity:     Arity::Dyadic,
                                                             line:      1, }),
                               line:  1, });

    let Node::Binding { value, .. } = single("A ← B ← 3") else {
        panic!("expected a binding");
    };
    assert!(matches!(*value, Node::Binding { .. }));
}

#[test]
fn statements_are_separated_by_diamonds_and_newlines() {
    assert_eq!(parse_source("1\n2 ⋄ 3\n\n").unwrap().len(), 3);
    assert_eq!(parse_source("⋄\n1").unwrap().len(), 1);
}

#[test]
fn parsing_stops_at_a_stray_token() {
    assert_eq!(parse_source("1 ) 2").unwrap().len(), 1);
}

#[test]
fn literals() {
    assert!(matches!(single("[1 ⋄ 2]"), Node::ArrayLiteral { ref elements, .. } if elements.len() == 2));
    assert!(matches!(single("⟨1 ⋄ \"a\"⟩"), Node::ListLiteral { ref elements, .. } if elements.len() == 2));
    assert!(matches!(single("[1\n⋄\n2\n]"), Node::ArrayLiteral { ref elements, .. } if elements.len() == 2));
}

#[test]
fn newlines_are_insignificant_in_parentheses() {
    assert!(matches!(single("(1\n+ 2)"), Node::Expression { ref tines, .. } if tines.len() == 3));
}

#[test]
fn empty_constructs_are_errors() {
    assert_eq!(parse_source("()"), Err(ParseError::EmptyParentheses { line: 1 }));
    assert_eq!(parse_source("[]"),
               Err(ParseError::EmptyLiteral { bracket: '[',
                                              line:    1, }));
    assert_eq!(parse_source("⟨⟩"),
               Err(ParseError::EmptyLiteral { bracket: '⟨',
                                              line:    1, }));
}

#[test]
fn trailing_separator_is_an_error() {
    assert_eq!(parse_source("[1 ⋄ ]"), Err(ParseError::TrailingSeparator { line: 1 }));
}

#[test]
fn unclosed_bracket_reports_the_opening_line() {
    let err = parse_source("1\n[1 ⋄ 2").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 2, .. }));

    let err = parse_source("(1 + 2").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 1, .. }));
}

#[test]
fn wrong_closing_bracket() {
    let err = parse_source("[1 ⋄ 2)").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref got, .. } if got == ")"));
}

#[test]
fn nesting_is_limited() {
    let tokens = lex("((((1))))").unwrap();
    assert!(parse_with_limit(&tokens, 4).is_ok());
    assert_eq!(parse_with_limit(&tokens, 3),
               Err(ParseError::NestingTooDeep { max:  3,
                                                line: 1, }));
}

fn nested(open: &str, close: &str, levels: usize) -> String {
    format!("{}1{}", open.repeat(levels), close.repeat(levels))
}

#[test]
fn default_nesting_limit_parses_on_a_test_thread() {
    for (open, close) in [("(", ")"), ("[", "]"), ("⟨", "⟩")] {
        let tokens = lex(&nested(open, close, DEFAULT_MAX_DEPTH)).unwrap();
        assert!(parse(&tokens).is_ok(), "{open} nested {DEFAULT_MAX_DEPTH} deep");

        let tokens = lex(&nested(open, close, DEFAULT_MAX_DEPTH + 1)).unwrap();
        assert_eq!(parse(&tokens),
                   Err(ParseError::NestingTooDeep { max:  DEFAULT_MAX_DEPTH,
                                                    line: 1, }));
    }
}

#[test]
fn brackets_count_towards_the_limit() {
    let depth = Depth::new(1, 1).enter_brackets(1).unwrap();
    assert!(depth.bracketed);
    assert_eq!(depth.current, 1);
    assert_eq!(depth.enter_brackets(1),
               Err(ParseError::NestingTooDeep { max:  1,
                                                line: 1, }));
}

#[test]
fn running_out_of_input_reports_the_last_line() {
    let tokens: Vec<Token> = Vec::new();
    let mut iter = tokens.iter().peekable();
    assert_eq!(parse_expression(&mut iter, Depth::new(8, 3)),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string(),
                                                      line:     3, }));
    assert_eq!(parse_primary(&mut iter, Depth::new(8, 2)),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string(),
                                                      line:     2, }));
}

#[test]
fn whitespace_and_comments_are_ignored() {
    let tokens = lex("1 + 2 # sum").unwrap();
    assert_eq!(parse(&tokens).unwrap().len(), 1);
}
