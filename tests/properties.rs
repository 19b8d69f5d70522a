use aplfix::{
    Environment, display, get_result, lex, parse,
    interpreter::{
        primitive::{arithmetic::add, structure::reshape},
        value::core::{Array, Val},
    },
};
use proptest::prelude::*;

const MAX_INPUT_BYTES: usize = 128;

fn run(src: &str) -> Result<Option<Val>, String> {
    let mut env = Environment::new();
    get_result(src, &mut env).map_err(|e| e.to_string())
}

proptest! {
    #[test]
    fn lexing_and_parsing_never_panic(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        if let Ok(tokens) = lex(&input) {
            let _ = parse(&tokens);
        }
    }

    #[test]
    fn token_lines_never_decrease(input in "[0-9 +⍳\n#a-z]{0,64}") {
        if let Ok(tokens) = lex(&input) {
            prop_assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
        }
    }

    #[test]
    fn numbers_survive_display_and_lexing(n in -1.0e6f64..1.0e6) {
        let shown = display(&Val::Number(n));
        prop_assert_eq!(run(&shown), Ok(Some(Val::Number(n))));
    }

    #[test]
    fn trains_of_values_evaluate_right_to_left(a in -50i32..50, b in -50i32..50, c in -50i32..50) {
        let src = format!("{} + {} × {}",
                          display(&Val::Number(f64::from(a))),
                          display(&Val::Number(f64::from(b))),
                          display(&Val::Number(f64::from(c))));
        prop_assert_eq!(run(&src), Ok(Some(Val::Number(f64::from(a + b * c)))));
    }

    #[test]
    fn evaluation_is_deterministic(values in proptest::collection::vec(0u8..100, 1..8)) {
        let strand = values.iter().map(u8::to_string).collect::<Vec<_>>().join("‿");
        let src = format!("(+/ ÷ ⧻) {strand}");
        prop_assert_eq!(run(&src), run(&src));
    }

    #[test]
    fn scalars_extend_over_arrays(a in -1.0e3f64..1.0e3, ys in proptest::collection::vec(-1.0e3f64..1.0e3, 0..16)) {
        let array = Val::Array(Array::numbers(ys.iter().copied()));
        let expected = Val::Array(Array::numbers(ys.iter().map(|y| a + y)));

        prop_assert_eq!(add(&Val::Number(a), &array, 1), Ok(expected.clone()));
        prop_assert_eq!(add(&array, &Val::Number(a), 1), Ok(expected));
    }

    #[test]
    fn reshape_cycles_through_the_source(n in 0usize..40, ys in proptest::collection::vec(0u16..1000, 1..10)) {
        let source = Val::Array(Array::numbers(ys.iter().map(|&y| f64::from(y))));
        let count = u16::try_from(n).map(f64::from).unwrap_or_default();
        let Ok(Val::Array(result)) = reshape(&Val::Number(count), &source, 1) else {
            return Err(TestCaseError::fail("reshape should produce an array"));
        };

        prop_assert_eq!(result.shape(), &[n]);
        for (i, v) in result.data().iter().enumerate() {
            prop_assert_eq!(v, &Val::Number(f64::from(ys[i % ys.len()])));
        }
    }
}
