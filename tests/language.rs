use std::fs::{self};

use aplfix::{
    Environment, display,
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::parser::core::DEFAULT_MAX_DEPTH,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_blocks(&content).into_iter().enumerate() {
            count += 1;
            run_block(&block).unwrap_or_else(|e| {
                                 panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, block, e)
                             });
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Runs a fenced block line by line in one environment.
///
/// A line of the form `# => text` asserts the display of the value produced
/// by the statement before it.
fn run_block(block: &str) -> Result<(), String> {
    let mut env = Environment::new();
    let mut last = None;

    for line in block.lines() {
        if let Some(expected) = line.trim_start().strip_prefix("# =>") {
            let shown = last.as_ref().map(display).unwrap_or_default();
            if shown != expected.trim() {
                return Err(format!("expected `{}`, got `{shown}`", expected.trim()));
            }
            continue;
        }
        if let Some(value) = get_result(line, &mut env).map_err(|e| e.to_string())? {
            last = Some(value);
        }
    }
    Ok(())
}

fn extract_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```aplfix") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_output(src: &str, expected: &str) {
    let mut env = Environment::new();
    match get_result(src, &mut env) {
        Ok(Some(value)) => assert_eq!(display(&value), expected, "for `{src}`"),
        Ok(None) => panic!("Script `{src}` produced no value"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    let mut env = Environment::new();
    if get_result(src, &mut env).is_ok() {
        panic!("Script `{src}` succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let mut env = Environment::new();
    let err = get_result(src, &mut env).expect_err("expected a runtime error");
    err.downcast_ref::<RuntimeError>()
       .cloned()
       .unwrap_or_else(|| panic!("expected a runtime error, got {err}"))
}

#[test]
fn string_literal_round_trips() {
    assert_output("\"Hello, world!\"", "\"Hello, world!\"");
    assert_output("△ \"Hello, world!\"", "[13]");
    assert_output(r#""a\"b""#, r#""a\"b""#);
}

#[test]
fn fork_of_two_values_applies_the_function() {
    assert_output("2 + 3", "5");
    assert_output("2+3", "5");
    assert_output("2 add 3", "5");
}

#[test]
fn negative_numbers() {
    assert_output("¯3", "¯3");
    assert_output("`3 + 1", "¯2");
    assert_output("ng 3", "¯3");
    assert_output("0 - 0", "0");
}

#[test]
fn arithmetic() {
    assert_output("7 % 3", "1");
    assert_output("¯1 % 3", "2");
    assert_output("2 * 10", "1024");
    assert_output("1 ÷ 0", "∞");
    assert_output("⁅ 2.5", "3");
    assert_output("⁅ ¯2.5", "¯2");
    assert_output("⌊ 2.7", "2");
    assert_output("⌈ 2.1", "3");
    assert_output("| ¯4", "4");
    assert_output("¬ 0‿1", "[1 ⋄ 0]");
    assert_output("3 ↥ 5", "5");
    assert_output("3 ↧ 5", "3");
}

#[test]
fn character_arithmetic() {
    assert_output("'a' + 1", "'b'");
    assert_output("1 + 'a'", "'b'");
    assert_output("'c' - 'a'", "2");
    assert_output("\"abc\" + 1", "\"bcd\"");
    assert_failure("'a' + 'b'");
}

#[test]
fn comparisons() {
    assert_output("3 > 1‿5", "[1 ⋄ 0]");
    assert_output("'a' < 'b'", "1");
    assert_output("1 = 'a'", "0");
    assert_output("1 ≠ 'a'", "1");
    assert_output("2 ≤ 2", "1");
    assert_output("2 ≥ 3", "0");
    assert_failure("1 < 'a'");
}

#[test]
fn structural_matching() {
    assert_output("1‿2 ≡ 1‿2", "1");
    assert_output("\"a\" ≡ 'a'", "0");
    assert_output("1‿2 ≢ 1‿3", "1");
}

#[test]
fn reshape_cycles_and_truncates() {
    assert_output("5 ⍴ 1‿2‿3", "[1 ⋄ 2 ⋄ 3 ⋄ 1 ⋄ 2]");
    assert_output("[5] ⍴ \"abc\"", "\"abcab\"");
    assert_output("2 ⍴ 1‿2‿3", "[1 ⋄ 2]");
    assert_output("3 res 1_2", "[1 ⋄ 2 ⋄ 1]");
    assert_output("2‿2 ⍴ ⍳4", "[[0 ⋄ 1] ⋄ [2 ⋄ 3]]");
}

#[test]
fn oversized_shapes_are_rejected() {
    assert!(matches!(runtime_error("⍳ 4294967296‿4294967296‿2"), RuntimeError::LiteralTooLarge { line: 1 }));
    assert!(matches!(runtime_error("4294967296‿4294967296‿2 ⍴ 1"),
                     RuntimeError::LiteralTooLarge { line: 1 }));
    assert!(matches!(runtime_error("⍳ 1000000000000"), RuntimeError::LiteralTooLarge { .. }));
    assert_output("⧻ ⍳ 0‿3", "0");
}

#[test]
fn catenate_promotes_ranks() {
    assert_output("1‿2‿3 ⍪ 4", "[1 ⋄ 2 ⋄ 3 ⋄ 4]");
    assert_output("△ 1‿2‿3 ⍪ 4", "[4]");
    assert_output("0 ⍪ 1‿2", "[0 ⋄ 1 ⋄ 2]");
    assert_output("(2‿2 ⍴ ⍳4) ⍪ 9", "[[0 ⋄ 1] ⋄ [2 ⋄ 3] ⋄ [9 ⋄ 9]]");
    assert_output("(2‿2 ⍴ ⍳4) ⍪ 7‿8", "[[0 ⋄ 1] ⋄ [2 ⋄ 3] ⋄ [7 ⋄ 8]]");
    assert_output("1 ⍪ 2", "[1 ⋄ 2]");
    assert_failure("(2‿2 ⍴ ⍳4) ⍪ 1‿2‿3");
}

#[test]
fn catenate_does_not_modify_its_arguments() {
    assert_output("A ← 1‿2 ⋄ B ← A ⍪ 3 ⋄ ⧻ A", "2");
}

#[test]
fn structure_queries() {
    assert_output("⍳ 3", "[0 ⋄ 1 ⋄ 2]");
    assert_output("⍳ 2‿3", "[[0 ⋄ 1 ⋄ 2] ⋄ [3 ⋄ 4 ⋄ 5]]");
    assert_output("△ 5", "[]");
    assert_output("⧻ 5", "0");
    assert_output("⧻ 2‿3 ⍴ 0", "2");
    assert_output(", 2‿2 ⍴ ⍳4", "[0 ⋄ 1 ⋄ 2 ⋄ 3]");
    assert_output(", 5", "[5]");
    assert_output("1 ⍮ 'a'", "[1 ⋄ 'a']");
    assert_output("(△ 5) ⍴ 7", "⊂7");
}

#[test]
fn select_and_pick() {
    assert_output("1‿¯1 ⊏ \"abc\"", "\"bc\"");
    assert_output("0 ⊏ 2‿2 ⍴ ⍳4", "[0 ⋄ 1]");
    assert_output("1‿0 ⊑ 2‿2 ⍴ ⍳4", "2");
    assert_output("2 ⊑ \"abc\"", "'c'");
    assert_output("⟨0‿0 ⋄ 1‿1⟩ ⊑ 2‿2 ⍴ ⍳4", "[0 ⋄ 3]");
    assert_failure("5 ⊏ 1‿2");
    assert_failure("0 ⊑ 2‿2 ⍴ ⍳4");
}

#[test]
fn modifiers() {
    assert_output("+/ 1‿2‿3", "6");
    assert_output("-/ 1‿2‿3", "2");
    assert_output("+\\ 1‿2‿3", "[1 ⋄ 3 ⋄ 6]");
    assert_output("⍳¨ 1‿2", "[[0] ⋄ [0 ⋄ 1]]");
    assert_output("2 -˜ 5", "3");
    assert_output("×˙ 4", "16");
    assert_output("1‿2 +○| ¯3‿4", "[4 ⋄ 6]");
    assert_output("-∘2 5", "3");
    assert_output("2∘- 5", "¯3");
    assert_output("⌊∘÷", "dyadic function");
    assert_output("+/ 2‿2 ⍴ ⍳4", "[2 ⋄ 4]");
}

#[test]
fn scan_reduces_every_prefix() {
    assert_output("-\\ 1‿2‿3", "[1 ⋄ ¯1 ⋄ 2]");
    assert_output("+\\ 2‿2 ⍴ ⍳4", "[[0 ⋄ 1] ⋄ [2 ⋄ 4]]");
    assert_output("+\\ ⍳0", "[]");
    for x in ["1‿2‿3", "5‿¯2‿7‿0.5", "⟨1‿2 ⋄ 3‿4⟩"] {
        assert_output(&format!("(¯1 ⊏ -\\ {x}) ≡ -/ {x}"), "1");
    }
}

#[test]
fn scan_keeps_the_frame_of_a_vector() {
    assert_output("⍪\\ 1‿2‿3", "[1 ⋄ [1 ⋄ 2] ⋄ [1 ⋄ 2 ⋄ 3]]");
    assert_output("⧻ ⍮\\ 1‿2‿3", "3");
    assert_output("△ +\\ ⟨1‿2 ⋄ 3‿4⟩", "[2]");
    assert_output("+\\ ⟨1‿2 ⋄ 3‿4⟩", "[[1 ⋄ 2] ⋄ [4 ⋄ 6]]");
}

#[test]
fn reduce_requires_a_dyadic_operand() {
    assert!(matches!(runtime_error("⌊/ 1‿2"), RuntimeError::ExpectedFunction { line: 1, .. }));
    assert_failure("⌊\\ 1‿2");
    assert_failure("+/ 5");
    assert_failure("+/ ⍳0");
}

#[test]
fn bindings() {
    assert_output("A ← 3 ⋄ A × A", "9");
    assert_output("A ← B ← 2 ⋄ A + B", "4");
    assert_output("A ← 2\nA × 3", "6");
    assert_output("F ←₁ ⌊ ⋄ F 2.5", "2");
    assert_output("Avg ← +/ ÷ ⧻ ⋄ Avg 1‿2‿3‿4", "2.5");
}

#[test]
fn declared_arity_is_checked() {
    assert!(matches!(runtime_error("F ←₂ ⌊"),
                     RuntimeError::ArityMismatch { declared: 2,
                                                   actual: 1,
                                                   .. }));
    assert_failure("N ←₀ +");
}

#[test]
fn bindings_persist_across_submissions() {
    let mut env = Environment::new();
    get_result("Sq ← ×˙", &mut env).unwrap();
    let value = get_result("Sq 7", &mut env).unwrap().unwrap();
    assert_eq!(display(&value), "49");
}

#[test]
fn failed_binding_leaves_environment_unchanged() {
    let mut env = Environment::new();
    get_result("A ← 1", &mut env).unwrap();
    assert!(get_result("A ← 1 2", &mut env).is_err());
    let value = get_result("A", &mut env).unwrap().unwrap();
    assert_eq!(display(&value), "1");
}

#[test]
fn literals() {
    assert_output("⟨1 ⋄ \"ab\"⟩", "[1 ⋄ \"ab\"]");
    assert_output("{1 ; \"ab\"}", "[1 ⋄ \"ab\"]");
    assert_output("[1‿2 ⋄ 3‿4]", "[[1 ⋄ 2] ⋄ [3 ⋄ 4]]");
    assert_output("[1\n⋄ 2\n]", "[1 ⋄ 2]");
    assert_failure("[1‿2 ⋄ 3]");
    assert_failure("[1‿2 ⋄ 3‿4‿5]");
}

#[test]
fn display_of_values() {
    assert_output("+", "dyadic function");
    assert_output("+/", "monadic function");
    assert_output("'\\n'", "'\\n'");
    assert_output("⍳0", "[]");
    assert_output("0.5", "0.5");
}

#[test]
fn arrays_with_an_empty_trailing_axis_show_their_cells() {
    assert_output("3‿0 ⍴ 1", "[[] ⋄ [] ⋄ []]");
    assert_output("△ 3‿0 ⍴ 1", "[3 ⋄ 0]");
    assert_output("0‿3 ⍴ 1", "[]");
    assert_output("⍳ 2‿0‿2", "[[] ⋄ []]");
}

#[test]
fn comments_and_empty_programs() {
    assert_output("1 + 2 # three", "3");
    let mut env = Environment::new();
    assert!(get_result("", &mut env).unwrap().is_none());
    assert!(get_result("# nothing", &mut env).unwrap().is_none());
}

#[test]
fn malformed_trains_fail() {
    assert!(matches!(runtime_error("1 2"), RuntimeError::NiladOutsideOfFork { line: 1 }));
    assert!(matches!(runtime_error("1 +"), RuntimeError::NiladOutsideOfFork { .. }));
}

#[test]
fn unclosed_array_reports_its_line() {
    let mut env = Environment::new();
    let err = get_result("\n\n[1⋄2", &mut env).unwrap_err();
    let parse_error = err.downcast_ref::<ParseError>().expect("expected a parse error");
    assert_eq!(parse_error.line(), 3);
}

#[test]
fn deepest_accepted_nesting_evaluates() {
    let levels = DEFAULT_MAX_DEPTH;
    let wrapped = |open: &str, close: &str| format!("{}1{}", open.repeat(levels), close.repeat(levels));

    let brackets = wrapped("[", "]");
    assert_output(&wrapped("(", ")"), "1");
    assert_output(&brackets, &brackets);
    assert_output(&wrapped("⟨", "⟩"), &brackets);
}

#[test]
fn runtime_failures() {
    assert!(matches!(runtime_error("X + 1"), RuntimeError::UnknownVariable { .. }));
    assert!(matches!(runtime_error("1‿2 + 1‿2‿3"), RuntimeError::ShapeMismatch { .. }));
    assert!(matches!(runtime_error("'a' < 1‿2"), RuntimeError::TypeError { .. }));
}

#[test]
fn lexing_failures_stop_the_pipeline() {
    assert_failure("1 $ 2");
    assert_failure("zz 1");
    assert_failure("\"unterminated");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.aplfix").expect("missing file");
    assert_output(&script, "[1 ⋄ 4 ⋄ 9 ⋄ 16 ⋄ 25]");
}
