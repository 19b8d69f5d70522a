use aplfix::{
    Environment,
    ast::Arity,
    display,
    error::RuntimeError,
    get_result,
    interpreter::{
        evaluator::train::{Combinator, fold, plan},
        primitive::Primitive,
        value::{core::Val, function::Function},
    },
};

fn eval(src: &str) -> Val {
    let mut env = Environment::new();
    get_result(src, &mut env).unwrap_or_else(|e| panic!("`{src}` failed: {e}"))
                             .unwrap_or_else(|| panic!("`{src}` produced no value"))
}

fn shown(src: &str) -> String {
    display(&eval(src))
}

fn primitive(p: Primitive) -> Val {
    Val::Function(Function::Primitive(p))
}

#[test]
fn dyadic_fork_applies_both_sides() {
    // (x F y) G (x H y)
    assert_eq!(shown("2 (+ × -) 5"), "¯21");
    assert_eq!(shown("4 (+ - ×) 2"), "¯2");
}

#[test]
fn monadic_fork_applies_both_sides() {
    assert_eq!(shown("(⌊ + ⌈) 2.5"), "5");
    assert_eq!(shown("(+/ ÷ ⧻) 1‿2‿3‿4"), "2.5");
}

#[test]
fn values_with_a_dyadic_function_form_a_niladic_fork() {
    assert_eq!(shown("⍳ 3 + 1"), "[0 ⋄ 1 ⋄ 2 ⋄ 3]");
    assert_eq!(shown("¯ 1 - 5"), "4");
}

#[test]
fn trains_of_functions_are_values() {
    assert_eq!(eval("(+/ ÷ ⧻)").arity(), Arity::Monadic);
    assert_eq!(eval("(+ ×)").arity(), Arity::Dyadic);
    assert_eq!(eval("(¯ ⌊)").arity(), Arity::Monadic);
    assert_eq!(shown("(+ ×)"), "dyadic function");
}

#[test]
fn dyadic_atop_over_a_monadic_function_is_a_hook() {
    assert_eq!(shown("(+ ⍳) 3"), "[3 ⋄ 4 ⋄ 5]");
}

#[test]
fn atop_over_a_dyadic_function() {
    assert_eq!(shown("2 (+ ×) 3"), "8");
    assert_eq!(shown("2 (¯ +) 3"), "¯5");
}

#[test]
fn lower_arity_tines_see_the_trailing_arguments() {
    assert_eq!(shown("3 (⍳ ⍪ +) 1"), "[0 ⋄ 4]");
    assert_eq!(shown("5 (1 + ⊢) 2"), "3");
}

#[test]
fn a_value_without_a_dyadic_function_is_rejected() {
    let mut env = Environment::new();
    for src in ["(1 +)", "1 2", "⌊ 1 2"] {
        let err = get_result(src, &mut env).expect_err(src);
        assert_eq!(err.downcast_ref::<RuntimeError>(),
                   Some(&RuntimeError::NiladOutsideOfFork { line: 1 }),
                   "for `{src}`");
    }
}

#[test]
fn planning_groups_tines() {
    let tines = vec![primitive(Primitive::Iota), Val::Number(3.0), primitive(Primitive::Add), Val::Number(1.0)];
    let (combinators, terminal) = plan(tines, 1).unwrap();

    assert_eq!(combinators,
               [Combinator::Atop { outer: Function::Primitive(Primitive::Iota) },
                Combinator::Fork { left:   Function::Constant(Box::new(Val::Number(3.0))),
                                   center: Function::Primitive(Primitive::Add), }]);
    assert_eq!(terminal, Function::Constant(Box::new(Val::Number(1.0))));
}

#[test]
fn folding_nests_to_the_right() {
    let (combinators, terminal) = plan(vec![primitive(Primitive::Negate), Val::Number(3.0)], 1).unwrap();
    let f = fold(combinators, terminal);

    assert_eq!(f,
               Function::Atop { outer: Box::new(Function::Primitive(Primitive::Negate)),
                                inner: Box::new(Function::Constant(Box::new(Val::Number(3.0)))), });
    assert_eq!(f.arity(), Arity::Niladic);
    assert_eq!(f.settle(1).unwrap(), Val::Number(-3.0));
}

#[test]
fn calling_with_the_wrong_argument_count_fails() {
    let add = Function::Primitive(Primitive::Add);
    assert_eq!(add.call(&[Val::Number(1.0)], 7),
               Err(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                         found:    1,
                                                         line:     7, }));
}

#[test]
fn bound_trains_are_reusable() {
    let mut env = Environment::new();
    get_result("Inc ← +∘1", &mut env).unwrap();
    get_result("Avg ←₁ +/ ÷ ⧻", &mut env).unwrap();

    let inc = get_result("Inc 1‿2", &mut env).unwrap().unwrap();
    assert_eq!(display(&inc), "[2 ⋄ 3]");

    let avg = get_result("Avg 2‿4 ⋄ Avg 1‿2‿3", &mut env).unwrap().unwrap();
    assert_eq!(display(&avg), "2");
}
