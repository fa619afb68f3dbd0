//! End-to-end evaluation of expressions against an environment.

use rstest::rstest;
use ysh::{Environment, FatalError, Value, evaluate};

fn eval(expression: &str) -> Value {
    evaluate(expression, &mut Environment::new()).unwrap_or_else(|e| {
                                                     panic!("{expression:?} failed: {e}")
                                                 })
}

fn ints(ns: &[i64]) -> Value {
    Value::List(ns.iter().copied().map(Value::Int).collect())
}

/// `Int` and `Real` compare equal by value, so the case is checked first.
fn assert_same(actual: &Value, expected: &Value) {
    assert_eq!(actual.kind(), expected.kind(), "{actual} is not a {}", expected.kind());
    match (actual, expected) {
        (Value::List(_) | Value::Tuple(_), Value::List(_) | Value::Tuple(_)) => {
            let (actual, expected) = (actual.to_list(), expected.to_list());
            assert_eq!(actual.len(), expected.len());
            for (a, e) in actual.iter().zip(&expected) {
                assert_same(a, e);
            }
        },
        _ => assert_eq!(actual, expected),
    }
}

#[rstest]
#[case::precedence("(1 + 2 * 3)", Value::Int(7))]
#[case::grouping("((1 + 2) * 3)", Value::Int(9))]
#[case::power("2 ^ 3 ^ 2", Value::Real(64.0))]
#[case::real_literal("1.5 * 2", Value::Real(3.0))]
#[case::exponent_literal("1e2 + 1", Value::Real(101.0))]
#[case::string_repeat("\"ab\" * 2", Value::from("abab"))]
#[case::builtin_application("sqrt 16", Value::Real(4.0))]
#[case::nested_application("len (tail \"abcd\")", Value::Int(3))]
#[case::application_as_operand("1 + 2 * abs (0 - 3)", Value::Int(7))]
#[case::application_chain("abs (0 - 1) + 4 * 5", Value::Int(25))]
#[case::cons("1 : 2 : (tail (list 0))", ints(&[1, 2]))]
#[case::negative_by_subtraction("0 - 3", Value::Int(-3))]
#[case::int_division_stays_int("7 / 2", Value::Int(3))]
#[case::sequence("1; 2; 3", Value::Int(3))]
#[case::comparison("1 < 2", Value::Int(1))]
#[case::compare("\"b\" <=> \"a\"", Value::Int(1))]
#[case::type_of("type (1, 2)", Value::from("Tuple"))]
fn expressions(#[case] expression: &str, #[case] expected: Value) {
    assert_same(&eval(expression), &expected);
}

#[test]
fn assignment_rebinds_the_variable() {
    let mut env = Environment::new();
    env.assign("x", Value::Int(5));

    assert_same(&evaluate("x <- x + 1", &mut env).unwrap(), &Value::Int(6));
    assert_same(&env["x"], &Value::Int(6));
}

#[test]
fn chained_assignment_binds_both() {
    let mut env = Environment::new();

    assert_eq!(evaluate("a <- b <- 3", &mut env), Ok(Value::Int(3)));
    assert_eq!(env["a"], Value::Int(3));
    assert_eq!(env["b"], Value::Int(3));
}

#[test]
fn variables_hold_independent_copies() {
    let mut env = Environment::new();

    evaluate("a <- 1 : (tail (list 0)); b <- a; a <- 2 : a", &mut env).unwrap();
    assert_eq!(env["a"], ints(&[2, 1]));
    assert_eq!(env["b"], ints(&[1]));
}

#[test]
fn lambda_doubles() {
    let mut env = Environment::new();

    evaluate("f <- x -> \"x * 2\"", &mut env).unwrap();
    assert_eq!(evaluate("f 21", &mut env), Ok(Value::Int(42)));
    assert_eq!(evaluate("f $ 4", &mut env), Ok(Value::Int(8)));
    assert!(env.get("x").is_none());
}

#[test]
fn lambda_sees_the_environment_of_its_creation() {
    let mut env = Environment::new();

    evaluate("k <- 10; f <- x -> \"x + k\"; k <- 0", &mut env).unwrap();
    assert_eq!(evaluate("f 1", &mut env), Ok(Value::Int(11)));
}

#[test]
fn lambda_body_failure_is_an_error_value() {
    let mut env = Environment::new();

    evaluate("f <- x -> \"x + nope\"", &mut env).unwrap();
    let result = evaluate("f 1", &mut env).unwrap();
    assert!(result.as_error().is_some_and(|m| m.contains("nope")));
}

#[test]
fn environment_bindings_shadow_builtins() {
    let mut env = Environment::new();
    env.assign("len", Value::Int(3));

    assert_eq!(evaluate("len + 1", &mut env), Ok(Value::Int(4)));
}

#[test]
fn broadcast_keeps_shape_of_nested_lists() {
    let mut env = Environment::new();
    env.assign("m", Value::List(vec![ints(&[1, 2]), ints(&[3, 4])]));

    assert_eq!(evaluate("m * 10", &mut env),
               Ok(Value::List(vec![ints(&[10, 20]), ints(&[30, 40])])));
}

#[rstest]
#[case::division_by_zero("1 / 0", "Division by zero")]
#[case::list_size_mismatch("(list 1) + (1 : (list 2))", "List size mismatch")]
#[case::propagates("1 / 0 + 5 * 2", "Division by zero")]
#[case::assertion("assert 0", "Assertion failed")]
#[case::user_error("error \"custom\"", "custom")]
fn error_values(#[case] expression: &str, #[case] message: &str) {
    assert_eq!(eval(expression).as_error(), Some(message));
}

#[test]
fn error_values_can_be_stored_and_inspected() {
    let mut env = Environment::new();

    evaluate("e <- 1 / 0", &mut env).unwrap();
    assert_eq!(evaluate("is_error e", &mut env), Ok(Value::Int(1)));
    assert_eq!(evaluate("is_error 1", &mut env), Ok(Value::Int(0)));
}

#[rstest]
#[case::empty("", FatalError::EmptyExpression)]
#[case::empty_group("()", FatalError::EmptyExpression)]
#[case::unknown_variable("x + 1", FatalError::UnknownVariable { name: "x".into() })]
#[case::underflow("1 +", FatalError::StackUnderflow { operator: "+".into() })]
#[case::no_prefix_minus("(-3)", FatalError::StackUnderflow { operator: "-".into() })]
#[case::not_assignable("1 <- 2", FatalError::NotAssignable { operator: "<-".into() })]
fn fatal_errors(#[case] expression: &str, #[case] expected: FatalError) {
    assert_eq!(evaluate(expression, &mut Environment::new()), Err(expected));
}

#[rstest]
#[case::unbalanced("(1 + 2")]
#[case::stray_close("1 + 2)")]
#[case::bad_character("1 ? 2")]
#[case::leftover_operands("(1) (2)")]
#[case::literal_overflow("99999999999999999999 + 1")]
fn grammar_errors(#[case] expression: &str) {
    assert!(matches!(evaluate(expression, &mut Environment::new()),
                     Err(FatalError::Grammar { .. })));
}

#[test]
fn nested_comparison_mismatch_is_fatal() {
    let mut env = Environment::new();
    env.assign("a", Value::List(vec![Value::Int(1)]));
    env.assign("b", Value::List(vec![Value::from("1")]));

    assert!(matches!(evaluate("a = b", &mut env), Err(FatalError::TypeMismatch { .. })));
}

#[test]
fn failed_evaluation_keeps_earlier_bindings() {
    let mut env = Environment::new();

    assert!(evaluate("x <- 1; y + 1", &mut env).is_err());
    assert_eq!(env["x"], Value::Int(1));
}
