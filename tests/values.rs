//! Value model tests: tuples, conversions, truthiness, raw comparisons and
//! display.

use std::cmp::Ordering;

use rstest::rstest;
use ysh::{
    FatalError, Value,
    interpreter::value::{core::ValueKind, func::Func, tuple::Tuple},
};

fn ints(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::Int).collect()
}

#[test]
fn tuple_from_list_keeps_order() {
    let values = ints(&[1, 2, 3]);
    let tuple = values.iter().cloned().collect::<Tuple>();

    assert_eq!(tuple.to_list(), values);
    assert_eq!(tuple.len(), 3);
    assert_eq!(tuple.head(), Some(&Value::Int(1)));
}

#[test]
fn tuple_clone_keeps_order_and_is_independent() {
    let original = Tuple::from(ints(&[1, 2, 3]));
    let mut copy = original.clone();

    assert_eq!(copy.to_list(), original.to_list());

    copy.push(Value::Int(0));
    assert_eq!(original.len(), 3);
    assert_eq!(copy.to_list(), ints(&[0, 1, 2, 3]));
}

#[test]
fn tuple_push_and_pop_work_at_the_head() {
    let mut tuple = Tuple::new();
    tuple.push(Value::Int(2));
    tuple.push(Value::Int(1));

    assert_eq!(tuple.pop(), Some(Value::Int(1)));
    assert_eq!(tuple.pop(), Some(Value::Int(2)));
    assert_eq!(tuple.pop(), None);
    assert!(tuple.is_empty());
}

#[test]
fn tuple_tail_skips_the_head() {
    let tuple = Tuple::from(ints(&[1, 2, 3]));

    assert_eq!(tuple.tail().map(Tuple::to_list), Some(ints(&[2, 3])));
    assert!(Tuple::new().tail().is_none());
}

#[test]
fn tuple_concat_is_associative() {
    let a = Tuple::from(ints(&[1]));
    let b = Tuple::from(ints(&[2, 3]));
    let c = Tuple::from(ints(&[4]));

    assert_eq!(a.concat(&b).concat(&c), a.concat(&b.concat(&c)));
    assert_eq!(a.concat(&Tuple::new()), a);
}

#[test]
fn long_tuples_drop_without_recursion() {
    let tuple = (0..200_000).map(Value::Int).collect::<Tuple>();
    assert_eq!(tuple.len(), 200_000);
    drop(tuple);
}

#[test]
fn owned_iteration_yields_head_to_tail() {
    let tuple = Tuple::from(ints(&[1, 2, 3]));
    assert_eq!(tuple.into_iter().collect::<Vec<_>>(), ints(&[1, 2, 3]));
}

#[rstest]
#[case::int(Value::Int(1), ValueKind::Int, "Int")]
#[case::real(Value::Real(1.0), ValueKind::Real, "Real")]
#[case::str(Value::from("x"), ValueKind::Str, "Str")]
#[case::list(Value::List(vec![]), ValueKind::List, "List")]
#[case::tuple(Value::Tuple(Tuple::new()), ValueKind::Tuple, "Tuple")]
#[case::func(Value::Func(Func::constant(Value::Int(0))), ValueKind::Func, "Func")]
#[case::error(Value::Error("e".into()), ValueKind::Error, "Error")]
fn kinds_and_type_names(#[case] value: Value, #[case] kind: ValueKind, #[case] name: &str) {
    assert_eq!(value.kind(), kind);
    assert_eq!(value.type_name(), name);
}

#[rstest]
#[case::zero(Value::Int(0), false)]
#[case::nonzero(Value::Int(-1), true)]
#[case::real_zero(Value::Real(0.0), false)]
#[case::empty_string(Value::from(""), false)]
#[case::string(Value::from("0"), true)]
#[case::empty_list(Value::List(vec![]), false)]
#[case::list_of_zero(Value::List(vec![Value::Int(0)]), true)]
#[case::empty_tuple(Value::Tuple(Tuple::new()), false)]
#[case::func(Value::Func(Func::constant(Value::Int(0))), true)]
#[case::error(Value::Error(String::new()), true)]
fn truthiness(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(value.truthy(), expected);
}

#[rstest]
#[case::real_truncates(Value::Real(-2.9), Some(-2))]
#[case::string_parses(Value::from(" 17 "), Some(17))]
#[case::bad_string(Value::from("x"), None)]
#[case::nan(Value::Real(f64::NAN), None)]
#[case::list(Value::List(vec![]), None)]
fn conversion_to_int(#[case] value: Value, #[case] expected: Option<i64>) {
    assert_eq!(value.to_int().ok(), expected);
}

#[test]
fn failed_conversion_names_both_types() {
    let error = Value::List(vec![]).to_real().unwrap_err();

    assert!(matches!(error,
                     FatalError::InvalidConversion { from: ValueKind::List,
                                                     to:   ValueKind::Real, }));
}

#[test]
fn checked_access_by_case() {
    let value = Value::from(vec![Value::Int(1)]);

    assert_eq!(value.get::<Vec<Value>>().unwrap().len(), 1);
    assert!(matches!(value.get::<i64>(),
                     Err(FatalError::TypeMismatch { expected: ValueKind::Int,
                                                    found:    ValueKind::List, })));
}

#[test]
fn non_functions_convert_to_constant_functions() {
    let constant = Value::Int(5).to_func();
    assert_eq!(constant.call(&Value::from("ignored")), Value::Int(5));
}

#[test]
fn raw_equality_is_numeric_across_int_and_real() {
    assert_eq!(Value::Int(3).equals(&Value::Real(3.0)), Ok(true));
    assert_eq!(Value::List(ints(&[1, 2])).equals(&Value::List(ints(&[1]))), Ok(false));
}

#[test]
fn functions_and_errors_are_never_equal() {
    let f = Value::Func(Func::constant(Value::Int(0)));
    let e = Value::Error("e".into());

    assert_eq!(f.equals(&f), Ok(false));
    assert_eq!(e.equals(&e), Ok(false));
    assert_ne!(f, f.clone());
}

#[test]
fn functions_order_by_identity_only() {
    let f = Func::constant(Value::Int(0));
    let g = Func::constant(Value::Int(0));

    assert_eq!(Value::Func(f.clone()).partial_compare(&Value::Func(f.clone())),
               Ok(Some(Ordering::Equal)));
    assert_eq!(Value::Func(f).partial_compare(&Value::Func(g)), Ok(None));
}

#[rstest]
#[case::int_and_string(Value::Int(1), Value::from("1"))]
#[case::list_and_tuple(Value::List(vec![]), Value::Tuple(Tuple::new()))]
#[case::nested(Value::List(ints(&[1])), Value::List(vec![Value::from("1")]))]
fn raw_comparisons_of_mismatched_cases_fail(#[case] left: Value, #[case] right: Value) {
    assert!(left.equals(&right).is_err());
    assert!(left.partial_compare(&right).is_err());
}

#[test]
fn raw_ordering_is_lexicographic() {
    let short = Value::List(ints(&[1, 2]));
    let long = Value::List(ints(&[1, 2, 0]));

    assert!(short < long);
    assert!(Value::List(ints(&[2])) > long);
    assert!(Tuple::from(ints(&[1])) < Tuple::from(ints(&[1, 0])));
}

#[rstest]
#[case::int(Value::Int(-4), "-4")]
#[case::real_whole(Value::Real(2.0), "2.0")]
#[case::real(Value::Real(0.25), "0.25")]
#[case::string(Value::from("a b"), "a b")]
#[case::list(Value::List(vec![Value::Int(1), Value::from("x")]), "[1, \"x\"]")]
#[case::tuple(Value::Tuple(Tuple::from(ints(&[1, 2]))), "(1, 2)")]
#[case::nested(Value::List(vec![Value::List(vec![])]), "[[]]")]
#[case::error(Value::Error("Division by zero".into()), "Division by zero")]
fn display(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test]
fn functions_display_their_name() {
    let f = Value::Func(Func::new("double", |v| v.clone()));
    assert_eq!(f.to_string(), "<func double>");
}
