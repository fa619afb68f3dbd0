use crate::{
    error::arithmetic_error,
    interpreter::{
        evaluator::binary::{core::unsupported, list::map_list_binary},
        value::core::Value,
    },
    syntax::Operator,
    util::num::repeat_count,
};

/// Message of the error produced by `/` and `%` with a zero divisor.
pub const DIVISION_BY_ZERO: &str = "Division by zero";
/// Message of the error produced when an `Int` result does not fit.
pub const OVERFLOW: &str = "Integer overflow";

/// A pair of numbers after promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numbers {
    /// Both operands were `Int`.
    Ints(i64, i64),
    /// At least one operand was `Real`; both are widened.
    Reals(f64, f64),
}

/// Promotes two numeric values to a common representation.
///
/// Returns `None` unless both values are numbers.
pub(crate) fn numbers(left: &Value, right: &Value) -> Option<Numbers> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(Numbers::Ints(*a, *b)),
        _ => Some(Numbers::Reals(left.as_f64()?, right.as_f64()?)),
    }
}

fn checked(result: Option<i64>) -> Value {
    result.map_or_else(|| arithmetic_error(OVERFLOW), Value::Int)
}

/// `+`: numeric addition, string concatenation, tuple concatenation.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::arithmetic::add, value::core::Value};
///
/// assert_eq!(add(&Value::Int(1), &Value::Real(0.5)), Value::Real(1.5));
/// assert_eq!(add(&Value::from("ab"), &Value::from("cd")), Value::from("abcd"));
/// ```
pub fn add(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, add, |l, r| match (l, r) {
        (Value::Str(a), Value::Str(b)) => Value::Str(format!("{a}{b}")),
        (Value::Tuple(a), Value::Tuple(b)) => Value::Tuple(a.concat(b)),
        _ => match numbers(l, r) {
            Some(Numbers::Ints(a, b)) => checked(a.checked_add(b)),
            Some(Numbers::Reals(a, b)) => Value::Real(a + b),
            None => unsupported(Operator::Add, l, r),
        },
    })
}

/// `-`: numeric subtraction.
pub fn sub(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, sub, |l, r| match numbers(l, r) {
        Some(Numbers::Ints(a, b)) => checked(a.checked_sub(b)),
        Some(Numbers::Reals(a, b)) => Value::Real(a - b),
        None => unsupported(Operator::Sub, l, r),
    })
}

/// `*`: numeric multiplication and string repetition.
///
/// `Int * Str` and `Str * Int` repeat the string; a count of zero or less
/// gives the empty string.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::arithmetic::mul, value::core::Value};
///
/// assert_eq!(mul(&Value::Int(3), &Value::from("ab")), Value::from("ababab"));
/// assert_eq!(mul(&Value::from("ab"), &Value::Int(-1)), Value::from(""));
/// ```
pub fn mul(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, mul, |l, r| match (l, r) {
        (Value::Int(n), Value::Str(s)) | (Value::Str(s), Value::Int(n)) => {
            match repeat_count(*n).filter(|count| count.checked_mul(s.len()).is_some()) {
                Some(count) => Value::Str(s.repeat(count)),
                None => arithmetic_error(OVERFLOW),
            }
        },
        _ => match numbers(l, r) {
            Some(Numbers::Ints(a, b)) => checked(a.checked_mul(b)),
            Some(Numbers::Reals(a, b)) => Value::Real(a * b),
            None => unsupported(Operator::Mul, l, r),
        },
    })
}

/// `/`: numeric division. `Int / Int` truncates towards zero.
///
/// A zero divisor yields `Error("Division by zero")`.
pub fn div(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, div, |l, r| match numbers(l, r) {
        Some(Numbers::Ints(_, 0)) => arithmetic_error(DIVISION_BY_ZERO),
        Some(Numbers::Ints(a, b)) => checked(a.checked_div(b)),
        Some(Numbers::Reals(_, b)) if b == 0.0 => arithmetic_error(DIVISION_BY_ZERO),
        Some(Numbers::Reals(a, b)) => Value::Real(a / b),
        None => unsupported(Operator::Div, l, r),
    })
}

/// `%`: remainder with the sign of the dividend.
///
/// A zero divisor yields `Error("Division by zero")`.
pub fn rem(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, rem, |l, r| match numbers(l, r) {
        Some(Numbers::Ints(_, 0)) => arithmetic_error(DIVISION_BY_ZERO),
        Some(Numbers::Ints(a, b)) => checked(a.checked_rem(b)),
        Some(Numbers::Reals(_, b)) if b == 0.0 => arithmetic_error(DIVISION_BY_ZERO),
        Some(Numbers::Reals(a, b)) => Value::Real(a % b),
        None => unsupported(Operator::Rem, l, r),
    })
}
