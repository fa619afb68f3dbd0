use crate::{
    error::arithmetic_error,
    interpreter::{
        evaluator::binary::{core::unsupported, list::map_list_binary},
        value::core::Value,
    },
    syntax::Operator,
    util::num::shift_amount,
};

/// Message of the error produced by shifts outside `0..64`.
pub const SHIFT_OUT_OF_RANGE: &str = "Shift amount out of range";

/// `&`: bitwise and of two `Int`s.
pub fn bit_and(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, bit_and, |l, r| match (l, r) {
        (Value::Int(a), Value::Int(b)) => Value::Int(a & b),
        _ => unsupported(Operator::BitAnd, l, r),
    })
}

/// `|`: bitwise or of two `Int`s.
pub fn bit_or(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, bit_or, |l, r| match (l, r) {
        (Value::Int(a), Value::Int(b)) => Value::Int(a | b),
        _ => unsupported(Operator::BitOr, l, r),
    })
}

/// `<<`: left shift. Bits shifted past the top are lost.
pub fn shl(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, shl, |l, r| match (l, r) {
        (Value::Int(a), Value::Int(b)) => match shift_amount(*b) {
            Some(amount) => Value::Int(a << amount),
            None => arithmetic_error(SHIFT_OUT_OF_RANGE),
        },
        _ => unsupported(Operator::Shl, l, r),
    })
}

/// `>>`: arithmetic right shift.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::logic::shr, value::core::Value};
///
/// assert_eq!(shr(&Value::Int(-8), &Value::Int(1)), Value::Int(-4));
/// assert!(shr(&Value::Int(1), &Value::Int(64)).is_error());
/// ```
pub fn shr(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, shr, |l, r| match (l, r) {
        (Value::Int(a), Value::Int(b)) => match shift_amount(*b) {
            Some(amount) => Value::Int(a >> amount),
            None => arithmetic_error(SHIFT_OUT_OF_RANGE),
        },
        _ => unsupported(Operator::Shr, l, r),
    })
}

/// `&&`: logical and of two numbers, as `Int` 0 or 1.
pub fn and(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, and, |l, r| {
        if l.is_numeric() && r.is_numeric() {
            Value::from(l.truthy() && r.truthy())
        } else {
            unsupported(Operator::And, l, r)
        }
    })
}

/// `||`: logical or of two numbers, as `Int` 0 or 1.
pub fn or(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, or, |l, r| {
        if l.is_numeric() && r.is_numeric() {
            Value::from(l.truthy() || r.truthy())
        } else {
            unsupported(Operator::Or, l, r)
        }
    })
}
