use crate::{
    error::arithmetic_error,
    interpreter::{
        evaluator::binary::core::{BinaryFn, propagated},
        value::core::Value,
    },
};

/// Message of the error produced by lists of different lengths.
pub const SIZE_MISMATCH: &str = "List size mismatch";

/// Applies a binary operator elementwise where lists are involved.
///
/// In order of precedence:
/// - An error operand is returned as it is.
/// - List with list: both must have the same length, otherwise the result
///   is `Error("List size mismatch")`. Each pair goes through `recurse`.
/// - List with scalar, scalar with list: the scalar is paired with every
///   element, keeping the list's order.
/// - Anything else is handed to `scalar`.
///
/// `recurse` is the operator itself, so nested lists broadcast too.
///
/// # Example
/// ```
/// use ysh::interpreter::{
///     evaluator::binary::{arithmetic::add, list::map_list_binary},
///     value::core::Value,
/// };
///
/// let left = Value::List(vec![Value::Int(1), Value::Int(2)]);
/// let right = Value::Int(10);
///
/// let r = map_list_binary(&left, &right, add, |_, _| unreachable!());
/// assert_eq!(r, Value::List(vec![Value::Int(11), Value::Int(12)]));
/// ```
pub fn map_list_binary<F>(left: &Value, right: &Value, recurse: BinaryFn, scalar: F) -> Value
    where F: FnOnce(&Value, &Value) -> Value
{
    if let Some(error) = propagated(left, right) {
        return error;
    }

    match (left, right) {
        (Value::List(l), Value::List(r)) => {
            if l.len() != r.len() {
                return arithmetic_error(SIZE_MISMATCH);
            }
            Value::List(l.iter().zip(r).map(|(a, b)| recurse(a, b)).collect())
        },
        (Value::List(l), s) if s.is_scalar() => {
            Value::List(l.iter().map(|a| recurse(a, s)).collect())
        },
        (s, Value::List(r)) if s.is_scalar() => {
            Value::List(r.iter().map(|b| recurse(s, b)).collect())
        },
        _ => scalar(left, right),
    }
}
