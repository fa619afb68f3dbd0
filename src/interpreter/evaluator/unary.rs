use crate::{
    error::{operation_error, value_error::UNSUPPORTED},
    interpreter::value::core::Value,
};

/// `!`: logical negation.
///
/// Flips an `Int` between zero and one, maps over lists elementwise and
/// passes error values on. Anything else is an operation error.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::unary::not, value::core::Value};
///
/// assert_eq!(not(&Value::Int(0)), Value::Int(1));
/// assert_eq!(not(&Value::List(vec![Value::Int(7), Value::Int(0)])),
///            Value::List(vec![Value::Int(0), Value::Int(1)]));
/// assert!(not(&Value::from("x")).is_error());
/// ```
pub fn not(value: &Value) -> Value {
    match value {
        Value::Int(n) => Value::from(*n == 0),
        Value::List(items) => Value::List(items.iter().map(not).collect()),
        Value::Error(_) => value.clone(),
        _ => operation_error::<&str>(value.type_name(), &[], "!", UNSUPPORTED),
    }
}
