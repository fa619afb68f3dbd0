use crate::{
    interpreter::{
        evaluator::binary::{core::unsupported, list::map_list_binary},
        value::core::Value,
    },
    syntax::Operator,
};

/// `^`: exponentiation. The result is always `Real`, even for two `Int`s.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::power::pow, value::core::Value};
///
/// assert_eq!(pow(&Value::Int(2), &Value::Int(10)), Value::Real(1024.0));
/// ```
pub fn pow(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, pow, |l, r| match (l.as_f64(), r.as_f64()) {
        (Some(base), Some(exponent)) => Value::Real(base.powf(exponent)),
        _ => unsupported(Operator::Pow, l, r),
    })
}
