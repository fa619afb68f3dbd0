use std::cmp::Ordering;

use crate::{
    error::{FatalError, standard_error},
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult},
        value::core::Value,
    },
    syntax::Operator,
};

/// Message of the error produced when two reals cannot be ordered.
pub const UNORDERED: &str = "Values are unordered";

fn ordering_value(ordering: Ordering) -> Value {
    Value::Int(match ordering {
                   Ordering::Less => -1,
                   Ordering::Equal => 0,
                   Ordering::Greater => 1,
               })
}

/// `<=>`: three-way comparison, the wrapper around raw ordering used by
/// every comparison operator of the language.
///
/// Yields `Int(-1)`, `Int(0)` or `Int(1)`. A function or error operand, or
/// two operands of incompatible cases, yield an operation error value
/// instead of the fatal mismatch raw ordering would raise. Lists compare
/// lexicographically with the shorter list first on a common prefix.
///
/// # Errors
/// `FatalError::TypeMismatch` when elements nested inside lists or tuples
/// cannot be compared.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::comparison::compare, value::core::Value};
///
/// let a = Value::List(vec![Value::Int(1), Value::Int(2)]);
/// let b = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(0)]);
///
/// assert_eq!(compare(&a, &b).unwrap(), Value::Int(-1));
/// assert!(compare(&Value::Int(1), &Value::from("1")).unwrap().is_error());
/// ```
pub fn compare(left: &Value, right: &Value) -> EvalResult<Value> {
    ordering(Operator::Compare, left, right)
}

/// Shared body of [`compare`] and [`relation`]; `op` names the operator in
/// operation errors.
fn ordering(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Func(_) | Value::Error(_), _) | (_, Value::Func(_) | Value::Error(_)) => {
            return Ok(unsupported(op, left, right));
        },
        _ if left.kind() == right.kind() || (left.is_numeric() && right.is_numeric()) => {
            left.partial_compare(right)?
        },
        _ => return Ok(unsupported(op, left, right)),
    };

    Ok(ordering.map_or_else(|| standard_error(UNORDERED), ordering_value))
}

/// Evaluates `= != < > <= >=` through [`compare`].
///
/// Yields `Int(1)` or `Int(0)`, or the error value [`compare`] produced.
///
/// # Errors
/// - Everything [`compare`] can raise.
/// - `FatalError::Grammar` if `op` is not a relational operator.
pub fn relation(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    let compared = ordering(op, left, right)?;
    let Value::Int(sign) = compared else {
        return Ok(compared);
    };

    let holds = match op {
        Operator::Equal => sign == 0,
        Operator::NotEqual => sign != 0,
        Operator::Less => sign < 0,
        Operator::Greater => sign > 0,
        Operator::LessEqual => sign <= 0,
        Operator::GreaterEqual => sign >= 0,
        _ => return Err(FatalError::grammar(format!("({op}) is not a relational operator"))),
    };

    Ok(Value::from(holds))
}
