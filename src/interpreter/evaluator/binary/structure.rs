use crate::{
    error::{operation_error, value_error::UNSUPPORTED},
    interpreter::{
        evaluator::binary::{core::unsupported, list::map_list_binary},
        value::{core::Value, tuple::Tuple},
    },
    syntax::Operator,
};

/// `++`: concatenation of two `Str`s or two `Tuple`s.
///
/// Lists go elementwise like every other broadcasting operator.
pub fn concat(left: &Value, right: &Value) -> Value {
    map_list_binary(left, right, concat, |l, r| match (l, r) {
        (Value::Str(a), Value::Str(b)) => Value::Str(format!("{a}{b}")),
        (Value::Tuple(a), Value::Tuple(b)) => Value::Tuple(a.concat(b)),
        _ => unsupported(Operator::Concat, l, r),
    })
}

/// `:`: prepends the left operand onto a list.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::structure::cons, value::core::Value};
///
/// let list = Value::List(vec![Value::Int(2), Value::Int(3)]);
/// assert_eq!(cons(&Value::Int(1), &list),
///            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
/// assert!(cons(&Value::Int(1), &Value::Int(2)).is_error());
/// ```
pub fn cons(left: &Value, right: &Value) -> Value {
    match right {
        Value::List(items) => {
            let mut list = Vec::with_capacity(items.len() + 1);
            list.push(left.clone());
            list.extend_from_slice(items);
            Value::List(list)
        },
        _ => unsupported(Operator::Cons, left, right),
    }
}

/// `,`: prepends the left operand onto a tuple.
///
/// A right operand that is not a tuple, a list included, is wrapped into a
/// one-element tuple first.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::binary::structure::zip, value::core::Value};
///
/// let t = zip(&Value::Int(1), &Value::Int(2));
/// assert_eq!(t.to_list(), vec![Value::Int(1), Value::Int(2)]);
///
/// let t = zip(&Value::Int(0), &t);
/// assert_eq!(t.to_list(), vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
///
/// let list = Value::List(vec![Value::Int(2), Value::Int(3)]);
/// assert_eq!(zip(&Value::Int(1), &list).to_list(), vec![Value::Int(1), list]);
/// ```
pub fn zip(left: &Value, right: &Value) -> Value {
    let mut tuple = match right {
        Value::Tuple(tuple) => tuple.clone(),
        other => std::iter::once(other.clone()).collect::<Tuple>(),
    };
    tuple.push(left.clone());
    Value::Tuple(tuple)
}

/// `$`: applies a function to the right operand.
///
/// An error value on the left is passed on; any other non-function is an
/// operation error.
pub fn apply(left: &Value, right: &Value) -> Value {
    match left {
        Value::Func(function) => function.call(right),
        Value::Error(_) => left.clone(),
        _ => operation_error(left.type_name(),
                             &[right.type_name()],
                             Operator::Apply.symbol(),
                             UNSUPPORTED),
    }
}
