use crate::{
    error::{arithmetic_error, operation_error, standard_error, value_error::UNSUPPORTED},
    interpreter::{evaluator::binary::arithmetic::OVERFLOW, value::core::Value},
    util::num::len_to_i64,
};

/// Message of the error produced by `head` and `tail` on empty containers.
pub const EMPTY_CONTAINER: &str = "Empty container";
/// Message of the error produced by a failed `assert`.
pub const ASSERTION_FAILED: &str = "Assertion failed";

/// The operation error for a builtin called with an argument it does not
/// accept.
fn unsupported(name: &str, argument: &Value) -> Value {
    operation_error("Func", &[argument.type_name()], name, UNSUPPORTED)
}

/// Defines a numeric builtin backed by an `f64` method.
///
/// The generated function:
/// - widens an `Int` and applies the method, always yielding a `Real`,
/// - maps itself over every element of a `List`,
/// - passes an error value on,
/// - rejects anything else with an operation error.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&Value::Int(9)), Value::Real(3.0));
/// assert_eq!(sqrt(&Value::List(vec![Value::Int(4), Value::Real(16.0)])),
///            Value::List(vec![Value::Real(2.0), Value::Real(4.0)]));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "`: `f64::", stringify!($real_fn), "`.")]
        pub fn $fname(value: &Value) -> Value {
            if let Some(x) = value.as_f64() {
                return Value::Real(x.$real_fn());
            }

            match value {
                Value::List(items) => Value::List(items.iter().map($fname).collect()),
                Value::Error(_) => value.clone(),
                _ => unsupported(stringify!($fname), value),
            }
        }
    };
}

real_builtin!(sqrt, sqrt);
real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(exp, exp);
real_builtin!(ln, ln);

/// `abs`: absolute value, keeping `Int` as `Int`.
///
/// `abs` of the smallest `Int` does not fit and yields an overflow error.
pub fn abs(value: &Value) -> Value {
    match value {
        Value::Int(n) => n.checked_abs().map_or_else(|| arithmetic_error(OVERFLOW), Value::Int),
        Value::Real(r) => Value::Real(r.abs()),
        Value::List(items) => Value::List(items.iter().map(abs).collect()),
        Value::Error(_) => value.clone(),
        _ => unsupported("abs", value),
    }
}

/// `len`: number of characters of a string or elements of a container.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&Value::from("héllo")), Value::Int(5));
/// assert!(len(&Value::Int(3)).is_error());
/// ```
pub fn len(value: &Value) -> Value {
    match value {
        Value::Str(s) => Value::Int(len_to_i64(s.chars().count())),
        Value::List(items) => Value::Int(len_to_i64(items.len())),
        Value::Tuple(t) => Value::Int(len_to_i64(t.len())),
        Value::Error(_) => value.clone(),
        _ => unsupported("len", value),
    }
}

/// `head`: the first character of a string or the first element of a
/// container.
pub fn head(value: &Value) -> Value {
    let first = match value {
        Value::Str(s) => s.chars().next().map(|c| Value::Str(c.to_string())),
        Value::List(items) => items.first().cloned(),
        Value::Tuple(t) => t.head().cloned(),
        Value::Error(_) => return value.clone(),
        _ => return unsupported("head", value),
    };

    first.unwrap_or_else(|| standard_error(EMPTY_CONTAINER))
}

/// `tail`: everything after the first character or element, keeping the
/// case of the argument.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::function::builtin::tail, value::core::Value};
///
/// let list = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// assert_eq!(tail(&list), Value::List(vec![Value::Int(2), Value::Int(3)]));
/// assert_eq!(tail(&Value::from("abc")), Value::from("bc"));
/// assert!(tail(&Value::List(vec![])).is_error());
/// ```
pub fn tail(value: &Value) -> Value {
    let rest = match value {
        Value::Str(s) => {
            let mut chars = s.chars();
            chars.next().map(|_| Value::Str(chars.as_str().to_owned()))
        },
        Value::List(items) => items.split_first().map(|(_, rest)| Value::List(rest.to_vec())),
        Value::Tuple(t) => t.tail().cloned().map(Value::Tuple),
        Value::Error(_) => return value.clone(),
        _ => return unsupported("tail", value),
    };

    rest.unwrap_or_else(|| standard_error(EMPTY_CONTAINER))
}

/// `int`: conversion to `Int`. Reals truncate, strings are parsed.
pub fn int(value: &Value) -> Value {
    if value.is_error() {
        return value.clone();
    }
    value.to_int().map_or_else(|e| standard_error(e.to_string()), Value::Int)
}

/// `real`: conversion to `Real`.
pub fn real(value: &Value) -> Value {
    if value.is_error() {
        return value.clone();
    }
    value.to_real().map_or_else(|e| standard_error(e.to_string()), Value::Real)
}

/// `str`: conversion of a number or string to `Str`.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::function::builtin::str, value::core::Value};
///
/// assert_eq!(str(&Value::Real(2.0)), Value::from("2.0"));
/// assert!(str(&Value::List(vec![])).is_error());
/// ```
pub fn str(value: &Value) -> Value {
    if value.is_error() {
        return value.clone();
    }
    value.to_text().map_or_else(|e| standard_error(e.to_string()), Value::Str)
}

/// `list`: conversion to `List`.
pub fn list(value: &Value) -> Value {
    Value::List(value.to_list())
}

/// `tuple`: conversion to `Tuple`.
pub fn tuple(value: &Value) -> Value {
    Value::Tuple(value.to_tuple())
}

/// `type`: the type name of the argument as a `Str`.
pub fn type_of(value: &Value) -> Value {
    Value::from(value.type_name())
}

/// `is_error`: `1` for error values, `0` otherwise.
pub fn is_error(value: &Value) -> Value {
    Value::from(value.is_error())
}

/// `error`: turns the argument into an error value with its text as the
/// message.
pub fn error(value: &Value) -> Value {
    match value {
        Value::Error(_) => value.clone(),
        other => standard_error(other.to_string()),
    }
}

/// `assert`: yields the argument when it is truthy and not an error value,
/// otherwise `Error("Assertion failed")`.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::function::builtin::assert, value::core::Value};
///
/// assert_eq!(assert(&Value::Int(1)), Value::Int(1));
/// assert!(assert(&Value::Int(0)).is_error());
/// ```
pub fn assert(value: &Value) -> Value {
    if value.truthy() && !value.is_error() {
        value.clone()
    } else {
        tracing::debug!(%value, "assertion failed");
        standard_error(ASSERTION_FAILED)
    }
}
