use std::fmt;

use crate::{
    error::FatalError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{func::Func, tuple::Tuple},
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

/// Represents a runtime value of the language.
///
/// Every value owns its contents exclusively: cloning a `Value` yields an
/// independent copy, so rebinding a variable never affects another one.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64 bit signed integer.
    Int(i64),
    /// A double precision floating point number.
    Real(f64),
    /// A text buffer.
    Str(String),
    /// An ordered, index-addressable sequence of values.
    List(Vec<Self>),
    /// A recursive cons list, see [`Tuple`].
    Tuple(Tuple),
    /// A single-argument function.
    Func(Func),
    /// A failure carried as an ordinary value. The payload is the message.
    Error(String),
}

/// The case tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Tag of [`Value::Int`].
    Int,
    /// Tag of [`Value::Real`].
    Real,
    /// Tag of [`Value::Str`].
    Str,
    /// Tag of [`Value::List`].
    List,
    /// Tag of [`Value::Tuple`].
    Tuple,
    /// Tag of [`Value::Func`].
    Func,
    /// Tag of [`Value::Error`].
    Error,
}

impl ValueKind {
    /// The type name used in diagnostics and by the `type` builtin.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Real => "Real",
            Self::Str => "Str",
            Self::List => "List",
            Self::Tuple => "Tuple",
            Self::Func => "Func",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Rust type that is the payload of exactly one [`Value`] case.
///
/// Used by [`Value::get`] for checked access.
pub trait Case: Sized {
    /// The case carrying this payload type.
    const KIND: ValueKind;

    /// Borrows the payload if `value` is of case [`Self::KIND`].
    fn extract(value: &Value) -> Option<&Self>;
}

macro_rules! value_case {
    ($payload:ty, $case:ident) => {
        impl Case for $payload {
            const KIND: ValueKind = ValueKind::$case;

            fn extract(value: &Value) -> Option<&Self> {
                match value {
                    Value::$case(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

value_case!(i64, Int);
value_case!(f64, Real);
value_case!(String, Str);
value_case!(Vec<Value>, List);
value_case!(Tuple, Tuple);
value_case!(Func, Func);

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<Tuple> for Value {
    fn from(v: Tuple) -> Self {
        Self::Tuple(v)
    }
}

impl From<Func> for Value {
    fn from(v: Func) -> Self {
        Self::Func(v)
    }
}

impl Value {
    /// Returns the case tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Real(_) => ValueKind::Real,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Func(_) => ValueKind::Func,
            Self::Error(_) => ValueKind::Error,
        }
    }

    /// Shorthand for `self.kind().name()`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Checks whether the value is an `Int` or a `Real`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Real(_))
    }

    /// Checks whether the value can be broadcast against a list.
    ///
    /// Scalars are the numbers and strings.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Real(_) | Self::Str(_))
    }

    /// Checks whether the value is an error value.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the message of an error value.
    #[must_use]
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Borrows the payload of a specific case.
    ///
    /// # Errors
    /// `FatalError::TypeMismatch` if the value holds a different case.
    ///
    /// # Example
    /// ```
    /// use ysh::interpreter::value::core::Value;
    ///
    /// let v = Value::from("text");
    /// assert_eq!(v.get::<String>().unwrap(), "text");
    /// assert!(v.get::<i64>().is_err());
    /// ```
    pub fn get<T: Case>(&self) -> EvalResult<&T> {
        T::extract(self).ok_or(FatalError::TypeMismatch { expected: T::KIND,
                                                          found:    self.kind(), })
    }

    /// Returns the numeric payload widened to `f64`.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(i64_to_f64(*n)),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Truthiness of a value.
    ///
    /// Numbers are true when non-zero, strings and containers when
    /// non-empty. Functions are always true, and so are error values.
    ///
    /// # Example
    /// ```
    /// use ysh::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Int(0).truthy());
    /// assert!(Value::List(vec![Value::Int(0)]).truthy());
    /// assert!(Value::Error("failed".into()).truthy());
    /// ```
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(l) => !l.is_empty(),
            Self::Tuple(t) => !t.is_empty(),
            Self::Func(_) | Self::Error(_) => true,
        }
    }

    /// Converts to an integer: reals truncate towards zero and strings are
    /// parsed.
    ///
    /// # Errors
    /// `FatalError::InvalidConversion` for non-numeric cases, unparsable
    /// strings and reals outside the `i64` range.
    pub fn to_int(&self) -> EvalResult<i64> {
        let invalid = FatalError::InvalidConversion { from: self.kind(),
                                                      to:   ValueKind::Int, };
        match self {
            Self::Int(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_truncated(*r, invalid),
            Self::Str(s) => s.trim().parse().map_err(|_| invalid),
            _ => Err(invalid),
        }
    }

    /// Converts to a real: integers widen and strings are parsed.
    ///
    /// # Errors
    /// `FatalError::InvalidConversion` for non-numeric cases and unparsable
    /// strings.
    pub fn to_real(&self) -> EvalResult<f64> {
        let invalid = FatalError::InvalidConversion { from: self.kind(),
                                                      to:   ValueKind::Real, };
        match self {
            Self::Int(n) => Ok(i64_to_f64(*n)),
            Self::Real(r) => Ok(*r),
            Self::Str(s) => s.trim().parse().map_err(|_| invalid),
            _ => Err(invalid),
        }
    }

    /// Converts to text. Only numbers and strings have a text form.
    ///
    /// # Errors
    /// `FatalError::InvalidConversion` for every other case.
    pub fn to_text(&self) -> EvalResult<String> {
        match self {
            Self::Int(_) | Self::Real(_) => Ok(self.to_string()),
            Self::Str(s) => Ok(s.clone()),
            _ => Err(FatalError::InvalidConversion { from: self.kind(),
                                                     to:   ValueKind::Str, }),
        }
    }

    /// Converts to a list. A tuple yields its elements head to tail; any
    /// other non-list value becomes a one-element list.
    #[must_use]
    pub fn to_list(&self) -> Vec<Self> {
        match self {
            Self::List(l) => l.clone(),
            Self::Tuple(t) => t.to_list(),
            other => vec![other.clone()],
        }
    }

    /// Converts to a tuple. A list keeps its order; any other non-tuple
    /// value becomes a one-element tuple.
    #[must_use]
    pub fn to_tuple(&self) -> Tuple {
        match self {
            Self::Tuple(t) => t.clone(),
            Self::List(l) => l.iter().cloned().collect(),
            other => std::iter::once(other.clone()).collect(),
        }
    }

    /// Converts to a function. Non-function values become constant
    /// functions.
    #[must_use]
    pub fn to_func(&self) -> Func {
        match self {
            Self::Func(f) => f.clone(),
            other => Func::constant(other.clone()),
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

/// Writes `items` separated by commas between `open` and `close`.
fn fmt_sequence<'a>(f: &mut fmt::Formatter<'_>,
                    open: &str,
                    items: impl Iterator<Item = &'a Value>,
                    close: &str)
                    -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_nested(f)?;
    }
    f.write_str(close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Str(s) | Self::Error(s) => f.write_str(s),
            Self::List(l) => fmt_sequence(f, "[", l.iter(), "]"),
            Self::Tuple(t) => fmt_sequence(f, "(", t.iter(), ")"),
            Self::Func(func) => write!(f, "<func {}>", func.name()),
        }
    }
}
