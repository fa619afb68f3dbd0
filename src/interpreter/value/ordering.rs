use std::cmp::Ordering;

use crate::{
    error::FatalError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, tuple::Tuple},
    },
};

fn mismatch(left: &Value, right: &Value) -> FatalError {
    FatalError::TypeMismatch { expected: left.kind(),
                               found:    right.kind(), }
}

impl Value {
    /// Raw structural equality.
    ///
    /// Values of the same case compare structurally, and `Int`/`Real` pairs
    /// compare numerically. Functions and error values are never equal to
    /// anything, not even to themselves.
    ///
    /// # Errors
    /// `FatalError::TypeMismatch` when the two cases cannot be compared,
    /// including mismatches between nested elements.
    ///
    /// # Example
    /// ```
    /// use ysh::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Int(2).equals(&Value::Real(2.0)), Ok(true));
    /// assert!(Value::Int(2).equals(&Value::from("2")).is_err());
    /// ```
    pub fn equals(&self, other: &Self) -> EvalResult<bool> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(a == b),
            (Self::Int(_) | Self::Real(_), Self::Int(_) | Self::Real(_)) => {
                Ok(self.as_f64() == other.as_f64())
            },
            (Self::Str(a), Self::Str(b)) => Ok(a == b),
            (Self::List(a), Self::List(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b) {
                    if !x.equals(y)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            (Self::Tuple(a), Self::Tuple(b)) => a.equals(b),
            (Self::Func(_), Self::Func(_)) | (Self::Error(_), Self::Error(_)) => Ok(false),
            _ => Err(mismatch(self, other)),
        }
    }

    /// Raw partial ordering.
    ///
    /// Numbers order numerically (`Int`/`Real` pairs included), strings
    /// lexically, lists and tuples lexicographically with the shorter one
    /// first when it is a prefix of the other. A function or error value is
    /// only ordered against itself.
    ///
    /// Returns `Ok(None)` for unordered pairs such as a `NaN` operand.
    ///
    /// # Errors
    /// `FatalError::TypeMismatch` when the two cases cannot be compared.
    pub fn partial_compare(&self, other: &Self) -> EvalResult<Option<Ordering>> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(Some(a.cmp(b))),
            (Self::Int(_) | Self::Real(_), Self::Int(_) | Self::Real(_)) => {
                Ok(self.as_f64().partial_cmp(&other.as_f64()))
            },
            (Self::Str(a), Self::Str(b)) => Ok(Some(a.cmp(b))),
            (Self::List(a), Self::List(b)) => lexicographic(a.iter(), b.iter()),
            (Self::Tuple(a), Self::Tuple(b)) => a.partial_compare(b),
            (Self::Func(a), Self::Func(b)) => Ok(a.same_as(b).then_some(Ordering::Equal)),
            (Self::Error(_), Self::Error(_)) => {
                Ok(std::ptr::eq(self, other).then_some(Ordering::Equal))
            },
            _ => Err(mismatch(self, other)),
        }
    }
}

impl Tuple {
    /// Element-wise raw equality, see [`Value::equals`].
    ///
    /// # Errors
    /// `FatalError::TypeMismatch` when two elements cannot be compared.
    pub fn equals(&self, other: &Self) -> EvalResult<bool> {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (Some(x), Some(y)) => {
                    if !x.equals(y)? {
                        return Ok(false);
                    }
                },
                (None, None) => return Ok(true),
                _ => return Ok(false),
            }
        }
    }

    /// Lexicographic raw ordering; a proper prefix orders first.
    ///
    /// # Errors
    /// `FatalError::TypeMismatch` when two elements cannot be compared.
    pub fn partial_compare(&self, other: &Self) -> EvalResult<Option<Ordering>> {
        lexicographic(self.iter(), other.iter())
    }
}

/// Compares two sequences element by element. The first non-equal pair
/// decides; otherwise the shorter sequence orders first.
fn lexicographic<'a>(mut left: impl Iterator<Item = &'a Value>,
                     mut right: impl Iterator<Item = &'a Value>)
                     -> EvalResult<Option<Ordering>> {
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match x.partial_compare(y)? {
                Some(Ordering::Equal) => {},
                decided => return Ok(decided),
            },
            (None, None) => return Ok(Some(Ordering::Equal)),
            (None, Some(_)) => return Ok(Some(Ordering::Less)),
            (Some(_), None) => return Ok(Some(Ordering::Greater)),
        }
    }
}

/// Language equality: a fatal mismatch reads as "not equal".
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.equals(other), Ok(true))
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_compare(other).ok().flatten()
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.equals(other), Ok(true))
    }
}

impl PartialOrd for Tuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_compare(other).ok().flatten()
    }
}
