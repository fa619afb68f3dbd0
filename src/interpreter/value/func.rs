use std::{fmt, rc::Rc};

use crate::interpreter::value::core::Value;

type Mapping = dyn Fn(&Value) -> Value;

/// A single-argument, single-result function value.
///
/// The mapping itself is immutable, so copies of a `Func` share it. Two
/// `Func`s are the same function only if one is a copy of the other.
#[derive(Clone)]
pub struct Func {
    name:    Rc<str>,
    mapping: Rc<Mapping>,
}

impl Func {
    /// Wraps a closure into a function value.
    ///
    /// # Example
    /// ```
    /// use ysh::interpreter::value::{core::Value, func::Func};
    ///
    /// let double = Func::new("double", |v| match v {
    ///     Value::Int(n) => Value::Int(n * 2),
    ///     other => other.clone(),
    /// });
    ///
    /// assert_eq!(double.call(&Value::Int(21)), Value::Int(42));
    /// ```
    pub fn new(name: impl Into<String>, mapping: impl Fn(&Value) -> Value + 'static) -> Self {
        Self { name:    Rc::from(name.into()),
               mapping: Rc::new(mapping), }
    }

    /// A function that ignores its argument and returns `value`.
    #[must_use]
    pub fn constant(value: Value) -> Self {
        Self::new(format!("const {value}"), move |_| value.clone())
    }

    /// The descriptive name, used when printing the function.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the function to an argument.
    #[must_use]
    pub fn call(&self, argument: &Value) -> Value {
        (self.mapping)(argument)
    }

    /// Identity test: true only for copies of the same function value.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.mapping, &other.mapping)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func").field("name", &self.name).finish_non_exhaustive()
    }
}
