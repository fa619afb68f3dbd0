use std::{collections::HashMap, ops::Index};

use crate::{
    error::FatalError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::lookup},
        value::core::Value,
    },
};

/// The variable store an expression is evaluated against.
///
/// The store owns the authoritative copy of every bound value; reading a
/// variable yields a copy. Cloning the store snapshots all bindings.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Checks whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, returning the value it replaces.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Removes a binding.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// The number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Checks whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Reads a name: a copy of its binding, otherwise the builtin function
    /// of that name.
    ///
    /// # Errors
    /// `FatalError::UnknownVariable` when the name is neither bound nor a
    /// builtin.
    ///
    /// # Example
    /// ```
    /// use ysh::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Int(5));
    ///
    /// assert_eq!(env.resolve("x").unwrap(), Value::Int(5));
    /// assert!(matches!(env.resolve("len").unwrap(), Value::Func(_)));
    /// assert!(env.resolve("nope").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.get(name) {
            return Ok(value.clone());
        }

        lookup(name).map(Value::Func)
                    .ok_or_else(|| FatalError::UnknownVariable { name: name.to_owned() })
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self { variables: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}

impl<S: Into<String>> Extend<(S, Value)> for Environment {
    fn extend<I: IntoIterator<Item = (S, Value)>>(&mut self, iter: I) {
        self.variables.extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
    }
}

/// Panics when `name` is not bound, like `HashMap` indexing.
impl Index<&str> for Environment {
    type Output = Value;

    fn index(&self, name: &str) -> &Self::Output {
        &self.variables[name]
    }
}
