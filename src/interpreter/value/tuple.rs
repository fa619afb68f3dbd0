use std::fmt;

use crate::interpreter::value::core::Value;

/// A singly linked tuple: either empty or a head value followed by a tail
/// tuple.
///
/// Each node exclusively owns its tail. An empty tuple has no node at all.
/// Prepending is O(1); most other operations walk the chain.
///
/// Copies preserve element order: cloning walks the source head to tail
/// and rebuilds the chain in the same order.
///
/// # Example
/// ```
/// use ysh::interpreter::value::{core::Value, tuple::Tuple};
///
/// let mut t = Tuple::new();
/// t.push(Value::Int(2));
/// t.push(Value::Int(1));
///
/// assert_eq!(t.to_list(), vec![Value::Int(1), Value::Int(2)]);
/// assert_eq!(t.clone().to_list(), t.to_list());
/// ```
#[derive(Default)]
pub struct Tuple {
    first: Option<Box<Node>>,
}

struct Node {
    value: Value,
    rest:  Tuple,
}

impl Tuple {
    /// Creates an empty tuple.
    #[must_use]
    pub const fn new() -> Self {
        Self { first: None }
    }

    /// Checks whether the tuple has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Counts the elements by walking the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The first element, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Value> {
        self.first.as_ref().map(|node| &node.value)
    }

    /// Everything after the first element, if the tuple is not empty.
    #[must_use]
    pub fn tail(&self) -> Option<&Self> {
        self.first.as_ref().map(|node| &node.rest)
    }

    /// Prepends `value` as the new head.
    pub fn push(&mut self, value: Value) {
        let rest = Self { first: self.first.take() };
        self.first = Some(Box::new(Node { value, rest }));
    }

    /// Removes and returns the head.
    pub fn pop(&mut self) -> Option<Value> {
        let node = self.first.take()?;
        let Node { value, rest } = *node;
        *self = rest;
        Some(value)
    }

    /// Concatenates two tuples: the elements of `self` followed by those of
    /// `other`.
    ///
    /// `self` is peeled head to tail onto a stack, which is then pushed back
    /// onto a copy of `other`.
    ///
    /// # Example
    /// ```
    /// use ysh::interpreter::value::{core::Value, tuple::Tuple};
    ///
    /// let a: Tuple = [1, 2].map(Value::Int).into_iter().collect();
    /// let b: Tuple = [3].map(Value::Int).into_iter().collect();
    ///
    /// assert_eq!(a.concat(&b).to_list(), [1, 2, 3].map(Value::Int).to_vec());
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let peeled = self.iter().collect::<Vec<_>>();
        let mut result = other.clone();
        for value in peeled.into_iter().rev() {
            result.push(value.clone());
        }
        result
    }

    /// Materializes the elements into a list, head to tail.
    #[must_use]
    pub fn to_list(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// Iterates over the elements head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.first.as_deref() }
    }
}

impl Clone for Tuple {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Unlinks nodes one at a time so long tuples do not recurse on drop.
impl Drop for Tuple {
    fn drop(&mut self) {
        let mut next = self.first.take();
        while let Some(mut node) = next {
            next = node.rest.first.take();
        }
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let values = iter.into_iter().collect::<Vec<_>>();
        let mut tuple = Self::new();
        for value in values.into_iter().rev() {
            tuple.push(value);
        }
        tuple
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

/// Borrowing iterator over a [`Tuple`], head to tail.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.rest.first.as_deref();
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type IntoIter = Iter<'a>;
    type Item = &'a Value;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`Tuple`], head to tail.
pub struct IntoIter(Tuple);

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

impl IntoIterator for Tuple {
    type IntoIter = IntoIter;
    type Item = Value;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
