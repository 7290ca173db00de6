use std::slice;

use underbar_value::Value;

/// An arbitrarily nested sequence of `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Nest<T> {
    Leaf(T),
    Sequence(Vec<Nest<T>>),
}

impl<T> From<Vec<Nest<T>>> for Nest<T> {
    fn from(items: Vec<Nest<T>>) -> Self {
        Nest::Sequence(items)
    }
}

/// How [`flatten`] looks at one node of a nested structure.
pub enum Node<'a, S, L> {
    /// A nested sequence to descend into.
    Sequence(&'a [S]),
    /// Anything else, which ends up in the output.
    Leaf(&'a L),
}

/// A structure that sequences can nest inside.
pub trait Flatten: Sized {
    type Leaf: Clone;

    fn node(&self) -> Node<'_, Self, Self::Leaf>;
}

impl<T: Clone> Flatten for Nest<T> {
    type Leaf = T;

    fn node(&self) -> Node<'_, Self, T> {
        match self {
            Nest::Leaf(leaf) => Node::Leaf(leaf),
            Nest::Sequence(items) => Node::Sequence(items),
        }
    }
}

impl Flatten for Value {
    type Leaf = Value;

    fn node(&self) -> Node<'_, Self, Value> {
        match self {
            Value::Sequence(items) => Node::Sequence(items),
            _ => Node::Leaf(self),
        }
    }
}

/// All leaves of a nested sequence, depth first and left to right.
///
/// Nesting depth is unbounded; empty nested sequences contribute
/// nothing.
pub fn flatten<S: Flatten>(nested: &[S]) -> Vec<S::Leaf> {
    let mut result = Vec::new();
    // an explicit stack, so deep nesting can't overflow the call stack
    let mut stack: Vec<slice::Iter<'_, S>> = vec![nested.iter()];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(item) => match item.node() {
                Node::Sequence(items) => stack.push(items.iter()),
                Node::Leaf(leaf) => result.push(leaf.clone()),
            },
            None => {
                stack.pop();
            }
        }
    }
    result
}

/// Flatten a single value. A value that isn't a sequence comes back as
/// the only leaf.
pub fn flatten_value(value: &Value) -> Vec<Value> {
    match value {
        Value::Sequence(items) => flatten(items),
        _ => vec![value.clone()],
    }
}
