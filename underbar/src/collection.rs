use indexmap::IndexMap;
use underbar_value::Value;

/// String keys to values, traversed in insertion order.
pub type Mapping<V> = IndexMap<String, V>;

/// Anything the traversal can walk: an indexed sequence or a keyed
/// mapping.
///
/// Which variant you get is decided by the type you convert from, so a
/// slice is always a sequence and an [`IndexMap`] is always a mapping.
#[derive(Debug)]
pub enum Collection<'a, T> {
    Sequence(&'a [T]),
    Mapping(&'a Mapping<T>),
}

// derive would require T: Copy
impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<T> Collection<'_, T> {
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The key under which traversal finds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Position in a sequence.
    Index(usize),
    /// Key in a mapping.
    Name(&'a str),
}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T> From<&'a Mapping<T>> for Collection<'a, T> {
    fn from(entries: &'a Mapping<T>) -> Self {
        Collection::Mapping(entries)
    }
}

/// Sequence and mapping values traverse their contents. Any other value
/// has nothing in it to traverse.
impl<'a> From<&'a Value> for Collection<'a, Value> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Sequence(items) => Collection::Sequence(items),
            Value::Mapping(entries) => Collection::Mapping(entries),
            _ => Collection::Sequence(&[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_discrimination() {
        let sequence = Value::sequence([1, 2, 3]);
        assert!(matches!(
            Collection::from(&sequence),
            Collection::Sequence(items) if items.len() == 3
        ));
        let mapping = Value::mapping([("length", 3)]);
        assert!(matches!(
            Collection::from(&mapping),
            Collection::Mapping(_)
        ));
        let scalar = Value::from(7);
        assert!(Collection::from(&scalar).is_empty());
    }
}
