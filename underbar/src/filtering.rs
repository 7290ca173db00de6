use crate::collection::{Collection, Key};
use crate::traversal::each;

/// The values for which `predicate` holds, in order.
pub fn filter<'a, T, P>(collection: impl Into<Collection<'a, T>>, mut predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    P: FnMut(&'a T) -> bool,
{
    let mut result = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value) {
            result.push(value.clone());
        }
    });
    result
}

/// The values for which `predicate` does not hold, in order.
pub fn reject<'a, T, P>(collection: impl Into<Collection<'a, T>>, mut predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    P: FnMut(&'a T) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// The first occurrence of every distinct value, in first-seen order.
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    // everything that survived so far
    let mut kept: Vec<&T> = Vec::new();
    reject(sequence, |value| {
        if kept.contains(&value) {
            true
        } else {
            kept.push(value);
            false
        }
    })
}

/// The index of the first value equal to `target`.
pub fn index_of<T>(sequence: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    let mut found = None;
    each(sequence, |value, key, _| {
        if let (None, Key::Index(index)) = (found, key) {
            if value == target {
                found = Some(index);
            }
        }
    });
    found
}

#[cfg(test)]
mod tests {
    use underbar_value::Value;

    use super::*;
    use crate::collection::Mapping;

    #[test]
    fn test_filter_keeps_order() {
        let evens = filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_mapping_values() {
        let mut mapping = Mapping::new();
        mapping.insert("a".to_string(), 1);
        mapping.insert("b".to_string(), 20);
        mapping.insert("c".to_string(), 30);
        assert_eq!(filter(&mapping, |n| *n > 10), vec![20, 30]);
    }

    #[test]
    fn test_reject_is_complement() {
        let odds = reject(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
        assert_eq!(odds, vec![1, 3, 5]);
    }

    #[test]
    fn test_uniq() {
        assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
        assert_eq!(uniq::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_uniq_values_use_value_equality() {
        let values = [Value::from(1), Value::from(1.0), Value::from("1")];
        assert_eq!(uniq(&values), vec![Value::from(1), Value::from("1")]);
    }

    #[test]
    fn test_uniq_large_mixed_numbers() {
        let values = [
            Value::Integer(i64::MAX),
            Value::Double(9_223_372_036_854_775_808.0),
            Value::Integer(i64::MAX - 1),
        ];
        assert_eq!(uniq(&values).len(), 3);
        assert_eq!(index_of(&values, &values[2]), Some(2));
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
        assert_eq!(index_of(&[10, 20], &40), None);
        assert_eq!(index_of::<i32>(&[], &1), None);
    }
}
