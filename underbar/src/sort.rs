use crate::collection::Collection;
use crate::traits::Record;
use crate::transform::map;

/// Sort values ascending by the key `key` derives from each of them.
///
/// This is a stable selection sort: it repeatedly takes the earliest
/// smallest remaining value, comparing keys with `<` only. A `None` key
/// is larger than every `Some` key. A key that is incomparable with the
/// current smallest one never replaces it. Quadratic in the length of the
/// collection.
pub fn sort_by<'a, T, K, F>(collection: impl Into<Collection<'a, T>>, mut key: F) -> Vec<T>
where
    T: Clone + 'a,
    K: PartialOrd,
    F: FnMut(&'a T) -> Option<K>,
{
    let mut remaining = map(collection, |value| (key(value), value));
    let mut sorted = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let mut smallest = 0;
        for (index, (candidate, _)) in remaining.iter().enumerate().skip(1) {
            if precedes(candidate, &remaining[smallest].0) {
                smallest = index;
            }
        }
        let (_, value) = remaining.remove(smallest);
        sorted.push(value.clone());
    }
    sorted
}

/// Sort records ascending by the named property.
///
/// Records without the property sort last, in their original order.
pub fn sort_by_property<'a, T>(collection: impl Into<Collection<'a, T>>, name: &str) -> Vec<T>
where
    T: Record + Clone + 'a,
    T::Value: PartialOrd,
{
    sort_by(collection, |record| record.property(name))
}

fn precedes<K: PartialOrd>(candidate: &Option<K>, smallest: &Option<K>) -> bool {
    match (candidate, smallest) {
        (Some(candidate), Some(smallest)) => candidate < smallest,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use underbar_value::Value;

    use super::*;

    fn record(n: i32, id: &str) -> Value {
        Value::mapping([("n", Value::from(n)), ("id", Value::from(id))])
    }

    fn ids(values: &[Value]) -> Vec<&str> {
        values
            .iter()
            .filter_map(|value| value.get("id").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn test_sort_by_property() {
        let records = [record(3, "c"), record(1, "a"), record(2, "b")];
        let sorted = sort_by_property(&records, "n");
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = [record(1, "a"), record(0, "z"), record(1, "b")];
        let sorted = sort_by_property(&records, "n");
        assert_eq!(ids(&sorted), vec!["z", "a", "b"]);
    }

    #[test]
    fn test_missing_property_sorts_last() {
        let records = [
            Value::mapping([("id", "x")]),
            record(2, "b"),
            Value::mapping([("id", "y")]),
            record(1, "a"),
        ];
        let sorted = sort_by_property(&records, "n");
        assert_eq!(ids(&sorted), vec!["a", "b", "x", "y"]);
    }

    // descending, through a negated key
    #[rstest]
    #[case(vec![3, 1, 2], vec![3, 2, 1])]
    #[case(vec![-1, -2, 5, 0], vec![5, 0, -1, -2])]
    #[case(vec![4, 4, 4], vec![4, 4, 4])]
    #[case(vec![], vec![])]
    fn test_sort_by_iteratee(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(sort_by(&input, |n| Some(-n)), expected);
    }

    #[test]
    fn test_sort_by_length() {
        let words = ["apple", "fig", "kiwi", "pea"];
        let sorted = sort_by(&words, |word| Some(word.len()));
        assert_eq!(sorted, vec!["fig", "pea", "kiwi", "apple"]);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let input = vec![2, 1];
        let sorted = sort_by(&input, |n| Some(*n));
        assert_eq!(input, vec![2, 1]);
        assert_eq!(sorted, vec![1, 2]);
    }

    #[test]
    fn test_incomparable_keys_keep_their_place() {
        let values = [Value::from("b"), Value::from(2), Value::from("a"), Value::from(1)];
        let sorted = sort_by(&values, |value| Some(value.clone()));
        insta::assert_snapshot!(Value::sequence(sorted), @r#"["a", "b", 1, 2]"#);
    }
}
