use crate::aggregate::{contains, every, reduce, some};
use crate::filtering::{filter, reject};
use crate::transform::map;

/// Combine sequences position by position.
///
/// The result is as long as the longest sequence. Positions past the end
/// of a shorter sequence are `None`.
pub fn zip<T>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
{
    let longest = reduce(sequences, |longest, sequence| longest.max(sequence.len()), 0usize);
    (0..longest)
        .map(|index| map(sequences, |sequence| sequence.get(index).cloned()))
        .collect()
}

/// The values of `first` that every one of `others` contains.
///
/// Keeps the order of `first` and any duplicates in it.
pub fn intersection<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    filter(first, |value| every(others, |other| contains(*other, value)))
}

/// The values of `first` that none of `others` contains.
///
/// Keeps the order of `first` and any duplicates in it.
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    reject(first, |value| some(others, |other| contains(*other, value)))
}

#[cfg(test)]
mod tests {
    use underbar_value::Value;

    use super::*;

    #[test]
    fn test_zip_pads_with_none() {
        let letters = [Value::from("a"), Value::from("b"), Value::from("c")];
        let numbers = [Value::from(1), Value::from(2)];
        let zipped = zip(&[&letters[..], &numbers[..]]);
        assert_eq!(
            zipped,
            vec![
                vec![Some(Value::from("a")), Some(Value::from(1))],
                vec![Some(Value::from("b")), Some(Value::from(2))],
                vec![Some(Value::from("c")), None],
            ]
        );
    }

    #[test]
    fn test_zip_nothing() {
        assert!(zip::<i32>(&[]).is_empty());
        assert!(zip::<i32>(&[&[], &[]]).is_empty());
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&[1, 2, 3], &[&[2, 3, 4]]), vec![2, 3]);
        assert_eq!(
            intersection(&[1, 2, 3, 4], &[&[2, 3, 4], &[4, 3]]),
            vec![3, 4]
        );
    }

    #[test]
    fn test_intersection_keeps_duplicates() {
        assert_eq!(intersection(&[2, 2, 1], &[&[2]]), vec![2, 2]);
    }

    #[test]
    fn test_intersection_without_others() {
        assert_eq!(intersection(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[1, 2, 3], &[&[2, 3]]), vec![1]);
        assert_eq!(
            difference(&[1, 2, 3, 4, 1], &[&[2], &[4, 9]]),
            vec![1, 3, 1]
        );
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }
}
