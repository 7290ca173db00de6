/// The first value, if any.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The first `n` values, or all of them if there are fewer.
pub fn first_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[..n.min(sequence.len())].to_vec()
}

/// The last value, if any.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The last `n` values, or all of them if there are fewer.
pub fn last_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(n)..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        assert_eq!(first(&[1, 2, 3]), Some(&1));
        assert_eq!(first::<i32>(&[]), None);
        assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
        assert_eq!(first_n(&[1, 2, 3], 0), Vec::<i32>::new());
        assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
    }

    #[test]
    fn test_last() {
        assert_eq!(last(&[1, 2, 3]), Some(&3));
        assert_eq!(last::<i32>(&[]), None);
        assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
        assert_eq!(last_n(&[1, 2, 3], 0), Vec::<i32>::new());
        assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
    }
}
