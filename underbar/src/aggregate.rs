use num_traits::Zero;

use crate::collection::Collection;
use crate::traits::Truthy;
use crate::traversal::fold;

/// Fold the values left to right, starting from `initial`.
pub fn reduce<'a, T, A, F>(collection: impl Into<Collection<'a, T>>, mut combine: F, initial: A) -> A
where
    T: 'a,
    F: FnMut(A, &'a T) -> A,
{
    fold(collection, initial, |accumulator, value, _, _| {
        combine(accumulator, value)
    })
}

/// [`reduce`] starting from numeric zero.
pub fn reduce_or_zero<'a, T, A, F>(collection: impl Into<Collection<'a, T>>, combine: F) -> A
where
    T: 'a,
    A: Zero,
    F: FnMut(A, &'a T) -> A,
{
    reduce(collection, combine, A::zero())
}

/// Whether any value equals `target`.
pub fn contains<'a, T>(collection: impl Into<Collection<'a, T>>, target: &T) -> bool
where
    T: PartialEq + 'a,
{
    reduce(
        collection,
        |found, value| found || value == target,
        false,
    )
}

/// Whether `predicate` holds for every value. True for an empty
/// collection.
///
/// Once a value fails, `predicate` isn't called for the rest.
pub fn every<'a, T, P>(collection: impl Into<Collection<'a, T>>, mut predicate: P) -> bool
where
    T: 'a,
    P: FnMut(&'a T) -> bool,
{
    reduce(collection, |all, value| all && predicate(value), true)
}

/// Whether every value is truthy.
pub fn every_truthy<'a, T>(collection: impl Into<Collection<'a, T>>) -> bool
where
    T: Truthy + 'a,
{
    every(collection, |value| value.is_truthy())
}

/// Whether `predicate` holds for at least one value. False for an empty
/// collection.
///
/// This is exactly "not every value fails".
pub fn some<'a, T, P>(collection: impl Into<Collection<'a, T>>, mut predicate: P) -> bool
where
    T: 'a,
    P: FnMut(&'a T) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// Whether at least one value is truthy.
pub fn some_truthy<'a, T>(collection: impl Into<Collection<'a, T>>) -> bool
where
    T: Truthy + 'a,
{
    some(collection, |value| value.is_truthy())
}
