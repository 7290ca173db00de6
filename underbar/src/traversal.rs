use crate::collection::{Collection, Key};

/// Visit every value in a collection, in order.
///
/// `visit` receives the value, its key and the collection itself. A
/// sequence is visited in index order with [`Key::Index`], a mapping in
/// insertion order with [`Key::Name`].
///
/// Every other traversing operation in this crate is built on `each`, or
/// on the fold underneath it when it needs to carry an owned accumulator.
pub fn each<'a, T, F>(collection: impl Into<Collection<'a, T>>, mut visit: F)
where
    T: 'a,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>),
{
    fold(collection, (), |(), value, key, collection| {
        visit(value, key, collection)
    })
}

/// The traversal of [`each`], threading an owned state through the visits.
pub(crate) fn fold<'a, T, A, F>(
    collection: impl Into<Collection<'a, T>>,
    initial: A,
    mut step: F,
) -> A
where
    T: 'a,
    F: FnMut(A, &'a T, Key<'a>, Collection<'a, T>) -> A,
{
    let collection: Collection<'a, T> = collection.into();
    match collection {
        Collection::Sequence(items) => {
            items.iter().enumerate().fold(initial, |state, (index, value)| {
                step(state, value, Key::Index(index), collection)
            })
        }
        Collection::Mapping(entries) => entries.iter().fold(initial, |state, (name, value)| {
            step(state, value, Key::Name(name), collection)
        }),
    }
}

/// Visit every value of a sequence mutably, in index order.
///
/// Stops at the first error and returns it.
pub fn each_mut<T, E, F>(sequence: &mut [T], mut visit: F) -> Result<(), E>
where
    F: FnMut(&mut T, usize) -> Result<(), E>,
{
    for (index, value) in sequence.iter_mut().enumerate() {
        visit(value, index)?;
    }
    Ok(())
}
