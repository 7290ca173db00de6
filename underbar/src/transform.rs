use crate::collection::Collection;
use crate::error;
use crate::traits::{Methods, Record};
use crate::traversal::{each, each_mut};

/// Apply `iteratee` to every value, collecting the results in order.
pub fn map<'a, T, R, F>(collection: impl Into<Collection<'a, T>>, mut iteratee: F) -> Vec<R>
where
    T: 'a,
    F: FnMut(&'a T) -> R,
{
    let collection: Collection<'a, T> = collection.into();
    let mut result = Vec::with_capacity(collection.len());
    each(collection, |value, _, _| result.push(iteratee(value)));
    result
}

/// The named property of every record. Records without the property give
/// `None`.
pub fn pluck<T>(sequence: &[T], name: &str) -> Vec<Option<T::Value>>
where
    T: Record,
    T::Value: Clone,
{
    map(sequence, |record| record.property(name).cloned())
}

/// What [`invoke`] calls on each element.
pub enum Method<'a, T: Methods> {
    /// A method looked up by name through [`Methods`].
    Named(&'a str),
    /// A function called with the element as receiver.
    Function(Box<dyn FnMut(&mut T, &[T::Arg]) -> error::Result<()> + 'a>),
}

impl<'a, T: Methods> Method<'a, T> {
    pub fn function<F>(function: F) -> Self
    where
        F: FnMut(&mut T, &[T::Arg]) -> error::Result<()> + 'a,
    {
        Method::Function(Box::new(function))
    }
}

impl<'a, T: Methods> From<&'a str> for Method<'a, T> {
    fn from(name: &'a str) -> Self {
        Method::Named(name)
    }
}

/// Call a method on every element, forwarding `args` to each call.
///
/// The method may change the elements; the sequence itself is handed back.
/// The first failing call stops the invocation and its error is returned,
/// leaving earlier elements changed.
pub fn invoke<'s, 'm, T>(
    sequence: &'s mut [T],
    method: impl Into<Method<'m, T>>,
    args: &[T::Arg],
) -> error::Result<&'s mut [T]>
where
    T: Methods,
{
    match method.into() {
        Method::Named(name) => {
            each_mut(sequence, |value, _| value.call_method(name, args))?;
        }
        Method::Function(mut function) => {
            each_mut(sequence, |value, _| function(value, args))?;
        }
    }
    Ok(sequence)
}
