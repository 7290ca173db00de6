//! Eager functional operations over sequences and string-keyed mappings.
//!
//! Every traversal goes through [`each`], which visits sequences by index
//! and mappings in insertion order. The other operations are built from it
//! and from each other: [`filter`] and [`reject`], [`map`] and [`reduce`],
//! [`every`] and [`some`], and so on. They never mutate their input, with
//! the exception of [`extend`], [`defaults`] and [`invoke`].
//!
//! The operations are generic over the element type. For heterogeneous
//! data, use [`Value`], which implements [`Record`], [`Truthy`],
//! [`Methods`] and [`Flatten`].
//!
//! [`once`], [`memoize`] and [`delay`] wrap functions. [`Context`] holds
//! the random number generator for [`Context::shuffle`] and the scheduler
//! for [`Context::delay`].
pub mod context;
pub mod error;

mod access;
mod aggregate;
mod collection;
mod decorator;
mod filtering;
mod flatten;
mod merge;
mod set;
mod sort;
mod traits;
mod transform;
mod traversal;
mod value;

pub use underbar_value::{Entries, Value};

pub use crate::access::{first, first_n, last, last_n};
pub use crate::aggregate::{
    contains, every, every_truthy, reduce, reduce_or_zero, some, some_truthy,
};
pub use crate::collection::{Collection, Key, Mapping};
pub use crate::context::Context;
pub use crate::decorator::{delay, memoize, once, Memoize, Once};
pub use crate::error::{Error, Result};
pub use crate::filtering::{filter, index_of, reject, uniq};
pub use crate::flatten::{flatten, flatten_value, Flatten, Nest, Node};
pub use crate::merge::{defaults, extend};
pub use crate::set::{difference, intersection, zip};
pub use crate::sort::{sort_by, sort_by_property};
pub use crate::traits::{Methods, Record, Truthy};
pub use crate::transform::{invoke, map, pluck, Method};
pub use crate::traversal::{each, each_mut};

/// A uniformly random permutation of `sequence`, drawn with a freshly
/// seeded [`Context`].
///
/// Use [`Context::shuffle`] with a seeded context for reproducible results.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    Context::default().shuffle(sequence)
}
