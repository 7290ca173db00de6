use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::error;

/// Something with named properties.
///
/// Used by [`pluck`](crate::pluck) and
/// [`sort_by_property`](crate::sort_by_property).
pub trait Record {
    type Value;

    /// The value of the named property, if present.
    fn property(&self, name: &str) -> Option<&Self::Value>;
}

impl<V, S: BuildHasher> Record for IndexMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Truthiness, for predicates that test the value itself.
///
/// Zero, NaN, the empty string, `false` and `None` are falsy. Everything
/// else is truthy, empty containers included.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! integer_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

integer_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        !(self.is_nan() || *self == 0.0)
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        !(self.is_nan() || *self == 0.0)
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Named methods that [`invoke`](crate::invoke) can call.
pub trait Methods {
    /// The type of the arguments the methods take.
    type Arg;

    /// Call the named method on `self` with `args`.
    ///
    /// An unknown name is an [`error::Error::MethodNotFound`].
    fn call_method(&mut self, name: &str, args: &[Self::Arg]) -> error::Result<()>;
}

/// Vectors support `push`, `pop`, `reverse`, `sort` and `clear`.
impl<T: Ord + Clone> Methods for Vec<T> {
    type Arg = T;

    fn call_method(&mut self, name: &str, args: &[T]) -> error::Result<()> {
        match name {
            "push" => self.extend_from_slice(args),
            "pop" => {
                no_arguments(name, args)?;
                self.pop();
            }
            "reverse" => {
                no_arguments(name, args)?;
                self.reverse();
            }
            "sort" => {
                no_arguments(name, args)?;
                self.sort();
            }
            "clear" => {
                no_arguments(name, args)?;
                self.clear();
            }
            _ => {
                return Err(error::Error::MethodNotFound {
                    method: name.to_string(),
                    receiver: "vector",
                })
            }
        }
        Ok(())
    }
}

pub(crate) fn no_arguments<A>(name: &str, args: &[A]) -> error::Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(error::Error::InvalidArguments {
            method: name.to_string(),
            expected: 0,
            got: args.len(),
        })
    }
}
