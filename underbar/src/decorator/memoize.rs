use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use ahash::{HashMap, HashMapExt};

/// A single-argument function that caches its results.
///
/// Results are cached by the argument's [`Display`] rendering. The function
/// runs at most once per distinct rendering, also when the wrapper is
/// called from several threads at once; a cached result is never replaced.
///
/// Only wrap pure functions of their one argument. Arguments that render
/// the same share a result.
pub struct Memoize<F, A: ?Sized, R> {
    function: F,
    cache: Mutex<HashMap<String, Arc<OnceLock<R>>>>,
    argument: PhantomData<fn(&A)>,
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(&A) -> R,
    A: Display + ?Sized,
    R: Clone,
{
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: Mutex::new(HashMap::new()),
            argument: PhantomData,
        }
    }

    pub fn call(&self, argument: &A) -> R {
        let key = argument.to_string();
        // the lock only guards finding the cell for this key; computing
        // happens outside it, so other keys aren't held up
        let cell = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_default()
            .clone();
        cell.get_or_init(|| {
            log::debug!("memoize: computing result for {}", argument);
            (self.function)(argument)
        })
        .clone()
    }

    /// The number of cached results.
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F, A: ?Sized, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize").finish_non_exhaustive()
    }
}

/// Wrap `function` so its results are cached. See [`Memoize`].
pub fn memoize<F, A, R>(function: F) -> Memoize<F, A, R>
where
    F: Fn(&A) -> R,
    A: Display + ?Sized,
    R: Clone,
{
    Memoize::new(function)
}
