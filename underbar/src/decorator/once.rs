use std::fmt;
use std::sync::OnceLock;

/// A function that runs at most once.
///
/// The first [`call`](Once::call) invokes the function and stores its
/// result. Every call, the first included, returns a clone of that result.
/// The arguments of later calls are ignored.
///
/// Concurrent first calls are safe: exactly one of them runs the function
/// and the others wait for its result. Calling the same wrapper from inside
/// its own function deadlocks.
pub struct Once<F, R> {
    function: F,
    result: OnceLock<R>,
}

impl<F, R> Once<F, R> {
    pub fn new(function: F) -> Self {
        Self {
            function,
            result: OnceLock::new(),
        }
    }

    pub fn call<A>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        R: Clone,
    {
        self.result
            .get_or_init(|| {
                log::debug!("once: invoking wrapped function");
                (self.function)(args)
            })
            .clone()
    }

    /// Whether the function has been invoked.
    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("result", &self.result.get())
            .finish_non_exhaustive()
    }
}

/// Wrap `function` so it runs at most once. See [`Once`].
pub fn once<F, R>(function: F) -> Once<F, R> {
    Once::new(function)
}
