use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{ContextBuilder, Scheduler};

/// The environment for the operations that need more than their inputs:
/// a random number generator for [`Context::shuffle`] and a
/// [`Scheduler`] for [`Context::delay`].
///
/// Construct one with [`ContextBuilder`]; [`Context::default`] draws a
/// random seed and schedules on threads.
#[derive(Debug)]
pub struct Context {
    rng: Xoshiro256PlusPlus,
    scheduler: Arc<dyn Scheduler>,
}

impl Context {
    pub(crate) fn new(rng: Xoshiro256PlusPlus, scheduler: Arc<dyn Scheduler>) -> Self {
        Self { rng, scheduler }
    }

    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// A uniformly random permutation of `sequence`.
    ///
    /// The input is left alone; the permutation is made on a copy with a
    /// Fisher-Yates shuffle.
    pub fn shuffle<T: Clone>(&mut self, sequence: &[T]) -> Vec<T> {
        let mut result = sequence.to_vec();
        for i in (1..result.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            result.swap(i, j);
        }
        result
    }

    /// Invoke `function(args)` once, no sooner than `wait` from now.
    ///
    /// Returns immediately. There is no way to cancel the invocation or
    /// to observe its result.
    pub fn delay<F, A, R>(&self, function: F, wait: Duration, args: A)
    where
        F: FnOnce(A) -> R + Send + 'static,
        A: Send + 'static,
    {
        self.scheduler.schedule(
            wait,
            Box::new(move || {
                let _ = function(args);
            }),
        );
    }
}

impl Default for Context {
    fn default() -> Self {
        ContextBuilder::default().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut context = Context::builder().seed(7).build();
        let input = (0..50).collect::<Vec<_>>();
        let mut shuffled = context.shuffle(&input);
        assert_ne!(shuffled, input);
        shuffled.sort();
        assert_eq!(shuffled, input);
    }

    #[test]
    fn test_shuffle_seed_is_reproducible() {
        let input = (0..20).collect::<Vec<_>>();
        let a = Context::builder().seed(42).build().shuffle(&input);
        let b = Context::builder().seed(42).build().shuffle(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_small() {
        let mut context = Context::default();
        assert_eq!(context.shuffle::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(context.shuffle(&[9]), vec![9]);
    }

    // every permutation of three values shows up with roughly equal
    // frequency
    #[test]
    fn test_shuffle_is_uniform() {
        let mut context = Context::builder().seed(1).build();
        let mut counts = ahash::HashMap::<Vec<i32>, usize>::default();
        let rounds = 60_000;
        for _ in 0..rounds {
            *counts.entry(context.shuffle(&[1, 2, 3])).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = rounds / 6;
        for count in counts.values() {
            assert!(count.abs_diff(expected) < expected / 10, "{:?}", counts);
        }
    }
}
