use std::sync::Arc;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{Context, Scheduler, ThreadScheduler};

/// Build a [`Context`].
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    seed: Option<u64>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl ContextBuilder {
    /// Seed the random number generator, which makes shuffles
    /// reproducible.
    ///
    /// Without a seed, a random one is drawn when the context is built.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Set the scheduler that runs delayed invocations.
    ///
    /// Defaults to [`ThreadScheduler`].
    pub fn scheduler(&mut self, scheduler: impl Scheduler + 'static) -> &mut Self {
        self.scheduler = Some(Arc::new(scheduler));
        self
    }

    /// Build the context.
    pub fn build(&self) -> Context {
        let seed = self.seed.unwrap_or_else(rand::random);
        let scheduler = self
            .scheduler
            .clone()
            .unwrap_or_else(|| Arc::new(ThreadScheduler));
        Context::new(Xoshiro256PlusPlus::seed_from_u64(seed), scheduler)
    }
}
