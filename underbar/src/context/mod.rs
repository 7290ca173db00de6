mod context_builder;
mod context_core;
mod scheduler;

pub use context_builder::ContextBuilder;
pub use context_core::Context;
pub use scheduler::{Scheduler, Task, ThreadScheduler};
