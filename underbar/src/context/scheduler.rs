use std::fmt;
use std::thread;
use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks some time in the future.
///
/// [`delay`](crate::delay) hands its invocation to a scheduler. A scheduler
/// runs each task it accepts once, no sooner than `wait` after it was
/// scheduled. A task the scheduler has no resources to run is dropped
/// unrun and the failure is logged; `schedule` itself never fails or
/// blocks.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, wait: Duration, task: Task);
}

/// Runs every task on its own detached thread after sleeping.
///
/// If the thread can't be spawned, the task is dropped and an error is
/// logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn schedule(&self, wait: Duration, task: Task) {
        log::trace!("scheduling task in {:?}", wait);
        let spawned = thread::Builder::new()
            .name("underbar-delay".to_string())
            .spawn(move || {
                thread::sleep(wait);
                log::trace!("running delayed task");
                task();
            });
        if let Err(e) = spawned {
            log::error!("could not spawn thread for delayed task: {}", e);
        }
    }
}

impl fmt::Debug for dyn Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scheduler")
    }
}
