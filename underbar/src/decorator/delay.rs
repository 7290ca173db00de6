use std::time::Duration;

use crate::context::{Scheduler, ThreadScheduler};

/// Invoke `function(args)` once, no sooner than `wait` from now, on a
/// background thread.
///
/// Returns immediately. To run delayed work on another scheduler, use
/// [`Context::delay`](crate::context::Context::delay).
pub fn delay<F, A, R>(function: F, wait: Duration, args: A)
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    ThreadScheduler.schedule(
        wait,
        Box::new(move || {
            let _ = function(args);
        }),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_delay_returns_before_invoking() {
        let (sender, receiver) = mpsc::channel();
        let start = Instant::now();
        delay(
            move |(a, b): (i32, i32)| sender.send((a + b, Instant::now())),
            Duration::from_millis(30),
            (1, 2),
        );
        assert!(receiver.try_recv().is_err());
        let (sum, ran_at) = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(sum, 3);
        assert!(ran_at.duration_since(start) >= Duration::from_millis(30));
    }

    #[test]
    fn test_zero_wait_still_runs() {
        let (sender, receiver) = mpsc::channel();
        delay(move |s: &'static str| sender.send(s), Duration::ZERO, "done");
        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(5)).unwrap(),
            "done"
        );
    }
}
