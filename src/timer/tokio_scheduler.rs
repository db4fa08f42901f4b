use std::time::Duration;

use tokio::{
    runtime::Handle,
    task::AbortHandle,
    time::{interval_at, sleep_until, Instant},
};

use super::{Scheduler, TimerError, TimerHandle};

/// Spawns timers as tasks on the ambient tokio runtime. Paired with
/// `start_paused = true` this gives tests a deterministic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[derive(Debug)]
pub struct TaskTimer(AbortHandle);

impl TimerHandle for TaskTimer {
    fn cancel(&self) {
        self.0.abort();
    }
}

fn runtime() -> Result<Handle, TimerError> {
    Handle::try_current().map_err(|err| TimerError::Rejected(err.to_string()))
}

impl Scheduler for TokioScheduler {
    type Handle = TaskTimer;

    fn every<F>(&self, period: Duration, callback: F) -> Result<TaskTimer, TimerError>
    where
        F: Fn() + Send + 'static,
    {
        if period.is_zero() {
            return Err(TimerError::Rejected("repeat period must be non-zero".into()));
        }
        let runtime = runtime()?;
        // plain `interval` completes its first tick immediately
        let mut ticks = interval_at(Instant::now() + period, period);
        let task = runtime.spawn(async move {
            loop {
                ticks.tick().await;
                callback();
            }
        });
        Ok(TaskTimer(task.abort_handle()))
    }

    fn after<F>(&self, delay: Duration, callback: F) -> Result<TaskTimer, TimerError>
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let task = runtime()?.spawn(async move {
            sleep_until(deadline).await;
            callback();
        });
        Ok(TaskTimer(task.abort_handle()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_every_skips_the_immediate_tick() {
        let start = Instant::now();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let _timer = TokioScheduler
            .every(Duration::from_millis(100), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        sleep_until(start + Duration::from_millis(99)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep_until(start + Duration::from_millis(301)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timeout_never_fires() {
        let start = Instant::now();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let timer = TokioScheduler
            .after(Duration::from_millis(50), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        timer.cancel();
        timer.cancel();
        sleep_until(start + Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_rejected() {
        let res = TokioScheduler.every(Duration::ZERO, || {});
        assert!(matches!(res, Err(TimerError::Rejected(_))));
    }

    #[test]
    fn test_scheduling_without_runtime_is_rejected() {
        let res = TokioScheduler.after(Duration::from_millis(1), || {});
        assert!(matches!(res, Err(TimerError::Rejected(_))));
    }
}
