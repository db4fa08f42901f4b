//! Scheduling seam between the view-state controller and whatever clock
//! drives it: browser timers in the hydrated page, tokio tasks in tests.

#[cfg(test)]
pub(crate) mod tokio_scheduler;

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer could not be scheduled: {0}")]
    Rejected(String),
}

/// Cancellation token for one scheduled timer.
pub trait TimerHandle: Send + 'static {
    /// Cancels the timer. Calling it more than once is harmless, and once it
    /// returns the callback is never invoked again.
    fn cancel(&self);
}

pub trait Scheduler: Clone + Send + Sync + 'static {
    type Handle: TimerHandle;

    /// Runs `callback` every `period`, the first time one full `period` from now.
    fn every<F>(&self, period: Duration, callback: F) -> Result<Self::Handle, TimerError>
    where
        F: Fn() + Send + 'static;

    /// Runs `callback` once, `delay` from now.
    fn after<F>(&self, delay: Duration, callback: F) -> Result<Self::Handle, TimerError>
    where
        F: FnOnce() + Send + 'static;
}
