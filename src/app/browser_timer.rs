use std::time::Duration;

use leptos::prelude::*;

use crate::timer::{Scheduler, TimerError, TimerHandle};

/// `setInterval`/`setTimeout` on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[derive(Debug, Clone, Copy)]
pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

impl TimerHandle for BrowserTimer {
    fn cancel(&self) {
        match self {
            Self::Interval(handle) => handle.clear(),
            Self::Timeout(handle) => handle.clear(),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every<F>(&self, period: Duration, callback: F) -> Result<BrowserTimer, TimerError>
    where
        F: Fn() + Send + 'static,
    {
        set_interval_with_handle(callback, period)
            .map(BrowserTimer::Interval)
            .map_err(|err| TimerError::Rejected(format!("{err:?}")))
    }

    fn after<F>(&self, delay: Duration, callback: F) -> Result<BrowserTimer, TimerError>
    where
        F: FnOnce() + Send + 'static,
    {
        set_timeout_with_handle(callback, delay)
            .map(BrowserTimer::Timeout)
            .map_err(|err| TimerError::Rejected(format!("{err:?}")))
    }
}
