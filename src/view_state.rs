//! Process-local view state for the portfolio page and the controller that
//! mutates it: the theme toggle, the scroll threshold observer and the
//! recurring hide/reveal cycle of the hero name.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use crate::timer::{Scheduler, TimerError, TimerHandle};

pub const SCROLL_THRESHOLD: f64 = 50.0;
pub const CYCLE_PERIOD: Duration = Duration::from_millis(6000);
pub const HIDDEN_FOR: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub theme: ThemeMode,
    pub scrolled: bool,
    pub name_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            scrolled: false,
            name_visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Time between two hide transitions, measured start to start.
    pub cycle_period: Duration,
    /// How long the name stays hidden within each cycle.
    pub hidden_for: Duration,
    /// Scroll offset, in pixels, past which the page counts as scrolled.
    pub scroll_threshold: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            cycle_period: CYCLE_PERIOD,
            hidden_for: HIDDEN_FOR,
            scroll_threshold: SCROLL_THRESHOLD,
        }
    }
}

type Observer = Arc<dyn Fn(ViewState) + Send + Sync>;

struct Inner<H> {
    state: ViewState,
    running: bool,
    cycle: Option<H>,
    reveal: Option<H>,
    observer: Option<Observer>,
}

struct Shared<H> {
    inner: Mutex<Inner<H>>,
    /// Serialises observer calls. Each call reads the state while holding it,
    /// so the last call always carries the newest state.
    delivery: Mutex<()>,
}

fn lock<H>(shared: &Shared<H>) -> MutexGuard<'_, Inner<H>> {
    // state is plain data, a panicking observer cannot leave it half-written
    shared.inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Applies `f` under the lock, then notifies the observer outside of it if the
/// state changed.
fn mutate<H, R>(shared: &Shared<H>, f: impl FnOnce(&mut Inner<H>) -> R) -> R {
    let (res, observer) = {
        let mut inner = lock(shared);
        let before = inner.state;
        let res = f(&mut inner);
        let observer = if inner.state != before {
            inner.observer.clone()
        } else {
            None
        };
        (res, observer)
    };
    if let Some(observer) = observer {
        let _delivery = shared
            .delivery
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let latest = lock(shared).state;
        observer(latest);
    }
    res
}

/// Owns the page's [`ViewState`] and drives the name cycle: visible for
/// `cycle_period - hidden_for`, hidden for `hidden_for`, repeating.
///
/// The outer repeating timer and the inner one-shot reveal are tracked as two
/// separate handles so [`stop`](Self::stop) can cancel both. Dropping the
/// controller stops it.
pub struct ViewStateController<S: Scheduler> {
    scheduler: S,
    config: ControllerConfig,
    shared: Arc<Shared<S::Handle>>,
}

impl<S: Scheduler> ViewStateController<S> {
    pub fn new(scheduler: S, config: ControllerConfig) -> Self {
        Self {
            scheduler,
            config,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: ViewState::default(),
                    running: false,
                    cycle: None,
                    reveal: None,
                    observer: None,
                }),
                delivery: Mutex::new(()),
            }),
        }
    }

    pub fn state(&self) -> ViewState {
        lock(&self.shared).state
    }

    pub fn is_running(&self) -> bool {
        lock(&self.shared).running
    }

    /// Registers the re-render hook, replacing any previous one. It is called
    /// after every change with the newest state, never while the state lock is
    /// held. Calls are serialised, so the hook must not call back into a
    /// mutating method.
    pub fn subscribe(&self, observer: impl Fn(ViewState) + Send + Sync + 'static) {
        lock(&self.shared).observer = Some(Arc::new(observer));
    }

    pub fn toggle_theme(&self) {
        mutate(&self.shared, |inner| {
            inner.state.theme = inner.state.theme.toggled();
        });
    }

    pub fn on_scroll(&self, offset: f64) {
        let threshold = self.config.scroll_threshold;
        mutate(&self.shared, |inner| {
            inner.state.scrolled = offset > threshold;
        });
    }

    /// Starts the name cycle with the name visible. No-op while running.
    pub fn start(&self) -> Result<(), TimerError> {
        let weak = Arc::downgrade(&self.shared);
        let scheduler = self.scheduler.clone();
        let hidden_for = self.config.hidden_for;
        let period = self.config.cycle_period;
        mutate(&self.shared, |inner| {
            if inner.running {
                return Ok(());
            }
            let cycle = self
                .scheduler
                .every(period, move || hide_name(&weak, &scheduler, hidden_for))?;
            inner.cycle = Some(cycle);
            inner.running = true;
            inner.state.name_visible = true;
            log::info!("name cycle started ({period:?} period, hidden for {hidden_for:?})");
            Ok(())
        })
    }

    /// Cancels the cycle and any pending reveal. Idempotent; once it returns
    /// no timer mutates the state again.
    pub fn stop(&self) {
        let mut inner = lock(&self.shared);
        if let Some(cycle) = inner.cycle.take() {
            cycle.cancel();
        }
        if let Some(reveal) = inner.reveal.take() {
            reveal.cancel();
        }
        if inner.running {
            inner.running = false;
            log::info!("name cycle stopped");
        }
    }
}

impl<S: Scheduler> Drop for ViewStateController<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn hide_name<S: Scheduler>(
    weak: &Weak<Shared<S::Handle>>,
    scheduler: &S,
    hidden_for: Duration,
) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let target = Arc::downgrade(&shared);
    mutate(&shared, |inner| {
        if !inner.running {
            return;
        }
        // only reachable when hidden_for >= cycle_period
        if let Some(previous) = inner.reveal.take() {
            previous.cancel();
        }
        match scheduler.after(hidden_for, move || reveal_name(&target)) {
            Ok(reveal) => {
                inner.reveal = Some(reveal);
                inner.state.name_visible = false;
                log::debug!("name hidden");
            }
            Err(err) => log::warn!("skipping name cycle: {err}"),
        }
    });
}

fn reveal_name<H>(weak: &Weak<Shared<H>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    mutate(&shared, |inner| {
        if !inner.running {
            return;
        }
        inner.reveal = None;
        inner.state.name_visible = true;
        log::debug!("name revealed");
    });
}
