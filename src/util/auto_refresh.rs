//! Periodic full-page reload of the messages view.
//!
//! DESIGN
//! ======
//! The scheduler owns its single interval handle. `start` always cancels the
//! previous handle first, so at most one timer is ever armed, and the view
//! check happens on every tick rather than once at start.

#[cfg(test)]
#[path = "auto_refresh_test.rs"]
mod auto_refresh_test;

use super::location::PageEnvironment;
use super::timers::IntervalTimer;

pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 30_000;

pub struct AutoRefresh<T: IntervalTimer, E> {
    timer: T,
    env: E,
    messages_path: String,
    handle: Option<T::Handle>,
}

impl<T, E> AutoRefresh<T, E>
where
    T: IntervalTimer,
    E: PageEnvironment + Clone + 'static,
{
    pub fn new(timer: T, env: E, messages_path: &str) -> Self {
        Self { timer, env, messages_path: messages_path.to_owned(), handle: None }
    }

    /// Whether the page currently shows the messages view.
    pub fn on_messages_view(&self) -> bool {
        self.env.pathname() == self.messages_path
    }

    /// Cancel any armed timer, then reload every `interval_ms` while the
    /// messages view is showing.
    pub fn start(&mut self, interval_ms: u32) {
        self.stop();
        let env = self.env.clone();
        let path = self.messages_path.clone();
        let tick = Box::new(move || {
            if env.pathname() == path {
                log::debug!("auto-refresh: reloading {path}");
                env.reload();
            }
        });
        self.handle = Some(self.timer.every(interval_ms, tick));
        log::debug!("auto-refresh armed every {interval_ms} ms");
    }

    /// Cancel the timer if armed. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
            log::debug!("auto-refresh stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}
