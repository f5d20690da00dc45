//! Timer seams over `gloo-timers`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Schedulers take these traits instead of calling `gloo-timers` directly so
//! tests can drive ticks by hand.

/// Repeating timer whose handle is cancelled explicitly.
pub trait IntervalTimer {
    type Handle;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Fire-and-forget delayed callback.
pub trait OneShotTimer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Browser event-loop timers.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

#[cfg(feature = "hydrate")]
impl IntervalTimer for BrowserTimers {
    type Handle = gloo_timers::callback::Interval;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle {
        gloo_timers::callback::Interval::new(interval_ms, tick)
    }

    fn cancel(&self, handle: Self::Handle) {
        let _ = handle.cancel();
    }
}

#[cfg(feature = "hydrate")]
impl OneShotTimer for BrowserTimers {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}
