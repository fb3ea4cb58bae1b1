//! Re-armable browser timers.
//!
//! Each timer owns one JS callback for its whole life and only swaps the
//! handle when re-armed, so a callback may safely re-arm or stop its own
//! timer.

use core::cell::Cell;
use core::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;
use web_time::Instant;
use xingu_core::logging::targets;

/// Monotonic page clock; `now()` is the time since mount.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HostClock {
    epoch: Instant,
}

impl HostClock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

fn millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}

/// One-shot timeout: `arm` cancels any pending fire and schedules a new one.
pub(crate) struct Timer {
    window: Window,
    callback: Closure<dyn FnMut()>,
    handle: Cell<Option<i32>>,
}

impl Timer {
    pub fn new(window: &Window, callback: impl FnMut() + 'static) -> Self {
        Self {
            window: window.clone(),
            callback: Closure::<dyn FnMut()>::new(callback),
            handle: Cell::new(None),
        }
    }

    pub fn arm(&self, delay: Duration) {
        self.cancel();
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                millis(delay),
            );
        match handle {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(_) => tracing::warn!(target: targets::PAGE, "setTimeout failed"),
        }
    }

    /// Arm for an absolute deadline on `clock`, or cancel when there is none.
    pub fn arm_at(&self, deadline: Option<Duration>, clock: &HostClock) {
        match deadline {
            Some(at) => self.arm(at.saturating_sub(clock.now())),
            None => self.cancel(),
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Repeating interval with explicit start / stop.
pub(crate) struct Interval {
    window: Window,
    callback: Closure<dyn FnMut()>,
    handle: Cell<Option<i32>>,
}

impl Interval {
    pub fn new(window: &Window, callback: impl FnMut() + 'static) -> Self {
        Self {
            window: window.clone(),
            callback: Closure::<dyn FnMut()>::new(callback),
            handle: Cell::new(None),
        }
    }

    pub fn start(&self, period: Duration) {
        self.stop();
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                millis(period).max(1),
            );
        match handle {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(_) => tracing::warn!(target: targets::PAGE, "setInterval failed"),
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}
