#![forbid(unsafe_code)]

//! Host-driven monotonic time.
//!
//! Core state machines never read a clock themselves; every time-sensitive
//! call takes `now: Duration` measured from page start. Hosts that want to
//! step time explicitly (tests, replay) use [`DeterministicClock`].

use core::time::Duration;

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Set current monotonic time. Going backwards is ignored.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advance monotonic time by `dt` and return the new time.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        self.now = self.now.saturating_add(dt);
        self.now
    }

    /// Convenience for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&mut self, ms: u64) -> Duration {
        self.advance(Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_never_goes_back() {
        let mut c = DeterministicClock::new();
        assert_eq!(c.advance_ms(250), Duration::from_millis(250));
        c.set(Duration::from_millis(100));
        assert_eq!(c.now(), Duration::from_millis(250));
        c.set(Duration::from_secs(1));
        assert_eq!(c.now(), Duration::from_secs(1));
    }
}
