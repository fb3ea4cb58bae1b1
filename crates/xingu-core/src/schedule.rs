#![forbid(unsafe_code)]

//! Timer primitives driven by host timestamps.
//!
//! The browser offers `setInterval`/`setTimeout` handles; here the same
//! behavior is modeled as plain state so it can be reasoned about and tested:
//!
//! - [`RecurringTask`]: a repeating deadline with explicit
//!   start / stop / restart, plus suspension by one or more reasons.
//! - [`Debouncer`]: a single deadline pushed back by every trigger.
//!
//! Neither type fires on its own. The host asks for the next deadline,
//! sleeps until then, and calls `poll(now)`.
//!
//! # Invariants
//!
//! 1. A suspended task has no deadline; it cannot fire.
//! 2. Resuming the last suspension reason schedules a full interval ahead,
//!    never an immediate fire.
//! 3. At most one deadline is pending per task (cancel-and-restart).

use core::time::Duration;

use bitflags::bitflags;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

bitflags! {
    /// Reasons a recurring task is held back.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SuspendReason: u8 {
        /// Pointer is over the widget.
        const HOVER = 0b0001;
        /// A touch or mouse drag is in progress.
        const DRAG  = 0b0010;
    }
}

// ---------------------------------------------------------------------------
// RecurringTask
// ---------------------------------------------------------------------------

/// A repeating deadline, the model of an autoplay interval.
#[derive(Debug, Clone)]
pub struct RecurringTask {
    interval: Duration,
    running: bool,
    suspended: SuspendReason,
    next_due: Option<Duration>,
}

impl RecurringTask {
    /// Create a stopped task.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            running: false,
            suspended: SuspendReason::empty(),
            next_due: None,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the task was started and has not been stopped.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Running and not held back by any suspension reason.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.running && self.suspended.is_empty()
    }

    #[must_use]
    pub const fn suspended(&self) -> SuspendReason {
        self.suspended
    }

    /// Pending deadline, if any.
    #[must_use]
    pub const fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Start the task. The first fire is one interval after `now`.
    pub fn start(&mut self, now: Duration) {
        self.running = true;
        if self.suspended.is_empty() {
            self.next_due = Some(now.saturating_add(self.interval));
        }
    }

    /// Stop the task and drop any pending deadline.
    pub fn stop(&mut self) {
        self.running = false;
        self.next_due = None;
    }

    /// Cancel the pending deadline and start over from `now`.
    pub fn restart(&mut self, now: Duration) {
        self.stop();
        self.start(now);
    }

    /// Hold the task back for `reason`. Cancels the pending deadline.
    pub fn suspend(&mut self, reason: SuspendReason) {
        self.suspended.insert(reason);
        self.next_due = None;
    }

    /// Release `reason`. When nothing else holds the task it restarts from `now`.
    pub fn resume(&mut self, reason: SuspendReason, now: Duration) {
        if !self.suspended.intersects(reason) {
            return;
        }
        self.suspended.remove(reason);
        if self.is_active() {
            self.next_due = Some(now.saturating_add(self.interval));
        }
    }

    /// Returns `true` once per elapsed deadline and schedules the next one.
    ///
    /// If the host slept through several intervals (a throttled background
    /// tab), the task fires once and realigns to `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due.saturating_add(self.interval);
                self.next_due = Some(if next > now {
                    next
                } else {
                    now.saturating_add(self.interval)
                });
                true
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

/// Fires once after `quiet` has elapsed with no further triggers.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Push the deadline to `now + quiet`.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.quiet));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn stopped_task_never_fires() {
        let mut task = RecurringTask::new(ms(100));
        assert!(!task.poll(ms(1_000)));
        assert_eq!(task.next_due(), None);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut task = RecurringTask::new(ms(100));
        task.start(ms(0));
        assert!(!task.poll(ms(99)));
        assert!(task.poll(ms(100)));
        assert!(!task.poll(ms(150)));
        assert!(task.poll(ms(200)));
        assert_eq!(task.next_due(), Some(ms(300)));
    }

    #[test]
    fn late_poll_realigns_instead_of_bursting() {
        let mut task = RecurringTask::new(ms(100));
        task.start(ms(0));
        assert!(task.poll(ms(1_050)));
        assert!(!task.poll(ms(1_060)));
        assert_eq!(task.next_due(), Some(ms(1_150)));
    }

    #[test]
    fn suspension_cancels_and_resume_restarts() {
        let mut task = RecurringTask::new(ms(100));
        task.start(ms(0));
        task.suspend(SuspendReason::HOVER);
        assert!(!task.poll(ms(500)));
        assert!(!task.is_active());

        task.resume(SuspendReason::HOVER, ms(500));
        assert!(task.is_active());
        assert!(!task.poll(ms(599)));
        assert!(task.poll(ms(600)));
    }

    #[test]
    fn every_reason_must_be_released() {
        let mut task = RecurringTask::new(ms(100));
        task.start(ms(0));
        task.suspend(SuspendReason::HOVER);
        task.suspend(SuspendReason::DRAG);
        task.resume(SuspendReason::DRAG, ms(10));
        assert_eq!(task.next_due(), None);
        task.resume(SuspendReason::HOVER, ms(20));
        assert_eq!(task.next_due(), Some(ms(120)));
    }

    #[test]
    fn resume_without_suspension_keeps_schedule() {
        let mut task = RecurringTask::new(ms(100));
        task.start(ms(0));
        task.resume(SuspendReason::HOVER, ms(50));
        assert_eq!(task.next_due(), Some(ms(100)));
    }

    #[test]
    fn restart_replaces_pending_deadline() {
        let mut task = RecurringTask::new(ms(100));
        task.start(ms(0));
        task.restart(ms(70));
        assert!(!task.poll(ms(100)));
        assert!(task.poll(ms(170)));
    }

    #[test]
    fn stopped_task_stays_stopped_after_resume() {
        let mut task = RecurringTask::new(ms(100));
        task.suspend(SuspendReason::DRAG);
        task.resume(SuspendReason::DRAG, ms(0));
        assert_eq!(task.next_due(), None);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let task = RecurringTask::new(Duration::ZERO);
        assert_eq!(task.interval(), ms(1));
    }

    #[test]
    fn debouncer_waits_for_quiet() {
        let mut d = Debouncer::new(ms(250));
        d.trigger(ms(0));
        d.trigger(ms(200));
        assert!(!d.poll(ms(250)));
        assert!(d.poll(ms(450)));
        assert!(!d.poll(ms(900)));
        assert!(!d.is_pending());
    }

    #[test]
    fn debouncer_cancel() {
        let mut d = Debouncer::new(ms(250));
        d.trigger(ms(0));
        d.cancel();
        assert!(!d.poll(ms(1_000)));
    }
}
