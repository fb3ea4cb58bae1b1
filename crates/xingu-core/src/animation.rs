#![forbid(unsafe_code)]

//! Time-based animations.
//!
//! Animations advance by explicit `tick(dt)` calls and report a normalized
//! progress in `[0.0, 1.0]`. The only animation the page needs in Rust is the
//! statistics counter; CSS handles everything else.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// CountUp
// ---------------------------------------------------------------------------

/// Counts from zero up to `target` in fixed frames.
///
/// Each whole frame adds `target / (duration / frame)`; the displayed number
/// is the floor of the running total, capped at `target`. Partial frames
/// carry over, so the result does not depend on how the host slices `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    frame: Duration,
    total_frames: u32,
    increment: f64,
    elapsed: Duration,
}

impl CountUp {
    /// Default run time of a counter.
    pub const DURATION: Duration = Duration::from_millis(2_000);
    /// Default frame length (one update per ~60 Hz frame).
    pub const FRAME: Duration = Duration::from_millis(16);

    #[must_use]
    pub fn new(target: u64) -> Self {
        Self::with_timing(target, Self::DURATION, Self::FRAME)
    }

    /// Custom run time and frame length. A zero frame is treated as 1 ms.
    #[must_use]
    pub fn with_timing(target: u64, duration: Duration, frame: Duration) -> Self {
        let frame = frame.max(Duration::from_millis(1));
        let frames = (duration.as_secs_f64() / frame.as_secs_f64()).ceil().max(1.0);
        Self {
            target,
            frame,
            total_frames: frames.min(f64::from(u32::MAX)) as u32,
            increment: target as f64 / frames,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub const fn frame(&self) -> Duration {
        self.frame
    }

    fn frames_elapsed(&self) -> u32 {
        let n = self.elapsed.as_nanos() / self.frame.as_nanos().max(1);
        n.min(u128::from(self.total_frames)) as u32
    }

    /// Number to show right now.
    #[must_use]
    pub fn display(&self) -> u64 {
        let frames = self.frames_elapsed();
        if frames >= self.total_frames {
            return self.target;
        }
        let current = (f64::from(frames) * self.increment).floor();
        (current as u64).min(self.target)
    }
}

impl Animation for CountUp {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.frames_elapsed() >= self.total_frames
    }

    fn value(&self) -> f32 {
        (self.frames_elapsed() as f32 / self.total_frames as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Parse a `data-target` attribute the way the page always has: optional
/// leading whitespace and `+`, then the longest run of ASCII digits.
///
/// Returns `None` when there are no digits or the number is negative.
#[must_use]
pub fn parse_target(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }
    // Overlong digit runs saturate rather than fail.
    Some(digits.parse().unwrap_or(u64::MAX))
}
