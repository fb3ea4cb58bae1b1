#![forbid(unsafe_code)]

//! Horizontal swipe / drag recognition.

/// What a finished gesture asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Pointer travelled toward decreasing x.
    Next,
    /// Pointer travelled toward increasing x.
    Prev,
    /// Displacement stayed within the threshold.
    None,
}

/// Tracks one touch or mouse drag from press to release.
///
/// Only the start and the latest x coordinate matter; vertical motion is
/// ignored. A gesture navigates when `|start - end|` is strictly greater
/// than the threshold.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
    last_x: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: if threshold.is_finite() {
                threshold.abs()
            } else {
                0.0
            },
            start_x: None,
            last_x: 0.0,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Press: remember the start coordinate. A second press restarts.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = x;
    }

    /// Movement while pressed. Ignored when no gesture is active.
    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = x;
        }
    }

    /// Release at `x` (or at the last seen position when `None`).
    pub fn finish(&mut self, x: Option<f32>) -> SwipeOutcome {
        let Some(start) = self.start_x.take() else {
            return SwipeOutcome::None;
        };
        let end = x.unwrap_or(self.last_x);
        let dx = start - end;
        if !dx.is_finite() || dx.abs() <= self.threshold {
            SwipeOutcome::None
        } else if dx > 0.0 {
            SwipeOutcome::Next
        } else {
            SwipeOutcome::Prev
        }
    }

    /// Abandon the gesture without navigating.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_ignored() {
        let mut s = SwipeTracker::new(50.0);
        s.begin(200.0);
        assert_eq!(s.finish(Some(160.0)), SwipeOutcome::None);
        s.begin(200.0);
        assert_eq!(s.finish(Some(250.0)), SwipeOutcome::None);
    }

    #[test]
    fn leftward_swipe_is_next() {
        let mut s = SwipeTracker::new(50.0);
        s.begin(200.0);
        s.update(170.0);
        assert_eq!(s.finish(Some(140.0)), SwipeOutcome::Next);
        assert!(!s.is_active());
    }

    #[test]
    fn rightward_swipe_is_prev() {
        let mut s = SwipeTracker::new(50.0);
        s.begin(100.0);
        assert_eq!(s.finish(Some(160.0)), SwipeOutcome::Prev);
    }

    #[test]
    fn release_without_coordinate_uses_last_move() {
        let mut s = SwipeTracker::new(50.0);
        s.begin(300.0);
        s.update(200.0);
        assert_eq!(s.finish(None), SwipeOutcome::Next);
    }

    #[test]
    fn finish_without_begin_does_nothing() {
        let mut s = SwipeTracker::new(50.0);
        s.update(10.0);
        assert_eq!(s.finish(Some(500.0)), SwipeOutcome::None);
    }

    #[test]
    fn cancel_drops_gesture() {
        let mut s = SwipeTracker::new(50.0);
        s.begin(300.0);
        s.cancel();
        assert_eq!(s.finish(Some(0.0)), SwipeOutcome::None);
    }
}
