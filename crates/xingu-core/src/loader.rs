#![forbid(unsafe_code)]

//! Page loader timeline.
//!
//! The loader stays up for `hide_after`, then gets its `hidden` class (a CSS
//! fade), and `remove_after` later it is taken out of layout entirely.

use core::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub element_id: String,
    pub hidden_class: String,
    pub hide_after_ms: u64,
    pub remove_after_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            element_id: "loader".into(),
            hidden_class: "hidden".into(),
            hide_after_ms: 2_000,
            remove_after_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoaderPhase {
    Visible,
    Hidden,
    Removed,
}

/// Phase boundaries measured from mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderTimeline {
    hide_at: Duration,
    remove_at: Duration,
}

impl LoaderTimeline {
    #[must_use]
    pub fn new(config: &LoaderConfig, mounted_at: Duration) -> Self {
        let hide_at = mounted_at.saturating_add(Duration::from_millis(config.hide_after_ms));
        Self {
            hide_at,
            remove_at: hide_at.saturating_add(Duration::from_millis(config.remove_after_ms)),
        }
    }

    #[must_use]
    pub fn phase_at(&self, now: Duration) -> LoaderPhase {
        if now >= self.remove_at {
            LoaderPhase::Removed
        } else if now >= self.hide_at {
            LoaderPhase::Hidden
        } else {
            LoaderPhase::Visible
        }
    }

    /// When the phase after the one at `now` begins.
    #[must_use]
    pub fn next_change(&self, now: Duration) -> Option<Duration> {
        match self.phase_at(now) {
            LoaderPhase::Visible => Some(self.hide_at),
            LoaderPhase::Hidden => Some(self.remove_at),
            LoaderPhase::Removed => None,
        }
    }
}
