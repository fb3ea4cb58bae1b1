#![forbid(unsafe_code)]

//! Scroll-triggered reveal bookkeeping.
//!
//! The host observes elements with an intersection observer configured from
//! [`RevealConfig`] and forwards every entry to a [`RevealTracker`], which
//! decides what to do with it. Elements are keyed by a host-assigned id.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Intersection settings and the elements that animate in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS margin applied to the viewport box.
    pub root_margin: String,
    /// Selectors of elements that fade in.
    pub selectors: Vec<String>,
    /// Class added on reveal.
    pub class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            selectors: [
                "section",
                ".stat-item",
                ".product-card",
                ".advantage-item",
                ".testimonial",
                ".pillar",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            class: "fade-in-up".into(),
        }
    }
}

impl RevealConfig {
    /// All selectors joined into one selector list.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }

    /// Threshold clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Decision for one intersection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the reveal class.
    Reveal,
    /// Already revealed, or not intersecting.
    None,
}

/// Remembers which elements were revealed so each animates in once.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_intersection(&mut self, id: u32, is_intersecting: bool) -> RevealAction {
        if is_intersecting && self.revealed.insert(id) {
            RevealAction::Reveal
        } else {
            RevealAction::None
        }
    }

    #[must_use]
    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once() {
        let mut t = RevealTracker::new();
        assert_eq!(t.on_intersection(1, false), RevealAction::None);
        assert_eq!(t.on_intersection(1, true), RevealAction::Reveal);
        assert_eq!(t.on_intersection(1, true), RevealAction::None);
        assert_eq!(t.on_intersection(2, true), RevealAction::Reveal);
        assert!(t.is_revealed(1));
        assert_eq!(t.revealed_count(), 2);
    }

    #[test]
    fn default_selector_list() {
        let cfg = RevealConfig::default();
        assert_eq!(
            cfg.selector_list(),
            "section, .stat-item, .product-card, .advantage-item, .testimonial, .pillar"
        );
        assert_eq!(cfg.clamped_threshold(), 0.1);
    }

    #[test]
    fn threshold_is_clamped() {
        let cfg = RevealConfig {
            threshold: 4.0,
            ..RevealConfig::default()
        };
        assert_eq!(cfg.clamped_threshold(), 1.0);
    }
}
