#![forbid(unsafe_code)]

//! Header look as a function of scroll position.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (exclusive) past which the header turns solid.
    pub threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { threshold: 100.0 }
    }
}

/// The two header looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderAppearance {
    /// Brand gradient at the top of the page.
    Gradient,
    /// Translucent green with blur once the page is scrolled.
    Solid,
}

impl HeaderAppearance {
    #[must_use]
    pub fn for_scroll(scroll_y: f64, config: &HeaderConfig) -> Self {
        if scroll_y > config.threshold {
            Self::Solid
        } else {
            Self::Gradient
        }
    }

    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Gradient => "linear-gradient(135deg, #519d3c 0%, #cd6d11 100%)",
            Self::Solid => "rgba(81, 157, 60, 0.95)",
        }
    }

    #[must_use]
    pub const fn backdrop_filter(self) -> &'static str {
        match self {
            Self::Gradient => "none",
            Self::Solid => "blur(10px)",
        }
    }

    #[must_use]
    pub const fn box_shadow(self) -> &'static str {
        match self {
            Self::Gradient => "0 2px 10px rgba(0,0,0,0.1)",
            Self::Solid => "0 2px 20px rgba(0,0,0,0.2)",
        }
    }
}

/// Tracks the applied look so the host only restyles on change.
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    config: HeaderConfig,
    applied: Option<HeaderAppearance>,
}

impl HeaderState {
    #[must_use]
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            applied: None,
        }
    }

    /// Returns the look to apply, or `None` when it is already applied.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<HeaderAppearance> {
        let next = HeaderAppearance::for_scroll(scroll_y, &self.config);
        if self.applied == Some(next) {
            None
        } else {
            self.applied = Some(next);
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let cfg = HeaderConfig::default();
        assert_eq!(HeaderAppearance::for_scroll(100.0, &cfg), HeaderAppearance::Gradient);
        assert_eq!(HeaderAppearance::for_scroll(100.5, &cfg), HeaderAppearance::Solid);
    }

    #[test]
    fn restyles_only_on_change() {
        let mut h = HeaderState::new(HeaderConfig::default());
        assert_eq!(h.on_scroll(0.0), Some(HeaderAppearance::Gradient));
        assert_eq!(h.on_scroll(50.0), None);
        assert_eq!(h.on_scroll(300.0), Some(HeaderAppearance::Solid));
        assert_eq!(h.on_scroll(400.0), None);
        assert_eq!(h.on_scroll(10.0), Some(HeaderAppearance::Gradient));
    }

    #[test]
    fn solid_look_values() {
        let solid = HeaderAppearance::Solid;
        assert_eq!(solid.background(), "rgba(81, 157, 60, 0.95)");
        assert_eq!(solid.backdrop_filter(), "blur(10px)");
        assert_eq!(solid.box_shadow(), "0 2px 20px rgba(0,0,0,0.2)");
    }
}
