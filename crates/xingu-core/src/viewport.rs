#![forbid(unsafe_code)]

//! Breakpoint classification and the per-class view policy.

use serde::{Deserialize, Serialize};

/// Upper width bounds (inclusive, CSS pixels) of the narrow classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 480.0,
            tablet_max: 768.0,
        }
    }
}

impl Breakpoints {
    /// Swap the bounds if they were configured out of order.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.mobile_max <= self.tablet_max {
            self
        } else {
            Self {
                mobile_max: self.tablet_max,
                tablet_max: self.mobile_max,
            }
        }
    }
}

/// Breakpoint-derived bucket for the current window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    /// Classify a window width.
    ///
    /// Non-finite or negative widths classify as [`ViewportClass::Mobile`].
    #[must_use]
    pub fn from_width(width: f64, breakpoints: &Breakpoints) -> Self {
        if !width.is_finite() || width <= breakpoints.mobile_max {
            Self::Mobile
        } else if width <= breakpoints.tablet_max {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// How many slides are visible at once and the spacing between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub slides_to_show: usize,
    pub gap: f32,
}

impl ViewSpec {
    #[must_use]
    pub const fn new(slides_to_show: usize, gap: f32) -> Self {
        Self {
            slides_to_show,
            gap,
        }
    }

    /// At least one slide is always shown.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            slides_to_show: self.slides_to_show.max(1),
            gap: if self.gap.is_finite() {
                self.gap.max(0.0)
            } else {
                0.0
            },
        }
    }
}

/// Mapping from viewport class to [`ViewSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPolicy {
    Responsive {
        mobile: ViewSpec,
        tablet: ViewSpec,
        desktop: ViewSpec,
    },
    Fixed(ViewSpec),
}

impl Default for ViewPolicy {
    fn default() -> Self {
        Self::Responsive {
            mobile: ViewSpec::new(1, 16.0),
            tablet: ViewSpec::new(2, 24.0),
            desktop: ViewSpec::new(3, 32.0),
        }
    }
}

impl ViewPolicy {
    #[must_use]
    pub fn spec_for(&self, class: ViewportClass) -> ViewSpec {
        let spec = match *self {
            Self::Responsive {
                mobile,
                tablet,
                desktop,
            } => match class {
                ViewportClass::Mobile => mobile,
                ViewportClass::Tablet => tablet,
                ViewportClass::Desktop => desktop,
            },
            Self::Fixed(spec) => spec,
        };
        spec.sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_at_inclusive_bounds() {
        let bp = Breakpoints::default();
        assert_eq!(ViewportClass::from_width(320.0, &bp), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(480.0, &bp), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(481.0, &bp), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(768.0, &bp), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(769.0, &bp), ViewportClass::Desktop);
        assert_eq!(
            ViewportClass::from_width(f64::NAN, &bp),
            ViewportClass::Mobile
        );
    }

    #[test]
    fn default_policy_matches_classes() {
        let policy = ViewPolicy::default();
        assert_eq!(
            policy.spec_for(ViewportClass::Mobile),
            ViewSpec::new(1, 16.0)
        );
        assert_eq!(
            policy.spec_for(ViewportClass::Tablet),
            ViewSpec::new(2, 24.0)
        );
        assert_eq!(
            policy.spec_for(ViewportClass::Desktop),
            ViewSpec::new(3, 32.0)
        );
    }

    #[test]
    fn fixed_policy_never_shows_zero() {
        let policy = ViewPolicy::Fixed(ViewSpec::new(0, -4.0));
        assert_eq!(policy.spec_for(ViewportClass::Desktop), ViewSpec::new(1, 0.0));
    }

    #[test]
    fn swapped_breakpoints_are_normalized() {
        let bp = Breakpoints {
            mobile_max: 900.0,
            tablet_max: 500.0,
        }
        .normalized();
        assert_eq!(bp.mobile_max, 500.0);
        assert_eq!(bp.tablet_max, 900.0);
    }
}
