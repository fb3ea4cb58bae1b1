#![forbid(unsafe_code)]

//! Page configuration.
//!
//! Every field has a default matching the shipped landing page, so an empty
//! JSON object (or no options at all) yields a working page. Durations are
//! millisecond integers to keep the JSON readable.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::CountUp;
use crate::carousel::CarouselConfig;
use crate::contact::ContactConfig;
use crate::error::ConfigError;
use crate::header::HeaderConfig;
use crate::loader::LoaderConfig;
use crate::logging::targets;
use crate::menu::MenuConfig;
use crate::reveal::RevealConfig;
use crate::scroll::ScrollConfig;

/// Statistics counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Counter elements, without the attribute filter.
    pub selector: String,
    /// Attribute holding the target number; only elements carrying it count.
    pub attribute: String,
    pub duration_ms: u64,
    pub frame_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number".into(),
            attribute: "data-target".into(),
            duration_ms: 2_000,
            frame_ms: 16,
        }
    }
}

impl CounterConfig {
    /// Selector matching counters that carry the target attribute.
    #[must_use]
    pub fn query_selector(&self) -> String {
        format!("{}[{}]", self.selector, self.attribute)
    }

    /// Counter animation for `target` with these timings.
    #[must_use]
    pub fn count_up(&self, target: u64) -> CountUp {
        CountUp::with_timing(
            target,
            Duration::from_millis(self.duration_ms),
            Duration::from_millis(self.frame_ms),
        )
    }
}

/// Options for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub loader: LoaderConfig,
    pub scroll: ScrollConfig,
    pub header: HeaderConfig,
    pub menu: MenuConfig,
    pub contact: ContactConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub products: CarouselConfig,
    pub testimonials: CarouselConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            scroll: ScrollConfig::default(),
            header: HeaderConfig::default(),
            menu: MenuConfig::default(),
            contact: ContactConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            products: CarouselConfig::products(),
            testimonials: CarouselConfig::testimonials(),
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; absent fields keep their defaults.
    ///
    /// The options are merged over [`PageConfig::new`], so a partial
    /// `testimonials` object keeps the testimonial defaults for everything it
    /// does not mention.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::new())?;
        merge_json(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        crate::debug!(target: targets::CONFIG, "page options parsed");
        Ok(config.validated())
    }

    /// Normalize values that would otherwise stall or divide by zero.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.counter.frame_ms = self.counter.frame_ms.max(1);
        for carousel in [&mut self.products, &mut self.testimonials] {
            carousel.breakpoints = carousel.breakpoints.normalized();
            carousel.autoplay_interval_ms = carousel.autoplay_interval_ms.max(1);
            if !carousel.swipe_threshold.is_finite() {
                carousel.swipe_threshold = 50.0;
            }
        }
        self
    }
}

/// Recursively overlay `overrides` onto `base`.
///
/// Objects merge key by key. A single-key object replaced by a different
/// single-key object is an enum switching variant and is replaced whole.
fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    use serde_json::Value;

    match (base, overrides) {
        (Value::Object(base_map), Value::Object(over_map)) => {
            let switches_variant = base_map.len() == 1
                && over_map.len() == 1
                && over_map.keys().all(|k| !base_map.contains_key(k));
            if switches_variant {
                *base_map = over_map;
                return;
            }
            for (key, value) in over_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
