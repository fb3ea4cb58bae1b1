#![forbid(unsafe_code)]

//! In-page anchor scrolling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Anchors whose clicks are intercepted.
    pub anchor_selector: String,
    /// Fixed header whose height is subtracted from the target position.
    pub header_selector: String,
    /// Extra space kept above the target.
    pub margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".into(),
            header_selector: ".header".into(),
            margin: 20.0,
        }
    }
}

/// Element id an in-page `href` points at: `"#contato"` gives `"contato"`,
/// ready for `getElementById`.
///
/// A bare `#` and anything not starting with `#` yield `None`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.chars().any(char::is_whitespace) => Some(id),
        _ => None,
    }
}

/// Document scroll position that puts the target just below the header.
#[must_use]
pub fn scroll_top(target_offset_top: f64, header_height: f64, margin: f64) -> f64 {
    (target_offset_top - header_height - margin).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#produtos"), Some("produtos"));
        assert_eq!(anchor_target(" #contato "), Some("contato"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#a b"), None);
        assert_eq!(anchor_target("/sobre"), None);
    }

    #[test]
    fn targets_resolve_as_element_ids() {
        // Ids as they appear in the markup; the lookup is an exact match.
        let ids = ["inicio", "produtos", "sobre", "contato"];
        for href in ["#inicio", "#produtos", " #sobre", "#contato "] {
            let id = anchor_target(href).unwrap();
            assert!(!id.starts_with('#'), "{href} resolved to {id}");
            assert!(ids.contains(&id), "{href} resolved to {id}");
        }
    }

    #[test]
    fn scroll_top_subtracts_header_and_margin() {
        assert_eq!(scroll_top(1_000.0, 80.0, 20.0), 900.0);
        assert_eq!(scroll_top(50.0, 80.0, 20.0), 0.0);
    }
}
