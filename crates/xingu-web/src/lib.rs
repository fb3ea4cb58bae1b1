#![forbid(unsafe_code)]

//! WASM frontend for the Xingu Argamassas landing page.
//!
//! The page behavior itself lives in `xingu-core`; this crate only reads the
//! DOM, forwards events and timestamps, and applies the results. From JS:
//!
//! ```js
//! import init, { XinguPage } from "./xingu_web.js";
//! await init();
//! document.addEventListener("DOMContentLoaded", () => new XinguPage().start());
//! ```

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::XinguPage;

pub use xingu_core::PageConfig;
#[cfg(not(target_arch = "wasm32"))]
use xingu_core::logging::targets;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct XinguPage {
    config: PageConfig,
}

#[cfg(not(target_arch = "wasm32"))]
impl XinguPage {
    /// Parse page options the same way the browser build does; invalid
    /// options fall back to defaults.
    pub fn new(options: Option<&str>) -> Self {
        let config = options
            .map(|json| match PageConfig::from_json(json) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(target: targets::CONFIG, %err, "using default page options");
                    PageConfig::new()
                }
            })
            .unwrap_or_default();
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Effective options as JSON, defaults included.
    pub fn config_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.config)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn stub_parses_options() {
        let page = XinguPage::new(Some(r#"{"header": {"threshold": 40.0}}"#));
        assert_eq!(page.config().header.threshold, 40.0);
    }

    #[test]
    fn stub_falls_back_on_bad_options() {
        let page = XinguPage::new(Some("not json"));
        assert_eq!(page.config(), &PageConfig::new());
    }

    #[test]
    fn stub_config_json_round_trips() {
        let page = XinguPage::new(Some(r#"{"contact": {"whatsapp_number": "5511999999999"}}"#));
        let json = page.config_json().unwrap();
        let again = PageConfig::from_json(&json).unwrap();
        assert_eq!(again.contact.whatsapp_number, "5511999999999");
    }
}
