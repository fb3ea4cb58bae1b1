#![forbid(unsafe_code)]

mod carousel;
mod dom;
mod effects;
mod form;
mod timer;

use wasm_bindgen::prelude::*;
use xingu_core::header::HeaderState;
use xingu_core::logging::targets;
use xingu_core::{InitError, PageConfig};

use self::carousel::CarouselMount;
use self::dom::{Dom, report};
use self::effects::{CounterMount, LoaderMount, RevealMount, StyleMount, Wiring};
use self::form::ContactMount;
use self::timer::HostClock;

const BANNER: &str = "🏗️ Xingu Argamassas - Landing Page carregada!";

/// Everything mounted by [`XinguPage::start`]. Dropping it removes every
/// listener, cancels every timer and disconnects the observers.
struct PageRuntime {
    loader: Option<LoaderMount>,
    scroll: Option<Wiring>,
    contact: Option<ContactMount>,
    reveal: Option<RevealMount>,
    header: Option<Wiring>,
    products: Option<CarouselMount>,
    testimonials: Option<CarouselMount>,
    menu: Option<Wiring>,
    counters: Option<CounterMount>,
    styles: Option<StyleMount>,
}

impl PageRuntime {
    fn mounted(&self) -> usize {
        [
            self.loader.is_some(),
            self.scroll.is_some(),
            self.contact.is_some(),
            self.reveal.is_some(),
            self.header.is_some(),
            self.products.is_some(),
            self.testimonials.is_some(),
            self.menu.is_some(),
            self.counters.is_some(),
            self.styles.is_some(),
        ]
        .into_iter()
        .filter(|mounted| *mounted)
        .count()
    }
}

/// Keep a mounted feature, or report why it was skipped.
fn keep<T>(feature: &str, result: Result<T, InitError>) -> Option<T> {
    result.map_err(|err| report(feature, &err)).ok()
}

/// Landing page behaviors, exported to JS.
#[wasm_bindgen]
pub struct XinguPage {
    config: PageConfig,
    runtime: Option<PageRuntime>,
}

#[wasm_bindgen]
impl XinguPage {
    /// Create the page controller. `options` is a plain object whose fields
    /// override the defaults; anything unreadable falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Self {
        let config = options
            .filter(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| js_sys::JSON::stringify(&value).ok())
            .and_then(|json| json.as_string())
            .map(|json| match PageConfig::from_json(&json) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(target: targets::CONFIG, %err, "using default page options");
                    web_sys::console::warn_1(&JsValue::from_str(&format!("xingu: {err}")));
                    PageConfig::new()
                }
            })
            .unwrap_or_default();
        Self {
            config,
            runtime: None,
        }
    }

    /// Mount every feature present in the document. Features are independent:
    /// one that cannot be mounted is reported on the console and skipped.
    /// Calling `start` again remounts from scratch.
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.destroy();
        let dom = Dom::current()?;
        let clock = HostClock::start();
        let config = &self.config;

        let runtime = PageRuntime {
            loader: keep("loader", effects::mount_loader(&dom, &config.loader, clock)),
            scroll: Some(effects::mount_smooth_scroll(&dom, &config.scroll)),
            contact: keep("contact form", form::mount(&dom, &config.contact)),
            reveal: keep("scroll animations", effects::mount_reveal(&dom, &config.reveal)),
            header: keep(
                "header",
                effects::mount_header(&dom, &config.scroll, HeaderState::new(config.header)),
            ),
            products: keep(
                "products carousel",
                carousel::mount("products", &dom, &config.products, clock),
            ),
            testimonials: keep(
                "testimonials carousel",
                carousel::mount("testimonials", &dom, &config.testimonials, clock),
            ),
            menu: keep("mobile menu", effects::mount_menu(&dom, &config.menu)),
            counters: keep("counters", effects::mount_counters(&dom, &config.counter)),
            styles: keep("styles", effects::mount_styles(&dom)),
        };

        tracing::info!(target: targets::PAGE, features = runtime.mounted(), "page started");
        web_sys::console::log_1(&JsValue::from_str(BANNER));
        self.runtime = Some(runtime);
        Ok(())
    }

    /// Whether `start` has run and `destroy` has not.
    #[wasm_bindgen(getter)]
    pub fn started(&self) -> bool {
        self.runtime.is_some()
    }

    /// Effective options as JSON, defaults included.
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Remove every listener, timer and injected element.
    pub fn destroy(&mut self) {
        if self.runtime.take().is_some() {
            tracing::info!(target: targets::PAGE, "page destroyed");
        }
    }
}
