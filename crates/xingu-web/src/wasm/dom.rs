//! Thin helpers over `web-sys` for lookups, listeners and diagnostics.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};
use xingu_core::InitError;
use xingu_core::logging::targets;

/// Window and document of the page being mounted.
#[derive(Debug, Clone)]
pub(crate) struct Dom {
    pub window: Window,
    pub document: Document,
}

impl Dom {
    pub fn current() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { window, document })
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// First match of `selector` inside `scope`, or in the document.
    pub fn query(&self, scope: Option<&Element>, selector: &str) -> Option<Element> {
        let found = match scope {
            Some(el) => el.query_selector(selector),
            None => self.document.query_selector(selector),
        };
        found.ok().flatten()
    }

    /// All matches of `selector`; an invalid selector matches nothing.
    pub fn query_all(&self, scope: Option<&Element>, selector: &str) -> Vec<Element> {
        let list = match scope {
            Some(el) => el.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn require(&self, scope: Option<&Element>, selector: &str) -> Result<Element, InitError> {
        self.query(scope, selector)
            .ok_or_else(|| InitError::missing(selector))
    }

    pub fn require_id(&self, id: &str) -> Result<Element, InitError> {
        self.by_id(id).ok_or_else(|| InitError::missing(format!("#{id}")))
    }

    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

pub(crate) fn as_html(el: &Element) -> Option<HtmlElement> {
    el.dyn_ref::<HtmlElement>().cloned()
}

/// Set an inline style property, ignoring failures.
pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// An event listener removed from its target on drop.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Attach `handler` and push the listener into `into`; failures are reported
/// and the listener is skipped.
pub(crate) fn listen(
    into: &mut Vec<Listener>,
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    match Listener::new(target, event, handler) {
        Ok(listener) => into.push(listener),
        Err(err) => {
            tracing::warn!(target: targets::PAGE, event_name = event, "failed to attach listener");
            web_sys::console::warn_2(&JsValue::from_str("xingu: failed to attach listener"), &err);
        }
    }
}

/// Diagnostic channel for features that could not be mounted.
pub(crate) fn report(feature: &str, err: &InitError) {
    tracing::warn!(target: targets::PAGE, feature, %err, "feature not mounted");
    web_sys::console::warn_1(&JsValue::from_str(&format!("xingu: {feature} disabled: {err}")));
}
