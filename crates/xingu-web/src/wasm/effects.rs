//! Page-wide effects: loader, smooth scrolling, header, mobile menu, reveal
//! animations, statistic counters and the injected stylesheet.
//!
//! Each `mount_*` function owns its listeners and timers through the
//! returned handle; dropping the handle undoes the wiring.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};
use xingu_core::InitError;
use xingu_core::animation::{Animation, CountUp, parse_target};
use xingu_core::config::CounterConfig;
use xingu_core::header::HeaderState;
use xingu_core::loader::{LoaderConfig, LoaderPhase, LoaderTimeline};
use xingu_core::logging::targets;
use xingu_core::menu::{MenuConfig, MobileMenu};
use xingu_core::reveal::{RevealAction, RevealConfig, RevealTracker};
use xingu_core::scroll::{ScrollConfig, anchor_target, scroll_top};
use xingu_core::styles::DYNAMIC_STYLES;

use super::dom::{Dom, Listener, as_html, listen, set_class, set_style};
use super::timer::{HostClock, Interval, Timer};

/// Listeners with no further state.
pub(crate) struct Wiring {
    _listeners: Vec<Listener>,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

pub(crate) struct LoaderMount {
    _shared: Rc<LoaderShared>,
}

struct LoaderShared {
    el: HtmlElement,
    hidden_class: String,
    timeline: LoaderTimeline,
    clock: HostClock,
    timer: Timer,
}

pub(crate) fn mount_loader(
    dom: &Dom,
    config: &LoaderConfig,
    clock: HostClock,
) -> Result<LoaderMount, InitError> {
    let el = as_html(&dom.require_id(&config.element_id)?)
        .ok_or_else(|| InitError::missing(format!("#{}", config.element_id)))?;
    let timeline = LoaderTimeline::new(config, clock.now());
    let shared = Rc::new_cyclic(|weak: &Weak<LoaderShared>| {
        let weak = weak.clone();
        LoaderShared {
            el,
            hidden_class: config.hidden_class.clone(),
            timeline,
            clock,
            timer: Timer::new(&dom.window, move || {
                if let Some(shared) = weak.upgrade() {
                    shared.step();
                }
            }),
        }
    });
    shared.step();
    Ok(LoaderMount { _shared: shared })
}

impl LoaderShared {
    fn step(&self) {
        let now = self.clock.now();
        match self.timeline.phase_at(now) {
            LoaderPhase::Visible => {}
            LoaderPhase::Hidden => set_class(&self.el, &self.hidden_class, true),
            LoaderPhase::Removed => {
                set_class(&self.el, &self.hidden_class, true);
                set_style(&self.el, "display", "none");
            }
        }
        self.timer.arm_at(self.timeline.next_change(now), &self.clock);
    }
}

// ---------------------------------------------------------------------------
// Smooth scrolling
// ---------------------------------------------------------------------------

pub(crate) fn mount_smooth_scroll(dom: &Dom, config: &ScrollConfig) -> Wiring {
    let mut listeners = Vec::new();
    for anchor in dom.query_all(None, &config.anchor_selector) {
        let dom = dom.clone();
        let config = config.clone();
        let link = anchor.clone();
        listen(&mut listeners, &anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|id| dom.by_id(id)) else {
                return;
            };
            let offset = as_html(&target).map_or(0.0, |el| f64::from(el.offset_top()));
            let header = dom
                .query(None, &config.header_selector)
                .and_then(|el| as_html(&el))
                .map_or(0.0, |el| f64::from(el.offset_height()));

            let options = ScrollToOptions::new();
            options.set_top(scroll_top(offset, header, config.margin));
            options.set_behavior(ScrollBehavior::Smooth);
            dom.window.scroll_to_with_scroll_to_options(&options);
        });
    }
    Wiring {
        _listeners: listeners,
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub(crate) fn mount_header(
    dom: &Dom,
    scroll: &ScrollConfig,
    mut state: HeaderState,
) -> Result<Wiring, InitError> {
    let header = dom
        .query(None, &scroll.header_selector)
        .and_then(|el| as_html(&el))
        .ok_or_else(|| InitError::missing(scroll.header_selector.as_str()))?;
    let mut listeners = Vec::new();
    let page = dom.clone();
    listen(&mut listeners, &dom.window, "scroll", move |_| {
        if let Some(look) = state.on_scroll(page.scroll_y()) {
            set_style(&header, "background", look.background());
            set_style(&header, "backdrop-filter", look.backdrop_filter());
            set_style(&header, "box-shadow", look.box_shadow());
        }
    });
    Ok(Wiring {
        _listeners: listeners,
    })
}

// ---------------------------------------------------------------------------
// Mobile menu
// ---------------------------------------------------------------------------

pub(crate) fn mount_menu(dom: &Dom, config: &MenuConfig) -> Result<Wiring, InitError> {
    let toggle = dom.require_id(&config.toggle_id)?;
    let menu = dom.require_id(&config.menu_id)?;
    let class = config.active_class.clone();
    let mut state = MobileMenu::default();
    let mut listeners = Vec::new();
    let button = toggle.clone();
    listen(&mut listeners, &toggle, "click", move |_| {
        let open = state.toggle();
        set_class(&menu, &class, open);
        set_class(&button, &class, open);
    });
    Ok(Wiring {
        _listeners: listeners,
    })
}

// ---------------------------------------------------------------------------
// Intersection observers
// ---------------------------------------------------------------------------

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` disconnected on drop.
struct Observer {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl Observer {
    fn new(
        init: Option<&IntersectionObserverInit>,
        mut on_entry: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, InitError> {
        let callback: EntryCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(entry, &observer);
                    }
                }
            });
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(function, init),
            None => IntersectionObserver::new(function),
        }
        .map_err(|_| InitError::unsupported("IntersectionObserver"))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) struct RevealMount {
    _observer: Observer,
}

pub(crate) fn mount_reveal(dom: &Dom, config: &RevealConfig) -> Result<RevealMount, InitError> {
    let selector = config.selector_list();
    let elements = dom.query_all(None, &selector);
    if elements.is_empty() {
        return Err(InitError::empty(selector));
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.clamped_threshold()));
    init.set_root_margin(&config.root_margin);

    let class = config.class.clone();
    let known = elements.clone();
    let mut tracker = RevealTracker::new();
    let observer = Observer::new(Some(&init), move |entry, observer| {
        let target = entry.target();
        let Some(id) = known.iter().position(|el| *el == target) else {
            return;
        };
        let id = u32::try_from(id).unwrap_or(u32::MAX);
        if tracker.on_intersection(id, entry.is_intersecting()) == RevealAction::Reveal {
            set_class(&target, &class, true);
            observer.unobserve(&target);
        }
    })?;
    for el in &elements {
        observer.observe(el);
    }
    tracing::debug!(target: targets::PAGE, elements = elements.len(), "reveal observing");
    Ok(RevealMount {
        _observer: observer,
    })
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// One running count-up.
struct CounterRun {
    el: Element,
    anim: Cell<CountUp>,
    interval: Interval,
}

impl CounterRun {
    fn start(window: &web_sys::Window, el: Element, anim: CountUp) -> Rc<Self> {
        let run = Rc::new_cyclic(|weak: &Weak<CounterRun>| {
            let weak = weak.clone();
            CounterRun {
                el,
                anim: Cell::new(anim),
                interval: Interval::new(window, move || {
                    if let Some(run) = weak.upgrade() {
                        run.step();
                    }
                }),
            }
        });
        run.interval.start(anim.frame());
        run
    }

    fn step(&self) {
        let mut anim = self.anim.get();
        anim.tick(anim.frame());
        self.anim.set(anim);
        self.el.set_text_content(Some(anim.display().to_string().as_str()));
        if anim.is_complete() {
            self.interval.stop();
        }
    }
}

pub(crate) struct CounterMount {
    _observer: Observer,
    _runs: Rc<RefCell<Vec<Rc<CounterRun>>>>,
}

pub(crate) fn mount_counters(dom: &Dom, config: &CounterConfig) -> Result<CounterMount, InitError> {
    let selector = config.query_selector();
    let counters = dom.query_all(None, &selector);
    if counters.is_empty() {
        return Err(InitError::empty(selector));
    }

    let runs: Rc<RefCell<Vec<Rc<CounterRun>>>> = Rc::default();
    let window = dom.window.clone();
    let config = config.clone();
    let started = Rc::clone(&runs);
    let observer = Observer::new(None, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        observer.unobserve(&target);
        let parsed = target
            .get_attribute(&config.attribute)
            .as_deref()
            .and_then(parse_target);
        match parsed {
            Some(value) => {
                let run = CounterRun::start(&window, target, config.count_up(value));
                started.borrow_mut().push(run);
            }
            None => tracing::debug!(target: targets::PAGE, "counter without a usable target"),
        }
    })?;
    for counter in &counters {
        observer.observe(counter);
    }
    Ok(CounterMount {
        _observer: observer,
        _runs: runs,
    })
}

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

/// The injected `<style>` element, removed on drop.
pub(crate) struct StyleMount {
    el: Element,
}

impl Drop for StyleMount {
    fn drop(&mut self) {
        self.el.remove();
    }
}

pub(crate) fn mount_styles(dom: &Dom) -> Result<StyleMount, InitError> {
    let head = dom.document.head().ok_or_else(|| InitError::missing("head"))?;
    let el = dom
        .document
        .create_element("style")
        .map_err(|_| InitError::unsupported("document.createElement"))?;
    el.set_text_content(Some(DYNAMIC_STYLES));
    head.append_child(&el)
        .map_err(|_| InitError::unsupported("head.appendChild"))?;
    Ok(StyleMount { el })
}
