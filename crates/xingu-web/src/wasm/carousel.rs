//! DOM binding for [`xingu_core::Carousel`].
//!
//! Every listener and the wake-up timer hold a `Weak` to the shared state,
//! so dropping the [`CarouselMount`] detaches the listeners and frees the
//! carousel without reference cycles.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent};
use xingu_core::carousel::{CarouselConfig, IndicatorMarkup, RenderMode};
use xingu_core::logging::targets;
use xingu_core::styles::translate_x;
use xingu_core::{Carousel, CarouselFrame, InitError, LayoutInput};

use super::dom::{Dom, Listener, as_html, listen, set_class, set_style};
use super::timer::{HostClock, Timer};

const ACTIVE: &str = "active";
const INDEX_ATTR: &str = "data-index";

/// A mounted carousel; dropping it tears everything down.
pub(crate) struct CarouselMount {
    _shared: Rc<Shared>,
    _listeners: Vec<Listener>,
}

struct Shared {
    dom: Dom,
    clock: HostClock,
    carousel: RefCell<Carousel>,
    view: CarouselView,
    timer: Timer,
}

struct CarouselView {
    render: RenderMode,
    root: Option<Element>,
    track: Option<HtmlElement>,
    slides: Vec<Element>,
    indicators: IndicatorView,
}

enum IndicatorView {
    Generated {
        host: Element,
        class: String,
        buttons: RefCell<Vec<Element>>,
    },
    Existing {
        dots: Vec<Element>,
    },
    Absent,
}

pub(crate) fn mount(
    name: &'static str,
    dom: &Dom,
    config: &CarouselConfig,
    clock: HostClock,
) -> Result<CarouselMount, InitError> {
    let markup = &config.markup;
    let root = match &markup.root {
        Some(selector) => Some(dom.require(None, selector)?),
        None => None,
    };
    let scope = root.as_ref();
    let slides = dom.query_all(scope, &markup.slide);

    let track = match &markup.track {
        Some(selector) => as_html(&dom.require(scope, selector)?),
        None => None,
    };
    if config.render == RenderMode::Transform && track.is_none() {
        let selector = markup.track.as_deref().unwrap_or("carousel track");
        return Err(InitError::missing(selector));
    }

    let indicators = match &markup.indicators {
        IndicatorMarkup::Generated { host, class } => match dom.query(scope, host) {
            Some(host) => IndicatorView::Generated {
                host,
                class: class.clone(),
                buttons: RefCell::new(Vec::new()),
            },
            None => IndicatorView::Absent,
        },
        IndicatorMarkup::Existing { selector } => IndicatorView::Existing {
            dots: dom.query_all(scope, selector),
        },
    };

    let view = CarouselView {
        render: config.render,
        root,
        track,
        slides,
        indicators,
    };
    let layout = view.measure(dom);
    let carousel = Carousel::new(view.slides.len(), config.clone(), layout, clock.now())?;

    let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
        let weak = weak.clone();
        Shared {
            dom: dom.clone(),
            clock,
            carousel: RefCell::new(carousel),
            view,
            timer: Timer::new(&dom.window, move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_timer();
                }
            }),
        }
    });
    shared.flush();

    let listeners = shared.attach(config);
    tracing::info!(
        target: targets::PAGE,
        carousel = name,
        slides = shared.view.slides.len(),
        "carousel mounted"
    );
    Ok(CarouselMount {
        _shared: shared,
        _listeners: listeners,
    })
}

fn touch_x(event: &Event) -> Option<f32> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.client_x() as f32)
}

fn mouse_x(event: &Event) -> Option<f32> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| mouse.client_x() as f32)
}

impl Shared {
    /// Wrap a carousel operation as an event handler that flushes afterwards.
    fn handler<F>(self: &Rc<Self>, mut op: F) -> impl FnMut(Event) + 'static
    where
        F: FnMut(&mut Carousel, Duration, &Event) + 'static,
    {
        let weak = Rc::downgrade(self);
        move |event: Event| {
            if let Some(shared) = weak.upgrade() {
                let now = shared.clock.now();
                op(&mut shared.carousel.borrow_mut(), now, &event);
                shared.flush();
            }
        }
    }

    fn attach(self: &Rc<Self>, config: &CarouselConfig) -> Vec<Listener> {
        let mut listeners = Vec::new();
        let markup = &config.markup;
        let scope = self.view.root.as_ref();

        if let Some(btn) = markup.prev.as_deref().and_then(|s| self.dom.query(scope, s)) {
            listen(&mut listeners, &btn, "click", self.handler(|c, now, _| {
                c.prev(now);
            }));
        }
        if let Some(btn) = markup.next.as_deref().and_then(|s| self.dom.query(scope, s)) {
            listen(&mut listeners, &btn, "click", self.handler(|c, now, _| {
                c.next(now);
            }));
        }

        match &self.view.indicators {
            IndicatorView::Generated { host, class, .. } => {
                let selector = format!(".{class}");
                listen(&mut listeners, host, "click", self.handler(move |c, now, event| {
                    let index = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest(&selector).ok().flatten())
                        .and_then(|el| el.get_attribute(INDEX_ATTR))
                        .and_then(|raw| raw.parse::<usize>().ok());
                    if let Some(index) = index {
                        c.go_to_indicator(index, now);
                    }
                }));
            }
            IndicatorView::Existing { dots } => {
                for (index, dot) in dots.iter().enumerate() {
                    listen(&mut listeners, dot, "click", self.handler(move |c, now, _| {
                        c.go_to_indicator(index, now);
                    }));
                }
            }
            IndicatorView::Absent => {}
        }

        let surface: Option<Element> = scope
            .cloned()
            .or_else(|| self.view.track.clone().map(Element::from));
        if let Some(surface) = surface {
            if config.swipe {
                self.attach_drag(&mut listeners, &surface);
            }
            if config.pause_on_hover {
                listen(&mut listeners, &surface, "mouseenter", self.handler(|c, now, _| {
                    c.hover(true, now);
                }));
            }
            // Leaving ends both hover and any mouse drag in progress.
            listen(&mut listeners, &surface, "mouseleave", self.handler(|c, now, _| {
                c.pointer_up(None, now);
                c.hover(false, now);
            }));
        }

        let weak = Rc::downgrade(self);
        listen(&mut listeners, &self.dom.window, "resize", move |_| {
            if let Some(shared) = weak.upgrade() {
                let layout = shared.view.measure(&shared.dom);
                let now = shared.clock.now();
                shared.carousel.borrow_mut().viewport_changed(layout, now);
                shared.flush();
            }
        });

        listeners
    }

    fn attach_drag(self: &Rc<Self>, listeners: &mut Vec<Listener>, surface: &Element) {
        listen(listeners, surface, "touchstart", self.handler(|c, _, event| {
            if let Some(x) = touch_x(event) {
                c.pointer_down(x);
            }
        }));
        listen(listeners, surface, "touchmove", self.handler(|c, _, event| {
            if let Some(x) = touch_x(event) {
                c.pointer_move(x);
            }
        }));
        listen(listeners, surface, "touchend", self.handler(|c, now, event| {
            c.pointer_up(touch_x(event), now);
        }));
        listen(listeners, surface, "touchcancel", self.handler(|c, now, _| {
            c.pointer_cancel(now);
        }));
        listen(listeners, surface, "mousedown", self.handler(|c, _, event| {
            if let Some(x) = mouse_x(event) {
                event.prevent_default();
                c.pointer_down(x);
            }
        }));
        listen(listeners, surface, "mousemove", self.handler(|c, _, event| {
            if let Some(x) = mouse_x(event) {
                c.pointer_move(x);
            }
        }));
        listen(listeners, surface, "mouseup", self.handler(|c, now, event| {
            c.pointer_up(mouse_x(event), now);
        }));
    }

    fn on_timer(&self) {
        let now = self.clock.now();
        self.carousel.borrow_mut().tick(now);
        self.flush();
    }

    /// Apply any queued frame and re-arm the timer for the next deadline.
    fn flush(&self) {
        let (frame, wakeup) = {
            let mut carousel = self.carousel.borrow_mut();
            (carousel.take_frame(), carousel.next_wakeup())
        };
        if let Some(frame) = frame {
            self.view.apply(&frame, &self.dom.document);
        }
        self.timer.arm_at(wakeup, &self.clock);
    }
}

impl CarouselView {
    fn measure(&self, dom: &Dom) -> LayoutInput {
        let strip = self
            .track
            .as_ref()
            .and_then(|track| track.parent_element())
            .or_else(|| self.root.clone());
        let container = strip.map_or(0.0, |el| el.client_width() as f32);
        let layout = LayoutInput::new(dom.viewport_width(), container);

        if let [first, second, ..] = self.slides.as_slice()
            && let (Some(a), Some(b)) = (as_html(first), as_html(second))
        {
            let pitch = (b.offset_left() - a.offset_left()) as f32;
            if pitch > 0.0 {
                return layout.with_measured_pitch(pitch);
            }
        }
        layout
    }

    fn apply(&self, frame: &CarouselFrame, document: &Document) {
        match self.render {
            RenderMode::Transform => {
                if let Some(track) = &self.track {
                    let transform = translate_x(frame.offset_px);
                    if frame.instant {
                        set_style(track, "transition", "none");
                        set_style(track, "transform", &transform);
                        // Force layout so the jump lands before the transition returns.
                        let _ = track.offset_width();
                        let _ = track.style().remove_property("transition");
                    } else {
                        set_style(track, "transform", &transform);
                    }
                }
            }
            RenderMode::ActiveClass => {
                for (index, slide) in self.slides.iter().enumerate() {
                    set_class(slide, ACTIVE, index == frame.active_slide);
                }
            }
        }
        self.indicators.apply(frame, document);
    }
}

impl IndicatorView {
    fn apply(&self, frame: &CarouselFrame, document: &Document) {
        match self {
            Self::Generated {
                host,
                class,
                buttons,
            } => {
                let mut buttons = buttons.borrow_mut();
                if frame.rebuild_indicators || buttons.len() != frame.indicators.len() {
                    host.set_inner_html("");
                    buttons.clear();
                    for indicator in &frame.indicators {
                        let Ok(button) = document.create_element("button") else {
                            continue;
                        };
                        button.set_class_name(class);
                        let _ = button.set_attribute("type", "button");
                        let _ = button.set_attribute(INDEX_ATTR, &indicator.index.to_string());
                        let _ = button.set_attribute(
                            "aria-label",
                            &format!("Ir para o grupo {}", indicator.index + 1),
                        );
                        if host.append_child(&button).is_ok() {
                            buttons.push(button);
                        }
                    }
                }
                for (button, indicator) in buttons.iter().zip(&frame.indicators) {
                    set_class(button, ACTIVE, indicator.active);
                }
            }
            Self::Existing { dots } => {
                let active = frame.active_indicator();
                for (index, dot) in dots.iter().enumerate() {
                    set_class(dot, ACTIVE, Some(index) == active);
                }
            }
            Self::Absent => {}
        }
    }
}
