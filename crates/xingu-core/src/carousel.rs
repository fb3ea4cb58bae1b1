#![forbid(unsafe_code)]

//! Responsive slide carousel.
//!
//! A [`Carousel`] owns a fixed number of slides, the index of the leading
//! visible slide, and the timers layered on top (autoplay, resize debounce,
//! transition guard). It never touches the DOM: the host feeds it clicks,
//! pointer coordinates, layout measurements and timestamps, then applies the
//! [`CarouselFrame`]s it hands back.
//!
//! # Position model
//!
//! Position is a slide index. Pixel offsets are derived from the index and
//! the current [`LayoutInput`] every time a frame is produced, so the logical
//! position survives any number of resizes.
//!
//! When more than one slide is visible, navigation moves by groups of
//! `slides_to_show` and the index is always a group start. The final group of
//! an uneven split keeps its logical start (e.g. 6 for 8 slides in threes),
//! but is rendered clamped so the strip never scrolls past its last slide.
//!
//! # Invariants
//!
//! 1. `current_index < total` after every operation.
//! 2. With `slides_to_show > 1`, `current_index % slides_to_show == 0`.
//! 3. While a transition is running, index changes are ignored.
//! 4. Exactly one indicator is active in every frame.
//!
//! # Failure Modes
//!
//! - Zero slides: [`Carousel::new`] returns [`InitError::EmptyCollection`].
//! - Non-finite or negative widths: slide width collapses to `0`, offsets
//!   stay finite.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::InitError;
use crate::logging::targets;
use crate::schedule::{Debouncer, RecurringTask, SuspendReason};
use crate::swipe::{SwipeOutcome, SwipeTracker};
use crate::viewport::{Breakpoints, ViewPolicy, ViewSpec, ViewportClass};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How the host shows the active position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Translate the track by [`CarouselFrame::offset_px`].
    #[default]
    Transform,
    /// Toggle an `active` class on the slide at [`CarouselFrame::active_slide`].
    ActiveClass,
}

/// Where indicator dots come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IndicatorMarkup {
    /// Built by the host inside `host`, one button per indicator.
    Generated { host: String, class: String },
    /// Already present in the markup; matched by `selector`.
    Existing { selector: String },
}

/// Selectors binding a carousel to the page markup.
///
/// With `root` set, every other selector is resolved inside the root;
/// otherwise against the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselMarkup {
    pub root: Option<String>,
    pub track: Option<String>,
    pub slide: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub indicators: IndicatorMarkup,
}

impl CarouselMarkup {
    /// Markup of the product carousel.
    #[must_use]
    pub fn products() -> Self {
        Self {
            root: Some("#productsCarousel".into()),
            track: Some(".carousel-track".into()),
            slide: ".carousel-slide".into(),
            prev: Some(".carousel-btn.prev".into()),
            next: Some(".carousel-btn.next".into()),
            indicators: IndicatorMarkup::Generated {
                host: ".carousel-indicators".into(),
                class: "indicator".into(),
            },
        }
    }

    /// Markup of the testimonial slider.
    #[must_use]
    pub fn testimonials() -> Self {
        Self {
            root: None,
            track: None,
            slide: ".testimonial-slide".into(),
            prev: Some("#prevBtn".into()),
            next: Some("#nextBtn".into()),
            indicators: IndicatorMarkup::Existing {
                selector: ".dot".into(),
            },
        }
    }
}

/// Carousel behavior knobs. Durations are milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub policy: ViewPolicy,
    pub breakpoints: Breakpoints,
    /// Length of the slide animation; `0` disables the transition guard.
    pub transition_ms: u64,
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    pub pause_on_hover: bool,
    pub swipe: bool,
    /// Minimum horizontal travel (exclusive) for a drag to navigate.
    pub swipe_threshold: f32,
    pub resize_debounce_ms: u64,
    /// Extra distance between consecutive slide starts, on top of the slide
    /// width. `None` uses the gap. Ignored when the host measures the pitch.
    pub pitch_correction: Option<f32>,
    pub render: RenderMode,
    pub markup: CarouselMarkup,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::products()
    }
}

impl CarouselConfig {
    /// Responsive product carousel: 1/2/3 slides, 800 ms slides, 6 s autoplay.
    #[must_use]
    pub fn products() -> Self {
        Self {
            policy: ViewPolicy::default(),
            breakpoints: Breakpoints::default(),
            transition_ms: 800,
            autoplay: true,
            autoplay_interval_ms: 6_000,
            pause_on_hover: true,
            swipe: true,
            swipe_threshold: 50.0,
            resize_debounce_ms: 250,
            pitch_correction: None,
            render: RenderMode::Transform,
            markup: CarouselMarkup::products(),
        }
    }

    /// Single-slide testimonial slider: instant switch, 5 s autoplay, no
    /// hover pause, no swipe.
    #[must_use]
    pub fn testimonials() -> Self {
        Self {
            policy: ViewPolicy::Fixed(ViewSpec::new(1, 0.0)),
            transition_ms: 0,
            autoplay_interval_ms: 5_000,
            pause_on_hover: false,
            swipe: false,
            render: RenderMode::ActiveClass,
            markup: CarouselMarkup::testimonials(),
            ..Self::products()
        }
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

// ---------------------------------------------------------------------------
// Layout and frames
// ---------------------------------------------------------------------------

/// Layout measurements supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutInput {
    /// Window width, used for the viewport class.
    pub viewport_width: f64,
    /// Width of the visible strip.
    pub container_width: f32,
    /// Measured distance between the starts of two consecutive slides.
    pub measured_pitch: Option<f32>,
}

impl LayoutInput {
    #[must_use]
    pub const fn new(viewport_width: f64, container_width: f32) -> Self {
        Self {
            viewport_width,
            container_width,
            measured_pitch: None,
        }
    }

    #[must_use]
    pub const fn with_measured_pitch(mut self, pitch: f32) -> Self {
        self.measured_pitch = Some(pitch);
        self
    }
}

/// One navigation dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Position among the indicators.
    pub index: usize,
    /// First slide this indicator covers; pass to [`Carousel::go_to`].
    pub target: usize,
    pub active: bool,
}

/// Everything the host needs to render the current position.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    /// Horizontal track translation in pixels (`<= 0`).
    pub offset_px: f32,
    pub slide_width_px: f32,
    pub gap_px: f32,
    pub slides_to_show: usize,
    /// Logical current index.
    pub active_slide: usize,
    /// Apply without the CSS transition.
    pub instant: bool,
    pub indicators: Vec<Indicator>,
    /// The indicator set changed shape and must be rebuilt, not just toggled.
    pub rebuild_indicators: bool,
}

impl CarouselFrame {
    /// Index of the active indicator.
    #[must_use]
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|i| i.active)
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// The request resolved to the current position.
    Unchanged,
    /// Dropped: a transition is running or the target is out of range.
    Ignored,
}

impl Navigation {
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// What a call to [`Carousel::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// A running transition finished.
    pub settled: bool,
    /// A debounced resize was applied.
    pub relaid_out: bool,
    /// Autoplay advanced the carousel.
    pub advanced: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct PendingFrame {
    instant: bool,
    rebuild_indicators: bool,
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Responsive carousel controller. One instance per carousel root.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    total: usize,
    current: usize,
    view: ViewSpec,
    class: ViewportClass,
    layout: LayoutInput,
    transition_until: Option<Duration>,
    autoplay: RecurringTask,
    swipe: SwipeTracker,
    resize: Debouncer,
    pending_layout: Option<LayoutInput>,
    pending_frame: Option<PendingFrame>,
}

impl Carousel {
    /// Create a carousel over `total` slides laid out per `layout`.
    ///
    /// The first frame is queued as instant and autoplay starts when enabled.
    pub fn new(
        total: usize,
        config: CarouselConfig,
        layout: LayoutInput,
        now: Duration,
    ) -> Result<Self, InitError> {
        if total == 0 {
            return Err(InitError::empty(config.markup.slide.clone()));
        }
        let config = CarouselConfig {
            breakpoints: config.breakpoints.normalized(),
            ..config
        };
        let class = ViewportClass::from_width(layout.viewport_width, &config.breakpoints);
        let mut carousel = Self {
            total,
            current: 0,
            view: config.policy.spec_for(class),
            class,
            layout,
            transition_until: None,
            autoplay: RecurringTask::new(config.autoplay_interval()),
            swipe: SwipeTracker::new(config.swipe_threshold),
            resize: Debouncer::new(config.resize_debounce()),
            pending_layout: None,
            pending_frame: None,
            config,
        };
        carousel.recompute(layout, true);
        if carousel.config.autoplay {
            carousel.autoplay.start(now);
        }
        crate::info!(
            target: targets::CAROUSEL,
            total,
            slides_to_show = carousel.view.slides_to_show,
            "carousel ready"
        );
        Ok(carousel)
    }

    // -- Accessors ----------------------------------------------------------

    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn slides_to_show(&self) -> usize {
        self.view.slides_to_show
    }

    #[must_use]
    pub const fn gap(&self) -> f32 {
        self.view.gap
    }

    #[must_use]
    pub const fn viewport_class(&self) -> ViewportClass {
        self.class
    }

    /// Whether an animated move is still inside its guard window.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transition_until.is_some()
    }

    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }

    /// Number of navigable pages: slides when one is shown, groups otherwise.
    #[must_use]
    pub fn total_groups(&self) -> usize {
        self.total.div_ceil(self.view.slides_to_show)
    }

    fn current_group(&self) -> usize {
        self.current / self.view.slides_to_show
    }

    // -- Navigation ---------------------------------------------------------

    /// Advance one slide or one group, wrapping at the end.
    pub fn next(&mut self, now: Duration) -> Navigation {
        let groups = self.total_groups();
        let to = (self.current_group() + 1) % groups * self.view.slides_to_show;
        self.navigate(to, now)
    }

    /// Go back one slide or one group, wrapping at the start.
    pub fn prev(&mut self, now: Duration) -> Navigation {
        let groups = self.total_groups();
        let to = (self.current_group() + groups - 1) % groups * self.view.slides_to_show;
        self.navigate(to, now)
    }

    /// Jump to the slide or group containing `target`.
    pub fn go_to(&mut self, target: usize, now: Duration) -> Navigation {
        if target >= self.total {
            crate::trace!(target: targets::CAROUSEL, requested = target, "go_to out of range");
            return Navigation::Ignored;
        }
        let to = target / self.view.slides_to_show * self.view.slides_to_show;
        self.navigate(to, now)
    }

    /// Jump to the page covered by indicator `indicator`.
    pub fn go_to_indicator(&mut self, indicator: usize, now: Duration) -> Navigation {
        match indicator.checked_mul(self.view.slides_to_show) {
            Some(target) => self.go_to(target, now),
            None => Navigation::Ignored,
        }
    }

    fn navigate(&mut self, to: usize, now: Duration) -> Navigation {
        self.settle(now);
        if self.transition_until.is_some() {
            crate::trace!(target: targets::CAROUSEL, to, "navigation ignored during transition");
            return Navigation::Ignored;
        }
        let from = self.current;
        if to == from {
            return Navigation::Unchanged;
        }
        self.current = to;
        let transition = self.config.transition();
        if !transition.is_zero() {
            self.transition_until = Some(now.saturating_add(transition));
        }
        self.queue_frame(false, false);
        crate::debug!(target: targets::CAROUSEL, from, to, "carousel moved");
        Navigation::Moved { from, to }
    }

    fn settle(&mut self, now: Duration) -> bool {
        match self.transition_until {
            Some(until) if now >= until => {
                self.transition_until = None;
                true
            }
            _ => false,
        }
    }

    // -- Layout -------------------------------------------------------------

    /// Re-derive the view spec from `layout` and re-validate the index.
    ///
    /// `instant` suppresses the visual transition for the resulting frame; use
    /// it when the layout changed rather than the logical position.
    pub fn recompute(&mut self, layout: LayoutInput, instant: bool) {
        self.layout = layout;
        self.class = ViewportClass::from_width(layout.viewport_width, &self.config.breakpoints);
        self.view = self.config.policy.spec_for(self.class);
        let show = self.view.slides_to_show;
        self.current = (self.current / show * show).min(self.total - 1);
        self.queue_frame(instant, true);
    }

    /// Record a viewport change; the recompute happens once the debounce
    /// window passes without further changes.
    pub fn viewport_changed(&mut self, layout: LayoutInput, now: Duration) {
        self.pending_layout = Some(layout);
        self.resize.trigger(now);
    }

    fn queue_frame(&mut self, instant: bool, rebuild_indicators: bool) {
        let pending = self.pending_frame.get_or_insert_with(PendingFrame::default);
        pending.instant = instant;
        pending.rebuild_indicators |= rebuild_indicators;
    }

    /// Take the frame queued by the last state change, if any.
    pub fn take_frame(&mut self) -> Option<CarouselFrame> {
        let pending = self.pending_frame.take()?;
        let mut frame = self.frame();
        frame.instant = pending.instant;
        frame.rebuild_indicators = pending.rebuild_indicators;
        Some(frame)
    }

    /// Snapshot of the current position, independent of queued changes.
    #[must_use]
    pub fn frame(&self) -> CarouselFrame {
        let show = self.view.slides_to_show;
        let gap = self.view.gap;
        let container = if self.layout.container_width.is_finite() {
            self.layout.container_width
        } else {
            0.0
        };
        let slide_width = ((container - gap * (show - 1) as f32) / show as f32).max(0.0);
        let pitch = self
            .layout
            .measured_pitch
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or_else(|| slide_width + self.config.pitch_correction.unwrap_or(gap));
        let visual_start = self.current.min(self.total.saturating_sub(show));
        let active = self.current_group();
        let indicators = (0..self.total_groups())
            .map(|index| Indicator {
                index,
                target: index * show,
                active: index == active,
            })
            .collect();
        CarouselFrame {
            offset_px: -(visual_start as f32 * pitch),
            slide_width_px: slide_width,
            gap_px: gap,
            slides_to_show: show,
            active_slide: self.current,
            instant: false,
            indicators,
            rebuild_indicators: false,
        }
    }

    // -- Pointer input ------------------------------------------------------

    /// Touch start / mouse down. Suspends autoplay for the drag.
    pub fn pointer_down(&mut self, x: f32) {
        if !self.config.swipe {
            return;
        }
        self.swipe.begin(x);
        self.autoplay.suspend(SuspendReason::DRAG);
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.swipe.update(x);
    }

    /// Touch end / mouse up. Navigates when the drag passed the threshold.
    pub fn pointer_up(&mut self, x: Option<f32>, now: Duration) -> Navigation {
        if !self.swipe.is_active() {
            return Navigation::Unchanged;
        }
        let outcome = self.swipe.finish(x);
        self.autoplay.resume(SuspendReason::DRAG, now);
        match outcome {
            SwipeOutcome::Next => self.next(now),
            SwipeOutcome::Prev => self.prev(now),
            SwipeOutcome::None => Navigation::Unchanged,
        }
    }

    /// Drag abandoned (touch cancel, pointer left the window).
    pub fn pointer_cancel(&mut self, now: Duration) {
        if self.swipe.is_active() {
            self.swipe.cancel();
            self.autoplay.resume(SuspendReason::DRAG, now);
        }
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn hover(&mut self, entered: bool, now: Duration) {
        if !self.config.pause_on_hover {
            return;
        }
        if entered {
            self.autoplay.suspend(SuspendReason::HOVER);
        } else {
            self.autoplay.resume(SuspendReason::HOVER, now);
        }
    }

    // -- Autoplay -----------------------------------------------------------

    pub fn start_autoplay(&mut self, now: Duration) {
        self.autoplay.start(now);
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    // -- Time ---------------------------------------------------------------

    /// Earliest time at which [`tick`](Self::tick) has something to do.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        [
            self.transition_until,
            self.resize.deadline(),
            self.autoplay.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Advance timers to `now`: settle transitions, apply debounced resizes,
    /// and run autoplay.
    pub fn tick(&mut self, now: Duration) -> TickOutcome {
        let mut outcome = TickOutcome {
            settled: self.settle(now),
            ..TickOutcome::default()
        };

        if self.resize.poll(now)
            && let Some(layout) = self.pending_layout.take()
        {
            self.recompute(layout, true);
            if self.autoplay.is_active() {
                self.autoplay.restart(now);
            }
            outcome.relaid_out = true;
        }

        if self.autoplay.poll(now) {
            if self.transition_until.is_some() {
                crate::trace!(target: targets::CAROUSEL, "autoplay skipped during transition");
            } else {
                outcome.advanced = self.next(now).moved();
            }
        }
        outcome
    }
}
