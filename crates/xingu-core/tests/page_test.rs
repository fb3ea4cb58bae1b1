//! Page-level flows: each feature driven through `PageConfig` defaults and a
//! deterministic clock, the way the browser frontend drives them.

use std::time::Duration;

use pretty_assertions::assert_eq;
use xingu_core::PageConfig;
use xingu_core::animation::{Animation, parse_target};
use xingu_core::clock::DeterministicClock;
use xingu_core::header::{HeaderAppearance, HeaderState};
use xingu_core::loader::{LoaderPhase, LoaderTimeline};
use xingu_core::menu::MobileMenu;
use xingu_core::reveal::{RevealAction, RevealTracker};
use xingu_core::scroll::{anchor_target, scroll_top};

#[test]
fn loader_hides_then_goes_away() {
    let page = PageConfig::new();
    let mut clock = DeterministicClock::new();
    let timeline = LoaderTimeline::new(&page.loader, clock.now());

    let mut seen = vec![timeline.phase_at(clock.now())];
    while let Some(at) = timeline.next_change(clock.now()) {
        clock.set(at);
        seen.push(timeline.phase_at(clock.now()));
    }
    assert_eq!(
        seen,
        vec![LoaderPhase::Visible, LoaderPhase::Hidden, LoaderPhase::Removed]
    );
    assert_eq!(clock.now(), Duration::from_millis(2_500));
}

#[test]
fn counter_runs_frame_by_frame_to_its_target() {
    let page = PageConfig::new();
    let target = parse_target(" +1500 anos").unwrap();
    let mut counter = page.counter.count_up(target);

    let mut frames = 0;
    let mut shown = Vec::new();
    while !counter.is_complete() {
        counter.tick(counter.frame());
        shown.push(counter.display());
        frames += 1;
    }
    assert_eq!(frames, 125);
    assert_eq!(shown.first(), Some(&12));
    assert_eq!(shown.last(), Some(&1_500));
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn unusable_counter_targets_are_skipped() {
    assert_eq!(parse_target("-40"), None);
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target(""), None);
}

#[test]
fn header_restyles_only_when_crossing_threshold() {
    let page = PageConfig::new();
    let mut header = HeaderState::new(page.header);
    let applied: Vec<_> = [0.0, 50.0, 100.0, 101.0, 400.0, 99.0, 0.0]
        .into_iter()
        .filter_map(|y| header.on_scroll(y))
        .collect();
    assert_eq!(
        applied,
        vec![
            HeaderAppearance::Gradient,
            HeaderAppearance::Solid,
            HeaderAppearance::Gradient,
        ]
    );
}

#[test]
fn anchor_click_scrolls_below_header() {
    let page = PageConfig::new();
    assert_eq!(anchor_target("#contato"), Some("contato"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(scroll_top(1_200.0, 80.0, page.scroll.margin), 1_100.0);
    assert_eq!(scroll_top(50.0, 80.0, page.scroll.margin), 0.0);
}

#[test]
fn menu_and_reveal_state() {
    let mut menu = MobileMenu::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert!(!menu.is_open());

    let mut reveal = RevealTracker::new();
    assert_eq!(reveal.on_intersection(3, false), RevealAction::None);
    assert_eq!(reveal.on_intersection(3, true), RevealAction::Reveal);
    assert_eq!(reveal.on_intersection(3, true), RevealAction::None);
    assert_eq!(reveal.revealed_count(), 1);
}
