//! Scenario tests for the responsive carousel.

use std::time::Duration;

use pretty_assertions::assert_eq;
use xingu_core::carousel::{CarouselConfig, Indicator};
use xingu_core::clock::DeterministicClock;
use xingu_core::{Carousel, LayoutInput, Navigation};

const DESKTOP: LayoutInput = LayoutInput::new(1280.0, 1000.0);
const MOBILE: LayoutInput = LayoutInput::new(375.0, 343.0);

/// Past the 800 ms transition guard.
const SETTLE: Duration = Duration::from_millis(800);

fn carousel(total: usize, layout: LayoutInput) -> Carousel {
    Carousel::new(total, CarouselConfig::products(), layout, Duration::ZERO).unwrap()
}

#[test]
fn eight_slides_in_threes_wrap_through_three_groups() {
    let mut clock = DeterministicClock::new();
    let mut c = carousel(8, DESKTOP);
    assert_eq!(c.total_groups(), 3);

    let mut starts = vec![c.current_index()];
    for _ in 0..3 {
        c.next(clock.now());
        clock.advance(SETTLE);
        starts.push(c.current_index());
    }
    assert_eq!(starts, vec![0, 3, 6, 0]);
}

#[test]
fn five_single_slides_wrap_from_last_to_first() {
    let mut clock = DeterministicClock::new();
    let mut c = carousel(5, MOBILE);
    c.go_to(4, clock.now());
    clock.advance(SETTLE);
    assert_eq!(c.next(clock.now()), Navigation::Moved { from: 4, to: 0 });
}

#[test]
fn prev_from_first_group_wraps_to_last_group() {
    let mut c = carousel(8, DESKTOP);
    assert_eq!(c.prev(Duration::ZERO), Navigation::Moved { from: 0, to: 6 });
}

#[test]
fn swipe_threshold_scenarios() {
    let mut clock = DeterministicClock::new();
    let mut c = carousel(5, MOBILE);

    c.pointer_down(200.0);
    assert_eq!(c.pointer_up(Some(160.0), clock.now()), Navigation::Unchanged);
    assert_eq!(c.current_index(), 0);

    c.pointer_down(200.0);
    assert_eq!(
        c.pointer_up(Some(140.0), clock.now()),
        Navigation::Moved { from: 0, to: 1 }
    );

    clock.advance(SETTLE);
    c.pointer_down(140.0);
    assert_eq!(
        c.pointer_up(Some(200.0), clock.now()),
        Navigation::Moved { from: 1, to: 0 }
    );
}

#[test]
fn next_during_transition_is_a_no_op() {
    let mut c = carousel(8, DESKTOP);
    c.next(Duration::ZERO);
    assert!(c.is_transitioning());
    assert_eq!(c.next(Duration::from_millis(10)), Navigation::Ignored);
    assert_eq!(c.prev(Duration::from_millis(20)), Navigation::Ignored);
    assert_eq!(c.go_to(0, Duration::from_millis(30)), Navigation::Ignored);
    assert_eq!(c.current_index(), 3);
}

#[test]
fn indicators_after_go_to_and_recompute() {
    let mut c = carousel(8, DESKTOP);
    c.go_to(7, Duration::ZERO);
    c.recompute(DESKTOP, false);
    let frame = c.take_frame().unwrap();
    assert_eq!(
        frame.indicators,
        vec![
            Indicator { index: 0, target: 0, active: false },
            Indicator { index: 1, target: 3, active: false },
            Indicator { index: 2, target: 6, active: true },
        ]
    );
}

#[test]
fn resize_keeps_logical_position_and_snaps_instantly() {
    let mut clock = DeterministicClock::new();
    let mut c = carousel(9, MOBILE);
    c.go_to(7, clock.now());
    assert!(c.tick(clock.advance(SETTLE)).settled);
    c.take_frame();

    c.viewport_changed(DESKTOP, clock.advance_ms(1_000));
    let wake = c.next_wakeup().unwrap();
    assert_eq!(wake, Duration::from_millis(2_050));

    clock.set(wake);
    assert!(c.tick(clock.now()).relaid_out);
    assert_eq!(c.current_index(), 6);
    let frame = c.take_frame().unwrap();
    assert!(frame.instant);
    assert!(frame.rebuild_indicators);
    assert_eq!(frame.slides_to_show, 3);
}

#[test]
fn autoplay_cycles_and_pauses_on_interaction() {
    let mut clock = DeterministicClock::new();
    let mut c = carousel(4, MOBILE);

    clock.advance_ms(6_000);
    assert!(c.tick(clock.now()).advanced);
    assert_eq!(c.current_index(), 1);

    c.hover(true, clock.advance_ms(1_000));
    clock.advance_ms(20_000);
    assert!(!c.tick(clock.now()).advanced);
    assert_eq!(c.current_index(), 1);

    c.hover(false, clock.now());
    clock.advance_ms(6_000);
    assert!(c.tick(clock.now()).advanced);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn stopped_autoplay_has_no_wakeup() {
    let mut c = carousel(4, MOBILE);
    c.stop_autoplay();
    assert!(!c.autoplay_active());
    assert_eq!(c.next_wakeup(), None);
    c.start_autoplay(Duration::from_secs(1));
    assert_eq!(c.next_wakeup(), Some(Duration::from_secs(7)));
}
