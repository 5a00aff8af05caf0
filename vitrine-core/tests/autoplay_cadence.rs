//! Autoplay cadence driven by host frames and interval callbacks.

use std::time::Duration;

use vitrine_core::{AutoplayMode, EngineConfig, Resource, WheelDelta};
use vitrine_model::{DropReason, LoopPolicy, NavigationSource, Outcome};

#[path = "support/mod.rs"]
mod support;

use support::{Clock, engine};

const DELAY_MS: u64 = 5000;

fn autoplay() -> EngineConfig {
    EngineConfig {
        autoplay: true,
        autoplay_delay: Duration::from_millis(DELAY_MS),
        ..EngineConfig::default()
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn full_delay_fires_one_next_and_resets_progress() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    assert_eq!(carousel.frame(clock.now()), None);
    let outcome = carousel.frame(clock.advance(DELAY_MS));

    assert_eq!(
        outcome,
        Some(Outcome::Committed {
            from: 0,
            to: 1,
            source: NavigationSource::Autoplay,
        })
    );
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn progress_tracks_elapsed_time() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.frame(clock.advance(1000));
    assert!(approx(carousel.progress(), 20.0), "{}", carousel.progress());
    carousel.frame(clock.advance(1500));
    assert!(approx(carousel.progress(), 50.0), "{}", carousel.progress());
    assert!(approx(carousel.state().autoplay_progress, 50.0));
}

#[test]
fn paused_frames_change_nothing() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();
    carousel.pause();

    carousel.frame(clock.now());
    assert_eq!(carousel.frame(clock.advance(DELAY_MS * 3)), None);
    assert_eq!(carousel.progress(), 0.0);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn backgrounded_tab_fires_a_single_advance() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    let outcome = carousel.frame(clock.advance(60_000));
    assert_eq!(outcome.and_then(|o| o.committed_index()), Some(1));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn dropped_wheel_burst_keeps_the_frame_for_autoplay() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.frame(clock.advance(4500));
    assert!(approx(carousel.progress(), 90.0), "{}", carousel.progress());

    // Prev at index 0 without looping: the burst resolves to a boundary
    // drop in the same frame autoplay comes due.
    carousel.wheel(WheelDelta::new(0.0, -50.0), clock.advance(1));
    let outcome = carousel.frame(clock.advance(600));
    assert_eq!(
        outcome,
        Some(Outcome::Committed {
            from: 0,
            to: 1,
            source: NavigationSource::Autoplay,
        })
    );
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn dropped_wheel_burst_is_still_reported() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.wheel(WheelDelta::new(0.0, -50.0), clock.advance(16));
    let outcome = carousel.frame(clock.advance(100));
    assert_eq!(outcome, Some(Outcome::Dropped(DropReason::Boundary)));
    assert!(approx(carousel.progress(), 2.32), "{}", carousel.progress());
}

#[test]
fn transition_holds_progress() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.go_to_next(clock.advance(16));
    carousel.frame(clock.advance(300));
    assert_eq!(carousel.progress(), 0.0);

    // Lock released at +616; this frame's delta counts again.
    carousel.frame(clock.advance(500));
    assert!(approx(carousel.progress(), 10.0), "{}", carousel.progress());
}

#[test]
fn manual_navigation_restarts_the_countdown() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.frame(clock.advance(2500));
    assert!(carousel.progress() > 0.0);
    carousel.go_to_slide(3, clock.advance(16));
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn drag_holds_progress() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.pointer_down(0.0, clock.advance(16));
    assert_eq!(carousel.frame(clock.advance(DELAY_MS)), None);
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn clamped_autoplay_stops_at_the_last_slide() {
    let mut carousel = engine(
        3,
        EngineConfig {
            initial_index: 2,
            loop_policy: LoopPolicy::Clamp,
            ..autoplay()
        },
    );
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    assert_eq!(carousel.frame(clock.advance(DELAY_MS)), None);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.progress(), 0.0);
}

#[test]
fn looping_autoplay_wraps() {
    let mut carousel = engine(
        3,
        EngineConfig {
            initial_index: 2,
            loop_policy: LoopPolicy::Wrap,
            ..autoplay()
        },
    );
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.frame(clock.advance(DELAY_MS));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn hover_pauses_until_the_pointer_leaves() {
    let mut carousel = engine(5, autoplay());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    carousel.pointer_enter();
    assert!(carousel.is_paused());
    assert_eq!(carousel.frame(clock.advance(DELAY_MS)), None);

    carousel.pointer_leave();
    assert!(!carousel.is_paused());
    assert!(carousel.frame(clock.advance(DELAY_MS)).is_some());
}

#[test]
fn hover_leave_keeps_an_explicit_pause() {
    let mut carousel = engine(5, autoplay());
    carousel.pause();
    carousel.pointer_enter();
    carousel.pointer_leave();
    assert!(carousel.is_paused());
}

#[test]
fn hover_does_nothing_without_pause_on_hover() {
    let mut carousel = engine(
        5,
        EngineConfig {
            pause_on_hover: false,
            ..autoplay()
        },
    );
    carousel.pointer_enter();
    assert!(!carousel.is_paused());
}

#[test]
fn interval_mode_advances_per_callback() {
    let mut carousel = engine(
        4,
        EngineConfig {
            autoplay_mode: AutoplayMode::Interval,
            ..autoplay()
        },
    );
    let mut clock = Clock::new();
    assert!(carousel.scope().is_held(Resource::AutoplayInterval));

    // Frames never advance in interval mode; they only move the bar.
    carousel.frame(clock.now());
    carousel.frame(clock.advance(DELAY_MS / 2));
    assert!(approx(carousel.progress(), 50.0), "{}", carousel.progress());
    assert_eq!(carousel.frame(clock.advance(DELAY_MS)), None);
    assert_eq!(carousel.progress(), 100.0);
    assert_eq!(carousel.current_index(), 0);

    let first = carousel.autoplay_interval(clock.advance(1));
    assert_eq!(first.and_then(|o| o.committed_index()), Some(1));
    assert_eq!(carousel.progress(), 0.0);
    let second = carousel.autoplay_interval(clock.advance(DELAY_MS));
    assert_eq!(second.and_then(|o| o.committed_index()), Some(2));

    carousel.pause();
    assert_eq!(carousel.autoplay_interval(clock.advance(DELAY_MS)), None);
}

#[test]
fn toggling_autoplay_at_runtime() {
    let mut carousel = engine(5, EngineConfig::default());
    let mut clock = Clock::new();

    carousel.frame(clock.now());
    assert_eq!(carousel.frame(clock.advance(DELAY_MS)), None);

    carousel.set_autoplay(true);
    assert!(carousel.frame(clock.advance(DELAY_MS)).is_some());

    carousel.set_autoplay(false);
    assert_eq!(carousel.frame(clock.advance(DELAY_MS * 2)), None);
}
