//! Index arbitration through the engine's public contract.

use rand::{Rng, SeedableRng, rngs::StdRng};
use vitrine_core::{EngineConfig, Key};
use vitrine_model::{
    DropReason, LoopPolicy, NavigationSource, Orientation, Outcome,
};

#[path = "support/mod.rs"]
mod support;

use support::{Clock, engine};

const SETTLE_MS: u64 = 700;

fn looping() -> EngineConfig {
    EngineConfig {
        loop_policy: LoopPolicy::Wrap,
        ..EngineConfig::default()
    }
}

#[test]
fn random_sequences_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..64 {
        let count = rng.random_range(1..12);
        let policy = if rng.random_bool(0.5) {
            LoopPolicy::Wrap
        } else {
            LoopPolicy::Clamp
        };
        let mut carousel = engine(
            count,
            EngineConfig {
                loop_policy: policy,
                initial_index: rng.random_range(0..count * 2),
                ..EngineConfig::default()
            },
        );
        let mut clock = Clock::new();
        assert!(carousel.current_index() < count);

        for _ in 0..200 {
            let now = clock.advance(rng.random_range(0..SETTLE_MS * 2));
            let outcome = if rng.random_bool(0.5) {
                carousel.go_to_next(now)
            } else {
                carousel.go_to_prev(now)
            };
            assert!(carousel.current_index() < count, "{outcome:?}");
            if count <= 1 {
                assert_eq!(outcome, Outcome::Dropped(DropReason::Empty));
            }
        }
    }
}

#[test]
fn clamped_carousel_stops_at_both_ends() {
    let mut carousel = engine(3, EngineConfig::default());
    let mut clock = Clock::new();

    assert!(!carousel.can_go_prev());
    assert_eq!(
        carousel.go_to_prev(clock.now()),
        Outcome::Dropped(DropReason::Boundary)
    );
    assert_eq!(carousel.current_index(), 0);

    carousel.go_to_next(clock.advance(SETTLE_MS));
    carousel.go_to_next(clock.advance(SETTLE_MS));
    assert_eq!(carousel.current_index(), 2);
    assert!(!carousel.can_go_next());
    assert_eq!(
        carousel.go_to_next(clock.advance(SETTLE_MS)),
        Outcome::Dropped(DropReason::Boundary)
    );
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn looping_carousel_wraps_both_ways() {
    let mut carousel = engine(
        10,
        EngineConfig {
            initial_index: 9,
            ..looping()
        },
    );
    let mut clock = Clock::new();
    assert_eq!(carousel.current_index(), 9);

    let outcome = carousel.go_to_next(clock.now());
    assert_eq!(
        outcome,
        Outcome::Committed {
            from: 9,
            to: 0,
            source: NavigationSource::Programmatic,
        }
    );
    carousel.go_to_prev(clock.advance(SETTLE_MS));
    assert_eq!(carousel.current_index(), 9);
}

#[test]
fn second_request_during_transition_is_dropped() {
    let mut carousel = engine(8, EngineConfig::default());
    let mut clock = Clock::new();

    assert_eq!(carousel.go_to_slide(5, clock.now()).committed_index(), Some(5));
    assert_eq!(
        carousel.go_to_slide(2, clock.advance(100)),
        Outcome::Dropped(DropReason::Transitioning)
    );
    assert_eq!(carousel.current_index(), 5);

    // Dropped, not queued: nothing lands once the lock releases.
    assert_eq!(carousel.poll(clock.advance(SETTLE_MS)), None);
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_index(), 5);
}

#[test]
fn out_of_range_targets_are_clamped_or_wrapped() {
    let mut clock = Clock::new();

    let mut clamped = engine(4, EngineConfig::default());
    clamped.go_to_slide(99, clock.now());
    assert_eq!(clamped.current_index(), 3);
    clamped.go_to_slide(-7, clock.advance(SETTLE_MS));
    assert_eq!(clamped.current_index(), 0);

    let mut wrapped = engine(4, looping());
    wrapped.go_to_slide(6, clock.advance(SETTLE_MS));
    assert_eq!(wrapped.current_index(), 2);
    wrapped.go_to_slide(-1, clock.advance(SETTLE_MS));
    assert_eq!(wrapped.current_index(), 3);
}

#[test]
fn same_index_is_a_no_op() {
    let mut carousel = engine(4, EngineConfig::default());
    let now = Clock::new().now();
    assert_eq!(
        carousel.go_to_slide(0, now),
        Outcome::Dropped(DropReason::Unchanged)
    );
    assert!(!carousel.is_transitioning());
}

#[test]
fn single_item_never_navigates() {
    let mut carousel = engine(1, looping());
    let now = Clock::new().now();
    assert!(!carousel.can_go_next());
    assert!(!carousel.can_go_prev());
    assert_eq!(carousel.go_to_next(now), Outcome::Dropped(DropReason::Empty));
    assert_eq!(
        carousel.key_down(Key::End, now),
        Some(Outcome::Dropped(DropReason::Empty))
    );
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn keyboard_follows_orientation() {
    let mut clock = Clock::new();

    let mut horizontal = engine(5, EngineConfig::default());
    assert_eq!(horizontal.key_down(Key::ArrowDown, clock.now()), None);
    let outcome = horizontal.key_down(Key::ArrowRight, clock.now());
    assert!(matches!(
        outcome,
        Some(Outcome::Committed {
            to: 1,
            source: NavigationSource::Keyboard,
            ..
        })
    ));
    horizontal.key_down(Key::End, clock.advance(SETTLE_MS));
    assert_eq!(horizontal.current_index(), 4);
    horizontal.key_down(Key::Home, clock.advance(SETTLE_MS));
    assert_eq!(horizontal.current_index(), 0);

    let mut vertical = engine(
        5,
        EngineConfig {
            orientation: Orientation::Vertical,
            ..EngineConfig::default()
        },
    );
    assert_eq!(vertical.key_down(Key::ArrowRight, clock.now()), None);
    vertical.key_down(Key::ArrowDown, clock.now());
    assert_eq!(vertical.current_index(), 1);
    vertical.key_down(Key::ArrowUp, clock.advance(SETTLE_MS));
    assert_eq!(vertical.current_index(), 0);
}

#[test]
fn reduced_motion_shortens_the_lock() {
    let mut carousel = engine(5, EngineConfig::default());
    carousel.set_reduced_motion(true);
    let mut clock = Clock::new();

    carousel.go_to_next(clock.now());
    assert!(carousel.is_transitioning());
    assert!(carousel.go_to_next(clock.advance(200)).is_committed());
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn lock_releases_at_its_deadline() {
    let mut carousel = engine(5, EngineConfig::default());
    let clock = Clock::new();
    carousel.go_to_next(clock.now());

    let deadline = carousel.next_deadline().expect("lock scheduled");
    carousel.poll(deadline - std::time::Duration::from_millis(1));
    assert!(carousel.is_transitioning());
    carousel.poll(deadline);
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.next_deadline(), None);
}

#[test]
fn pause_is_independent_of_the_lock() {
    let mut carousel = engine(5, EngineConfig::default());
    let clock = Clock::new();
    carousel.pause();
    assert!(carousel.go_to_next(clock.now()).is_committed());
    assert!(carousel.is_paused());
    carousel.resume();
    assert!(!carousel.is_paused());
    assert!(carousel.is_transitioning());
}

#[test]
fn state_snapshot_reflects_engine() {
    let mut carousel = engine(5, EngineConfig::default());
    let clock = Clock::new();
    carousel.go_to_slide(3, clock.now());
    carousel.pause();

    let state = carousel.state();
    assert_eq!(state.current_index, 3);
    assert!(state.is_transitioning);
    assert!(state.is_paused);
    assert_eq!(state.autoplay_progress, 0.0);
    assert_eq!(
        carousel.active_item().map(|item| item.name.as_str()),
        Some("landing-3")
    );
}
