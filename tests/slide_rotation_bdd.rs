//! Behavioural tests for hero slide rotation.

#![expect(clippy::expect_used, reason = "BDD test steps; panics are acceptable")]

#[path = "slide_rotation_bdd/mod.rs"]
mod slide_rotation_support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use showcase::rotation::{CarouselView, HoldSource, LivePoliteness, SlideRotator};
use slide_rotation_support::RotationState;
use slide_rotation_support::state::slides;
use tokio::time::Instant;

#[fixture]
fn rotation_state() -> RotationState {
    RotationState::default()
}

fn with_rotator<R>(state: &RotationState, f: impl FnOnce(&mut SlideRotator) -> R) -> R {
    state
        .rotator
        .with_mut(f)
        .expect("rotator should be initialised")
}

// Given steps

#[given("a hero carousel of {count:usize} slides with image count {images:usize} every {interval:u64} ms")]
fn given_hero_carousel(rotation_state: &RotationState, count: usize, images: usize, interval: u64) {
    let start = Instant::now();
    let quote_requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&quote_requests);
    let rotator = SlideRotator::new(
        slides(count, images),
        true,
        Duration::from_millis(interval),
        start,
    )
    .with_cta_callback(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    rotation_state.start.set(start);
    rotation_state.elapsed_ms.set(0);
    rotation_state.quote_requests.set(quote_requests);
    rotation_state.rotator.set(rotator);
}

// When steps

#[when("{millis:u64} ms elapse")]
fn when_time_elapses(rotation_state: &RotationState, millis: u64) {
    let elapsed = rotation_state
        .elapsed_ms
        .with_ref(|elapsed| *elapsed)
        .unwrap_or(0);
    rotation_state.elapsed_ms.set(elapsed.saturating_add(millis));
    let now = rotation_state.now();
    with_rotator(rotation_state, |rotator| rotator.fire_due(now));
}

#[when("the pointer enters the carousel")]
fn when_pointer_enters(rotation_state: &RotationState) {
    let now = rotation_state.now();
    with_rotator(rotation_state, |rotator| rotator.hold(HoldSource::Pointer, now));
}

#[when("the pointer leaves the carousel")]
fn when_pointer_leaves(rotation_state: &RotationState) {
    let now = rotation_state.now();
    with_rotator(rotation_state, |rotator| {
        rotator.release(HoldSource::Pointer, now);
    });
}

#[when("the carousel gains focus")]
fn when_focus_gained(rotation_state: &RotationState) {
    let now = rotation_state.now();
    with_rotator(rotation_state, |rotator| rotator.hold(HoldSource::Focus, now));
}

#[when("the carousel loses focus")]
fn when_focus_lost(rotation_state: &RotationState) {
    let now = rotation_state.now();
    with_rotator(rotation_state, |rotator| rotator.release(HoldSource::Focus, now));
}

#[when("indicator {index:usize} is chosen")]
fn when_indicator_chosen(rotation_state: &RotationState, index: usize) {
    let now = rotation_state.now();
    let changed = with_rotator(rotation_state, |rotator| rotator.go_to_slide(index, now));
    assert!(changed, "indicator {index} should change the active slide");
}

#[when("the call-to-action is activated")]
fn when_cta_activated(rotation_state: &RotationState) {
    with_rotator(rotation_state, |rotator| rotator.activate_cta());
}

// Then steps

#[then("slide {index:usize} is active")]
fn then_slide_active(rotation_state: &RotationState, index: usize) {
    let active = with_rotator(rotation_state, |rotator| rotator.active_index());
    assert_eq!(active, index);
}

#[then("image {index:usize} is shown")]
fn then_image_shown(rotation_state: &RotationState, index: usize) {
    let inner = with_rotator(rotation_state, |rotator| rotator.inner_index());
    assert_eq!(inner, index);
}

#[then("the live region is off")]
fn then_live_region_off(rotation_state: &RotationState) {
    let live = with_rotator(rotation_state, |rotator| rotator.live_politeness());
    assert_eq!(live, LivePoliteness::Off);
}

#[then("the live region is polite")]
fn then_live_region_polite(rotation_state: &RotationState) {
    let live = with_rotator(rotation_state, |rotator| rotator.live_politeness());
    assert_eq!(live, LivePoliteness::Polite);
}

#[then("the quote flow opened {count:usize} time")]
fn then_quote_flow_opened(rotation_state: &RotationState, count: usize) {
    let opened = rotation_state
        .quote_requests
        .with_ref(|counter| counter.load(Ordering::SeqCst))
        .expect("quote counter should be initialised");
    assert_eq!(opened, count);
}

#[then("the carousel shows the empty alert")]
fn then_empty_alert(rotation_state: &RotationState) {
    let is_alert = with_rotator(rotation_state, |rotator| {
        matches!(
            rotator.view(),
            CarouselView::Empty {
                role: "alert",
                label: "No slides available",
                ..
            }
        )
    });
    assert!(is_alert, "empty carousel should render the alert");
}

#[then("nothing is scheduled")]
fn then_nothing_scheduled(rotation_state: &RotationState) {
    let deadline = with_rotator(rotation_state, |rotator| rotator.next_deadline());
    assert_eq!(deadline, None);
}

// Scenarios

#[scenario(path = "tests/features/slide_rotation.feature", index = 0)]
fn slides_advance_and_wrap(rotation_state: RotationState) {
    let _ = rotation_state;
}

#[scenario(path = "tests/features/slide_rotation.feature", index = 1)]
fn images_cycle_within_slide(rotation_state: RotationState) {
    let _ = rotation_state;
}

#[scenario(path = "tests/features/slide_rotation.feature", index = 2)]
fn hovering_pauses(rotation_state: RotationState) {
    let _ = rotation_state;
}

#[scenario(path = "tests/features/slide_rotation.feature", index = 3)]
fn resumes_after_every_hold_released(rotation_state: RotationState) {
    let _ = rotation_state;
}

#[scenario(path = "tests/features/slide_rotation.feature", index = 4)]
fn indicator_keeps_cadence(rotation_state: RotationState) {
    let _ = rotation_state;
}

#[scenario(path = "tests/features/slide_rotation.feature", index = 5)]
fn cta_opens_quote_flow(rotation_state: RotationState) {
    let _ = rotation_state;
}

#[scenario(path = "tests/features/slide_rotation.feature", index = 6)]
fn empty_carousel_alerts(rotation_state: RotationState) {
    let _ = rotation_state;
}
