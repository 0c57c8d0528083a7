//! Unit tests for the showcase preview model.

use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};
use tokio::time::Instant;

use super::ShowcaseApp;
use crate::hero::{BRAND, HeroSettings, REVIEWS_LOADING, home_page_slides};
use crate::reviews::{ReviewEntry, ReviewFeed, ReviewSource};
use crate::rotation::StripPhase;
use crate::telemetry::TelemetryEvent;
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::tui::StartupContext;
use crate::tui::messages::{AppMsg, Region};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn context(interval: Duration, telemetry: Arc<RecordingTelemetrySink>) -> StartupContext {
    StartupContext {
        hero: HeroSettings {
            slides: home_page_slides(),
            auto_play: true,
            interval,
        },
        feed: ReviewFeed::unconfigured(),
        telemetry,
    }
}

fn entries(count: usize) -> Vec<ReviewEntry> {
    (0..count)
        .map(|index| ReviewEntry {
            name: format!("Client {index}"),
            source: ReviewSource::Website,
            rating: 5,
            text: "Wonderful tents and friendly staff".to_owned(),
            date: None,
        })
        .collect()
}

struct Harness {
    app: ShowcaseApp,
    sink: Arc<RecordingTelemetrySink>,
    start: Instant,
}

#[fixture]
fn harness() -> Harness {
    let sink = Arc::new(RecordingTelemetrySink::default());
    let start = Instant::now();
    let app = ShowcaseApp::new(context(ms(6000), Arc::clone(&sink)), start);
    Harness { app, sink, start }
}

#[rstest]
fn initialized_arms_the_intro_reveal(mut harness: Harness) {
    let start = harness.start;

    let cmd = harness.app.handle_message_at(&AppMsg::Initialized, start);

    assert!(cmd.is_some());
    assert_eq!(harness.app.armed_wakeup(), Some(start + ms(300)));
    assert!(!harness.app.intro_visible());
}

#[rstest]
fn later_deadlines_do_not_rearm(mut harness: Harness) {
    let start = harness.start;
    harness.app.handle_message_at(&AppMsg::Initialized, start);

    let cmd = harness.app.handle_message_at(&AppMsg::ToggleHelp, start + ms(10));

    assert!(cmd.is_none());
    assert_eq!(harness.app.armed_wakeup(), Some(start + ms(300)));
}

#[rstest]
fn wake_reveals_intro_and_arms_inner_image(mut harness: Harness) {
    let start = harness.start;
    let reveal = start + ms(300);
    harness.app.handle_message_at(&AppMsg::Initialized, start);

    let cmd = harness
        .app
        .handle_message_at(&AppMsg::Wake { deadline: reveal }, reveal);

    assert!(cmd.is_some());
    assert!(harness.app.intro_visible());
    assert_eq!(harness.app.armed_wakeup(), Some(start + ms(3000)));
}

#[rstest]
fn wake_fires_due_engine_ticks(mut harness: Harness) {
    let start = harness.start;
    let inner = start + ms(3000);
    harness.app.handle_message_at(&AppMsg::Initialized, start);
    harness
        .app
        .handle_message_at(&AppMsg::Wake { deadline: start + ms(300) }, start + ms(300));

    harness
        .app
        .handle_message_at(&AppMsg::Wake { deadline: inner }, inner);

    assert_eq!(harness.app.rotator().active_index(), 0);
    assert_eq!(harness.app.rotator().inner_index(), 1);
    assert_eq!(harness.app.armed_wakeup(), Some(start + ms(6000)));
}

#[rstest]
fn stale_wake_keeps_the_armed_wakeup(mut harness: Harness) {
    let start = harness.start;
    harness.app.handle_message_at(&AppMsg::Initialized, start);

    let cmd = harness.app.handle_message_at(
        &AppMsg::Wake {
            deadline: start + ms(100),
        },
        start + ms(100),
    );

    assert!(cmd.is_none());
    assert!(!harness.app.intro_visible());
    assert_eq!(harness.app.armed_wakeup(), Some(start + ms(300)));
}

#[rstest]
fn wake_after_pause_fires_nothing_and_rearms_after_resume(mut harness: Harness) {
    let start = harness.start;
    let reveal = start + ms(300);
    harness.app.handle_message_at(&AppMsg::Initialized, start);
    harness
        .app
        .handle_message_at(&AppMsg::Wake { deadline: reveal }, reveal);
    harness
        .app
        .handle_message_at(&AppMsg::TogglePointer(Region::Hero), start + ms(500));
    harness
        .app
        .handle_message_at(&AppMsg::TogglePointer(Region::Hero), start + ms(1000));

    let cmd = harness.app.handle_message_at(
        &AppMsg::Wake {
            deadline: start + ms(3000),
        },
        start + ms(3000),
    );

    assert!(cmd.is_some());
    assert_eq!(harness.app.rotator().inner_index(), 0);
    assert_eq!(harness.app.armed_wakeup(), Some(start + ms(4000)));
}

#[rstest]
fn earlier_deadline_replaces_armed_wakeup() {
    let sink = Arc::new(RecordingTelemetrySink::default());
    let start = Instant::now();
    let mut app = ShowcaseApp::new(context(ms(2000), sink), start);
    app.handle_message_at(&AppMsg::TogglePointer(Region::Hero), start);
    let reveal = start + ms(300);
    app.handle_message_at(&AppMsg::Wake { deadline: reveal }, reveal);
    app.handle_message_at(&AppMsg::ReviewsLoaded(entries(5)), reveal);
    assert_eq!(app.armed_wakeup(), Some(start + ms(3300)));

    let cmd = app.handle_message_at(&AppMsg::TogglePointer(Region::Hero), start + ms(400));

    assert!(cmd.is_some());
    assert_eq!(app.armed_wakeup(), Some(start + ms(2400)));
}

#[rstest]
fn focus_cycles_between_regions(mut harness: Harness) {
    let start = harness.start;
    harness
        .app
        .handle_message_at(&AppMsg::ReviewsLoaded(entries(5)), start);

    harness.app.handle_message_at(&AppMsg::CycleFocus, start);
    assert_eq!(harness.app.focus(), Some(Region::Hero));
    assert!(harness.app.rotator().is_paused());
    assert!(!harness.app.strip().is_paused());

    harness.app.handle_message_at(&AppMsg::CycleFocus, start);
    assert_eq!(harness.app.focus(), Some(Region::Reviews));
    assert!(!harness.app.rotator().is_paused());
    assert!(harness.app.strip().is_paused());

    harness.app.handle_message_at(&AppMsg::CycleFocus, start);
    assert_eq!(harness.app.focus(), None);
    assert!(!harness.app.strip().is_paused());
}

#[rstest]
fn pointer_and_touch_holds_overlap(mut harness: Harness) {
    let start = harness.start;
    harness
        .app
        .handle_message_at(&AppMsg::TogglePointer(Region::Hero), start);
    harness
        .app
        .handle_message_at(&AppMsg::ToggleTouch(Region::Hero), start);

    harness
        .app
        .handle_message_at(&AppMsg::TogglePointer(Region::Hero), start);

    assert!(harness.app.rotator().is_paused());
}

#[rstest]
fn indicator_jump_keeps_slide_cadence(mut harness: Harness) {
    let start = harness.start;
    let outer = harness.app.rotator().outer_deadline();

    harness
        .app
        .handle_message_at(&AppMsg::GoToSlide(2), start + ms(1000));

    assert_eq!(harness.app.rotator().active_index(), 2);
    assert_eq!(harness.app.rotator().outer_deadline(), outer);
}

#[rstest]
fn cta_opens_quote_flow_once(mut harness: Harness) {
    let start = harness.start;

    harness.app.handle_message_at(&AppMsg::ActivateCta, start);

    assert_eq!(harness.app.quote_requests(), 1);
    assert_eq!(
        harness.sink.events(),
        vec![TelemetryEvent::QuoteRequested {
            slide_id: "VIP MOBILE TOILETS".to_owned()
        }]
    );
    assert!(harness.app.status().is_some());
}

#[rstest]
fn leave_review_opens_feedback_flow(mut harness: Harness) {
    let start = harness.start;

    harness.app.handle_message_at(&AppMsg::LeaveReview, start);

    assert_eq!(harness.sink.events(), vec![TelemetryEvent::FeedbackRequested]);
    assert_eq!(harness.app.feedback_requests(), 1);
    assert_eq!(harness.app.quote_requests(), 0);
}

#[rstest]
fn empty_reviews_leave_the_strip_idle(mut harness: Harness) {
    let start = harness.start;

    harness
        .app
        .handle_message_at(&AppMsg::ReviewsLoaded(Vec::new()), start);

    assert_eq!(harness.app.strip().phase(), StripPhase::Empty);
    assert_eq!(harness.app.strip().next_deadline(), None);
}

#[rstest]
fn loaded_reviews_are_measured_against_the_terminal(mut harness: Harness) {
    let start = harness.start;

    harness
        .app
        .handle_message_at(&AppMsg::ReviewsLoaded(entries(3)), start);
    assert_eq!(harness.app.strip().max_scroll(), 94 - 79);

    harness.app.handle_message_at(
        &AppMsg::WindowResized {
            width: 41,
            height: 30,
        },
        start,
    );

    assert_eq!(harness.app.strip().max_scroll(), 94 - 40);
    assert_eq!(harness.app.strip().next_deadline(), Some(start + ms(3000)));
}

#[rstest]
fn view_reveals_brand_after_intro(mut harness: Harness) {
    let start = harness.start;
    let before = harness.app.render();
    assert!(!before.contains(BRAND));
    assert!(before.contains(REVIEWS_LOADING));

    harness.app.fire_due(start + ms(300));

    let after = harness.app.render();
    assert!(after.contains(BRAND));
    assert!(after.contains("Slide 1 of 4"));
}

#[rstest]
fn view_fills_the_terminal(harness: Harness) {
    let output = harness.app.render();

    assert_eq!(output.lines().count(), 24);
    assert!(output.lines().all(|line| line.chars().count() == 79));
}

#[rstest]
fn help_overlay_toggles(mut harness: Harness) {
    let start = harness.start;

    harness.app.handle_message_at(&AppMsg::ToggleHelp, start);

    assert!(harness.app.render().contains("Keyboard shortcuts"));
}

#[rstest]
fn quit_returns_a_command(mut harness: Harness) {
    let start = harness.start;

    let cmd = harness.app.handle_message_at(&AppMsg::Quit, start);

    assert!(cmd.is_some());
}
