//! Scenario state for hero slide rotation BDD tests.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::time::Duration;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use showcase::rotation::{Slide, SlideRotator};
use tokio::time::Instant;

/// State shared across steps in a slide rotation scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct RotationState {
    /// The rotator under test.
    pub(crate) rotator: Slot<SlideRotator>,
    /// Instant the scenario clock started at.
    pub(crate) start: Slot<Instant>,
    /// Milliseconds elapsed on the scenario clock.
    pub(crate) elapsed_ms: Slot<u64>,
    /// Number of times the call-to-action callback ran.
    pub(crate) quote_requests: Slot<Arc<AtomicUsize>>,
}

impl RotationState {
    /// Returns the current scenario time.
    pub(crate) fn now(&self) -> Instant {
        let start = self.start.with_ref(|start| *start).unwrap_or_else(Instant::now);
        let elapsed = self.elapsed_ms.with_ref(|elapsed| *elapsed).unwrap_or(0);
        start + Duration::from_millis(elapsed)
    }
}

/// Builds `count` slides, each with `images` distinct images.
pub(crate) fn slides(count: usize, images: usize) -> Vec<Slide> {
    (0..count)
        .map(|slide| {
            Slide::new(format!("slide-{slide}"))
                .with_images((0..images).map(|image| format!("/images/{slide}-{image}.jpg")))
                .with_title(format!("Slide {slide}"))
        })
        .collect()
}
