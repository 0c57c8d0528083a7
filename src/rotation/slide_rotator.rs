//! Hero carousel state machine.
//!
//! The rotator advances through a fixed list of slides on an outer cadence
//! and, independently, through the images of the active slide on an inner
//! cadence. The inner cadence is a subordinate timer: it is re-armed as an
//! effect of every active-slide change and only armed while the active slide
//! has more than one image.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use super::cadence::{Cadence, clamp_interval, earliest, inner_period};
use super::motion::Transition;
use super::pause_gate::{GateChange, HoldSource, PauseGate};
use super::slide::Slide;
use super::view::{
    CarouselFrame, CarouselView, Indicator, IndicatorList, LivePoliteness, SlideFrame,
};

/// Callback invoked when the user activates a slide's call-to-action.
pub type CtaCallback = Arc<dyn Fn() + Send + Sync>;

/// Auto-advancing slide carousel with nested image rotation.
pub struct SlideRotator {
    slides: Vec<Slide>,
    auto_play: bool,
    active_index: usize,
    inner_index: usize,
    gate: PauseGate,
    outer: Cadence,
    inner: Cadence,
    transition: Transition,
    on_cta: Option<CtaCallback>,
}

impl fmt::Debug for SlideRotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideRotator")
            .field("slides", &self.slides.len())
            .field("auto_play", &self.auto_play)
            .field("active_index", &self.active_index)
            .field("inner_index", &self.inner_index)
            .field("gate", &self.gate)
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("has_cta_callback", &self.on_cta.is_some())
            .finish()
    }
}

impl SlideRotator {
    /// Creates a rotator showing the first slide and, when `auto_play` is
    /// set and there are slides, arms its cadences from `now`.
    ///
    /// An empty slide list is valid: the rotator renders its empty state
    /// and never schedules anything.
    #[must_use]
    pub fn new(slides: Vec<Slide>, auto_play: bool, interval: Duration, now: Instant) -> Self {
        let period = clamp_interval(interval);
        let mut rotator = Self {
            slides,
            auto_play,
            active_index: 0,
            inner_index: 0,
            gate: PauseGate::new(),
            outer: Cadence::new(period),
            inner: Cadence::new(inner_period(period)),
            transition: Transition::animated(),
            on_cta: None,
        };
        rotator.rearm_all(now);
        rotator
    }

    /// Installs the call-to-action callback.
    #[must_use]
    pub fn with_cta_callback(mut self, callback: CtaCallback) -> Self {
        self.on_cta = Some(callback);
        self
    }

    /// Returns the configured slides.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Returns the index of the active slide.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the image index within the active slide.
    #[must_use]
    pub const fn inner_index(&self) -> usize {
        self.inner_index
    }

    /// Returns the active slide, if any.
    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.active_index)
    }

    /// Returns the image count of the active slide, read at call time.
    #[must_use]
    pub fn active_image_count(&self) -> usize {
        self.active_slide().map_or(0, Slide::image_count)
    }

    /// Returns `true` while any hold source pauses the rotator.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Returns `true` when `source` currently holds the rotator.
    #[must_use]
    pub fn is_held_by(&self, source: HoldSource) -> bool {
        self.gate.is_held_by(source)
    }

    /// Returns whether automatic advancement is enabled.
    #[must_use]
    pub const fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Returns the (clamped) slide interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.outer.period()
    }

    /// Returns the inner-image period.
    #[must_use]
    pub const fn inner_interval(&self) -> Duration {
        self.inner.period()
    }

    /// Next deadline of the slide cadence.
    #[must_use]
    pub const fn outer_deadline(&self) -> Option<Instant> {
        self.outer.deadline()
    }

    /// Next deadline of the inner-image cadence.
    #[must_use]
    pub const fn inner_deadline(&self) -> Option<Instant> {
        self.inner.deadline()
    }

    /// Earliest pending deadline across both cadences.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(self.outer.deadline(), self.inner.deadline())
    }

    /// Moves to the next slide, wrapping to the first after the last, and
    /// resets the image index for the new slide.
    pub fn advance_slide(&mut self, now: Instant) {
        let Some(next) = self
            .active_index
            .checked_add(1)
            .and_then(|index| index.checked_rem(self.slides.len()))
        else {
            return;
        };
        self.change_active(next, now);
    }

    /// Moves to the next image of the active slide.
    ///
    /// The image count is read from the current active slide, so this never
    /// wraps against a previous slide's count. A no-op for slides with one
    /// image or none.
    pub fn advance_inner_image(&mut self) {
        let count = self.active_image_count();
        if count <= 1 {
            return;
        }
        self.inner_index = self
            .inner_index
            .checked_add(1)
            .and_then(|index| index.checked_rem(count))
            .unwrap_or(0);
    }

    /// Jumps to `index` without touching the slide cadence, so the next
    /// automatic advance still lands on its original schedule.
    ///
    /// Returns `false` when `index` is out of range or already active.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.slides.len() || index == self.active_index {
            return false;
        }
        self.change_active(index, now);
        true
    }

    /// Adds a hold from `source`, suspending both cadences when the
    /// rotator becomes paused.
    pub fn hold(&mut self, source: HoldSource, now: Instant) {
        let change = self.gate.hold(source);
        self.apply_gate_change(change, now);
    }

    /// Releases the hold from `source`, resuming both cadences from `now`
    /// once no other source holds the rotator.
    pub fn release(&mut self, source: HoldSource, now: Instant) {
        let change = self.gate.release(source);
        self.apply_gate_change(change, now);
    }

    /// Holds or releases `source`.
    pub fn set_held(&mut self, source: HoldSource, held: bool, now: Instant) {
        let change = self.gate.set_held(source, held);
        self.apply_gate_change(change, now);
    }

    /// Enables or disables automatic advancement.
    pub fn set_auto_play(&mut self, enabled: bool, now: Instant) {
        if self.auto_play == enabled {
            return;
        }
        self.auto_play = enabled;
        self.rearm_all(now);
    }

    /// Fires every cadence that is due at `now`, earliest first, with the
    /// slide cadence winning ties. Returns the number of fires.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = 0_usize;
        loop {
            let outer_due = self.outer.deadline().filter(|deadline| *deadline <= now);
            let inner_due = self.inner.deadline().filter(|deadline| *deadline <= now);
            match (outer_due, inner_due) {
                (Some(outer), Some(inner)) if inner < outer => self.fire_inner(now),
                (Some(_), _) => self.fire_outer(now),
                (None, Some(_)) => self.fire_inner(now),
                (None, None) => break,
            }
            fired = fired.saturating_add(1);
        }
        fired
    }

    /// Invokes the call-to-action callback once.
    pub fn activate_cta(&self) {
        if let Some(callback) = &self.on_cta {
            callback();
        }
    }

    /// Returns the live-region politeness for the current paused state.
    #[must_use]
    pub fn live_politeness(&self) -> LivePoliteness {
        LivePoliteness::for_paused(self.is_paused())
    }

    /// Builds the observable rendering of the carousel.
    #[must_use]
    pub fn view(&self) -> CarouselView<'_> {
        if self.slides.is_empty() {
            return CarouselView::Empty {
                role: "alert",
                label: "No slides available",
                message: "No images available",
            };
        }

        let slides = self
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let visible = index == self.active_index;
                let inner = if visible { self.inner_index } else { 0 };
                SlideFrame {
                    id: slide.id.as_str(),
                    visible,
                    image: slide.image_at(inner),
                    title: slide.title.as_deref(),
                    subtitle: slide.subtitle.as_deref(),
                    description: slide.description.as_deref(),
                    cta_label: slide.cta_label(),
                    cta_accessible_label: slide.cta_accessible_label(),
                }
            })
            .collect();

        CarouselView::Slides(CarouselFrame {
            role: "region",
            label: "Image carousel",
            role_description: "carousel",
            live: self.live_politeness(),
            transition: self.transition,
            slides,
            indicators: self.indicators(),
        })
    }

    fn indicators(&self) -> Option<IndicatorList> {
        let total = self.slides.len();
        if total <= 1 {
            return None;
        }
        let dots = (0..total)
            .map(|index| Indicator {
                index,
                selected: index == self.active_index,
                label: format!("Slide {} of {total}", index.saturating_add(1)),
            })
            .collect();
        Some(IndicatorList {
            label: "Slide navigation",
            dots,
        })
    }

    fn fire_outer(&mut self, now: Instant) {
        self.outer.fire(now);
        self.advance_slide(now);
    }

    fn fire_inner(&mut self, now: Instant) {
        self.inner.fire(now);
        self.advance_inner_image();
    }

    /// Applies an active-slide change: the image index resets in the same
    /// step and the inner cadence is re-armed for the new slide.
    fn change_active(&mut self, index: usize, now: Instant) {
        self.active_index = index;
        self.inner_index = 0;
        self.transition = Transition::animated();
        self.rearm_inner(now);
        tracing::trace!(active_index = index, "hero slide changed");
    }

    fn is_scheduling(&self) -> bool {
        self.auto_play && !self.slides.is_empty() && !self.gate.is_paused()
    }

    fn rearm_inner(&mut self, now: Instant) {
        if self.is_scheduling() && self.active_image_count() > 1 {
            self.inner.arm(now);
        } else {
            self.inner.disarm();
        }
    }

    fn rearm_all(&mut self, now: Instant) {
        if self.is_scheduling() {
            self.outer.arm(now);
        } else {
            self.outer.disarm();
        }
        self.rearm_inner(now);
    }

    fn apply_gate_change(&mut self, change: GateChange, now: Instant) {
        match change {
            GateChange::Paused => {
                self.outer.disarm();
                self.inner.disarm();
            }
            GateChange::Resumed => self.rearm_all(now),
            GateChange::Unchanged => {}
        }
    }
}

#[cfg(test)]
#[path = "slide_rotator_tests.rs"]
mod tests;
