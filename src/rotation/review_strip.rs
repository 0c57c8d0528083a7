//! Auto-scrolling review strip.
//!
//! The strip advances a horizontal scroll offset by a fixed step on a fixed
//! cadence and wraps back to the start once the next step would reach the
//! end of the content.

use std::time::Duration;

use tokio::time::Instant;

use super::cadence::Cadence;
use super::motion::Transition;
use super::pause_gate::{GateChange, HoldSource, PauseGate};
use super::view::{StripFrame, StripView};
use crate::reviews::ReviewEntry;

/// Distance scrolled per tick: one card width plus the gap between cards.
pub const DEFAULT_SCROLL_STEP: u32 = 320;

/// Period between automatic scroll ticks.
pub const DEFAULT_SCROLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Slack subtracted from `max_scroll` when deciding whether to wrap, so a
/// rounding error of one unit never strands the strip just short of the end.
pub const WRAP_TOLERANCE: u32 = 1;

/// Lifecycle phase of the strip's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripPhase {
    /// Entries have not arrived yet.
    Loading,
    /// The load finished with no entries (or failed).
    Empty,
    /// Entries are available and may scroll.
    Ready,
}

/// Horizontally auto-scrolling list of review cards.
#[derive(Debug)]
pub struct ReviewStrip {
    entries: Vec<ReviewEntry>,
    phase: StripPhase,
    offset: u32,
    content_extent: u32,
    viewport_extent: u32,
    step: u32,
    gate: PauseGate,
    cadence: Cadence,
    transition: Transition,
}

impl Default for ReviewStrip {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_STEP, DEFAULT_SCROLL_INTERVAL)
    }
}

impl ReviewStrip {
    /// Creates a strip in the loading phase. Nothing is scheduled until
    /// entries are loaded.
    #[must_use]
    pub fn new(step: u32, interval: Duration) -> Self {
        Self {
            entries: Vec::new(),
            phase: StripPhase::Loading,
            offset: 0,
            content_extent: 0,
            viewport_extent: 0,
            step,
            gate: PauseGate::new(),
            cadence: Cadence::new(interval),
            transition: Transition::animated(),
        }
    }

    /// Installs fetched entries, resetting the offset.
    ///
    /// An empty list moves the strip to [`StripPhase::Empty`], which never
    /// schedules.
    pub fn load(&mut self, entries: Vec<ReviewEntry>, now: Instant) {
        self.phase = if entries.is_empty() {
            StripPhase::Empty
        } else {
            StripPhase::Ready
        };
        self.entries = entries;
        self.offset = 0;
        self.rearm(now);
        tracing::debug!(
            entries = self.entries.len(),
            phase = ?self.phase,
            "review strip loaded"
        );
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> StripPhase {
        self.phase
    }

    /// Returns the loaded entries.
    #[must_use]
    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the scroll step.
    #[must_use]
    pub const fn step(&self) -> u32 {
        self.step
    }

    /// Largest reachable offset: content extent minus viewport extent,
    /// never negative.
    #[must_use]
    pub const fn max_scroll(&self) -> u32 {
        self.content_extent.saturating_sub(self.viewport_extent)
    }

    /// Returns `true` while any hold source pauses the strip.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Returns `true` when `source` currently holds the strip.
    #[must_use]
    pub fn is_held_by(&self, source: HoldSource) -> bool {
        self.gate.is_held_by(source)
    }

    /// Returns the transition used by the latest offset change.
    #[must_use]
    pub const fn transition(&self) -> Transition {
        self.transition
    }

    /// Earliest pending deadline.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.cadence.deadline()
    }

    /// Records measured extents and clamps the offset into the new range.
    pub fn set_extents(&mut self, content: u32, viewport: u32) {
        self.content_extent = content;
        self.viewport_extent = viewport;
        self.offset = self.offset.min(self.max_scroll());
    }

    /// Moves the strip to `offset` (clamped to `max_scroll`), as a manual
    /// scroll would. The cadence is unaffected.
    pub fn scroll_to(&mut self, offset: u32) {
        self.offset = offset.min(self.max_scroll());
        self.transition = Transition::Instant;
    }

    /// Advances the offset by one step, wrapping to zero once the next step
    /// would reach the end. A no-op while paused or not ready.
    pub fn tick(&mut self) {
        if self.phase != StripPhase::Ready || self.is_paused() {
            return;
        }

        let next = self.offset.saturating_add(self.step);
        if next >= self.max_scroll().saturating_sub(WRAP_TOLERANCE) {
            self.offset = 0;
            self.transition = Transition::Instant;
        } else {
            self.offset = next;
            self.transition = Transition::animated();
        }
    }

    /// Adds a hold from `source`.
    pub fn hold(&mut self, source: HoldSource, now: Instant) {
        let change = self.gate.hold(source);
        self.apply_gate_change(change, now);
    }

    /// Releases the hold from `source`.
    pub fn release(&mut self, source: HoldSource, now: Instant) {
        let change = self.gate.release(source);
        self.apply_gate_change(change, now);
    }

    /// Holds or releases `source`.
    pub fn set_held(&mut self, source: HoldSource, held: bool, now: Instant) {
        let change = self.gate.set_held(source, held);
        self.apply_gate_change(change, now);
    }

    /// Runs every tick that is due at `now`. Returns the number of ticks.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = 0_usize;
        while self.cadence.fire(now) {
            self.tick();
            fired = fired.saturating_add(1);
        }
        fired
    }

    /// Builds the observable rendering of the strip.
    #[must_use]
    pub fn view(&self) -> StripView<'_> {
        match self.phase {
            StripPhase::Loading => StripView::Loading,
            StripPhase::Empty => StripView::Empty,
            StripPhase::Ready => StripView::Cards(StripFrame {
                entries: &self.entries,
                offset: self.offset,
                max_scroll: self.max_scroll(),
                transition: self.transition,
                paused: self.is_paused(),
            }),
        }
    }

    fn rearm(&mut self, now: Instant) {
        if self.phase == StripPhase::Ready && !self.gate.is_paused() {
            self.cadence.arm(now);
        } else {
            self.cadence.disarm();
        }
    }

    fn apply_gate_change(&mut self, change: GateChange, now: Instant) {
        match change {
            GateChange::Paused => self.cadence.disarm(),
            GateChange::Resumed => self.rearm(now),
            GateChange::Unchanged => {}
        }
    }
}
