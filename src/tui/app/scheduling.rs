//! Wakeup multiplexing for the rotation engines.
//!
//! bubbletea-rs runs one command per update, so every pending deadline is
//! served by a single sleeping command armed for the earliest of them. A
//! wakeup that elapses after its deadline moved is harmless: firing only
//! runs what is due and the next update re-arms.

use std::any::Any;

use bubbletea_rs::Cmd;
use tokio::time::Instant;

use super::ShowcaseApp;
use crate::rotation::cadence::earliest;
use crate::tui::messages::AppMsg;

impl ShowcaseApp {
    /// Earliest deadline across the rotator, the strip, and the intro
    /// reveal.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let engines = earliest(self.rotator.next_deadline(), self.strip.next_deadline());
        earliest(engines, self.intro_deadline)
    }

    /// Fires everything due at `now` and returns the number of fires.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = self.rotator.fire_due(now);
        fired = fired.saturating_add(self.strip.fire_due(now));
        if self.intro_deadline.is_some_and(|deadline| deadline <= now) {
            self.intro_deadline = None;
            fired = fired.saturating_add(1);
        }
        fired
    }

    pub(super) fn handle_wake(&mut self, deadline: Instant, now: Instant) {
        if self.armed_wakeup == Some(deadline) {
            self.armed_wakeup = None;
        }
        let fired = self.fire_due(now);
        tracing::trace!(fired, "wakeup elapsed");
    }

    /// Arms a wakeup for the earliest deadline unless one at or before it
    /// is already in flight.
    pub(super) fn schedule_wakeup(&mut self) -> Option<Cmd> {
        let deadline = self.next_deadline()?;
        if self.armed_wakeup.is_some_and(|armed| armed <= deadline) {
            return None;
        }
        self.armed_wakeup = Some(deadline);
        Some(Self::wakeup_cmd(deadline))
    }

    /// Creates a command that emits `Wake` once `deadline` elapses.
    pub(super) fn wakeup_cmd(deadline: Instant) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep_until(deadline).await;
            Some(Box::new(AppMsg::Wake { deadline }) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first update, which arms
    /// the first wakeup.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Creates the one-shot review fetch. Failures arrive as an empty list.
    pub(super) fn fetch_reviews_cmd(&self) -> Cmd {
        let feed = self.feed.clone();
        Box::pin(async move {
            let entries = feed.load().await;
            Some(Box::new(AppMsg::ReviewsLoaded(entries)) as Box<dyn Any + Send>)
        })
    }
}
