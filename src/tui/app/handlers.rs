//! Message handlers for the showcase preview.
//!
//! Interaction messages are translated into hold sources on the engine that
//! owns the targeted region; carousel controls and outbound actions are
//! forwarded to the rotator or the telemetry sink.

use bubbletea_rs::Cmd;
use tokio::time::Instant;

use super::ShowcaseApp;
use crate::hero::{CTA_BUTTON, LEAVE_REVIEW};
use crate::rotation::{HoldSource, prefers_reduced_motion, set_reduced_motion};
use crate::telemetry::TelemetryEvent;
use crate::tui::components::content_width;
use crate::tui::messages::{AppMsg, Region};
use crate::tui::shortcut;

impl ShowcaseApp {
    /// Dispatches focus, pointer, and touch messages.
    pub(super) fn handle_hold_msg(&mut self, msg: &AppMsg, now: Instant) -> Option<Cmd> {
        match msg {
            AppMsg::CycleFocus => self.cycle_focus(now),
            AppMsg::TogglePointer(region) => self.toggle_hold(*region, HoldSource::Pointer, now),
            AppMsg::ToggleTouch(region) => self.toggle_hold(*region, HoldSource::Touch, now),
            _ => {}
        }
        None
    }

    /// Dispatches carousel controls and outbound actions.
    pub(super) fn handle_carousel_msg(&mut self, msg: &AppMsg, now: Instant) -> Option<Cmd> {
        match msg {
            AppMsg::GoToSlide(index) => {
                self.rotator.go_to_slide(*index, now);
            }
            AppMsg::ActivateCta => self.handle_activate_cta(),
            AppMsg::LeaveReview => {
                self.feedback_requests = self.feedback_requests.saturating_add(1);
                self.telemetry.record(TelemetryEvent::FeedbackRequested);
                self.status = Some(format!("{LEAVE_REVIEW}: feedback form opened"));
            }
            AppMsg::ToggleReducedMotion => {
                let enabled = !prefers_reduced_motion();
                set_reduced_motion(enabled);
                let state = if enabled { "on" } else { "off" };
                self.status = Some(format!("Reduced motion {state}"));
            }
            _ => {}
        }
        None
    }

    /// Dispatches scheduling, data, and lifecycle messages.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg, now: Instant) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Wake { deadline } => self.handle_wake(*deadline, now),
            AppMsg::ReviewsLoaded(entries) => {
                self.strip.load(entries.clone(), now);
                self.sync_strip_extents();
            }
            AppMsg::AdminShortcut => self.handle_admin_shortcut(),
            AppMsg::Quit => {
                self.unmount();
                return Some(bubbletea_rs::quit());
            }
            AppMsg::ToggleHelp => self.show_help = !self.show_help,
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.sync_strip_extents();
            }
            _ => {
                // Unreachable: caller filters hold and carousel messages.
            }
        }
        None
    }

    /// Handles the synthetic startup message.
    ///
    /// `Initialized` is a one-shot event; repeats are ignored.
    fn handle_initialized(&mut self) {
        if self.has_initialized {
            return;
        }
        self.has_initialized = true;
        tracing::debug!(
            slides = self.rotator.slide_count(),
            auto_play = self.rotator.auto_play(),
            "showcase preview mounted"
        );
    }

    fn handle_admin_shortcut(&mut self) {
        if !shortcut::trigger() {
            tracing::debug!("admin shortcut pressed without a listener");
            return;
        }
        if let Some(target) = self.location() {
            self.status = Some(format!("Navigated to {target}"));
        }
    }

    fn handle_activate_cta(&mut self) {
        let Some(slide_id) = self.rotator.active_slide().map(|slide| slide.id.clone()) else {
            return;
        };
        self.rotator.activate_cta();
        self.telemetry
            .record(TelemetryEvent::QuoteRequested { slide_id });
        self.status = Some(format!("{CTA_BUTTON}: quote form opened"));
    }

    /// Moves focus Hero -> Reviews -> outside -> Hero, holding whichever
    /// engine owns the focused region.
    fn cycle_focus(&mut self, now: Instant) {
        let next = match self.focus {
            None => Some(Region::Hero),
            Some(Region::Hero) => Some(Region::Reviews),
            Some(Region::Reviews) => None,
        };
        self.focus = next;
        self.rotator
            .set_held(HoldSource::Focus, next == Some(Region::Hero), now);
        self.strip
            .set_held(HoldSource::Focus, next == Some(Region::Reviews), now);
    }

    fn toggle_hold(&mut self, region: Region, source: HoldSource, now: Instant) {
        match region {
            Region::Hero => {
                let held = !self.rotator.is_held_by(source);
                self.rotator.set_held(source, held, now);
            }
            Region::Reviews => {
                let held = !self.strip.is_held_by(source);
                self.strip.set_held(source, held, now);
            }
        }
    }

    /// Re-measures the strip against the current terminal width.
    pub(super) fn sync_strip_extents(&mut self) {
        let content = content_width(self.strip.entries().len());
        let viewport = usize::from(self.width).saturating_sub(1);
        self.strip.set_extents(
            u32::try_from(content).unwrap_or(u32::MAX),
            u32::try_from(viewport).unwrap_or(u32::MAX),
        );
    }
}
