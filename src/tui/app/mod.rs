//! Main TUI application model implementing the MVU pattern.
//!
//! This module owns both rotation engines and acts as their host: it maps
//! interaction to hold sources, forwards indicator jumps and call-to-action
//! activations, and multiplexes every engine deadline onto one wakeup
//! command.
//!
//! # Module Structure
//!
//! - `handlers`: Message handlers for interaction and lifecycle events
//! - `scheduling`: Wakeup arming and firing
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use bubbletea_rs::{Cmd, Model};
use tokio::time::Instant;

use super::components::card_step;
use super::input::map_key_to_message;
use super::messages::{AppMsg, Region};
use super::shortcut::{self, ShortcutGuard};
use super::StartupContext;
use crate::hero::INTRO_REVEAL_DELAY;
use crate::reviews::ReviewFeed;
use crate::rotation::{DEFAULT_SCROLL_INTERVAL, ReviewStrip, SlideRotator};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

mod handlers;
mod rendering;
mod scheduling;

/// Main application model for the showcase preview.
pub struct ShowcaseApp {
    /// Hero carousel engine.
    rotator: SlideRotator,
    /// Review strip engine.
    strip: ReviewStrip,
    /// Review data collaborator, used once at mount.
    feed: ReviewFeed,
    /// Sink for outbound action events.
    telemetry: Arc<dyn TelemetrySink>,
    /// Region holding keyboard focus, if any.
    focus: Option<Region>,
    /// When the intro overlay is revealed; `None` once revealed.
    intro_deadline: Option<Instant>,
    /// Deadline of the wakeup currently in flight.
    armed_wakeup: Option<Instant>,
    /// Number of times the quote flow was opened.
    quote_requests: Arc<AtomicUsize>,
    /// Number of times the feedback flow was opened.
    feedback_requests: usize,
    /// Location the admin shortcut navigated to.
    location: Arc<Mutex<Option<String>>>,
    /// Installed admin shortcut; dropped at teardown.
    shortcut: Option<ShortcutGuard>,
    /// Most recent outbound action, shown in the status bar.
    status: Option<String>,
    has_initialized: bool,
    show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
}

impl fmt::Debug for ShowcaseApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowcaseApp")
            .field("rotator", &self.rotator)
            .field("strip", &self.strip)
            .field("focus", &self.focus)
            .field("intro_deadline", &self.intro_deadline)
            .field("armed_wakeup", &self.armed_wakeup)
            .field("status", &self.status)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ShowcaseApp {
    /// Creates the application, arming the hero cadences and the intro
    /// reveal from `now`. Reviews start loading only once the returned
    /// model is mounted by the program.
    #[must_use]
    pub fn new(context: StartupContext, now: Instant) -> Self {
        let quote_requests = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&quote_requests);
        let rotator = SlideRotator::new(
            context.hero.slides,
            context.hero.auto_play,
            context.hero.interval,
            now,
        )
        .with_cta_callback(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let step = u32::try_from(card_step()).unwrap_or(u32::MAX);

        let mut app = Self {
            rotator,
            strip: ReviewStrip::new(step, DEFAULT_SCROLL_INTERVAL),
            feed: context.feed,
            telemetry: context.telemetry,
            focus: None,
            intro_deadline: Some(now + INTRO_REVEAL_DELAY),
            armed_wakeup: None,
            quote_requests,
            feedback_requests: 0,
            location: Arc::new(Mutex::new(None)),
            shortcut: None,
            status: None,
            has_initialized: false,
            show_help: false,
            width: 80,
            height: 24,
        };
        app.sync_strip_extents();
        app
    }

    /// Installs the global admin shortcut for the lifetime of the app.
    pub fn mount(&mut self) {
        let location = Arc::clone(&self.location);
        let telemetry = Arc::clone(&self.telemetry);
        self.shortcut = Some(shortcut::install(Arc::new(move |target: &str| {
            telemetry.record(TelemetryEvent::AdminShortcutUsed);
            *location.lock().unwrap_or_else(PoisonError::into_inner) = Some(target.to_owned());
        })));
    }

    /// Removes the global admin shortcut.
    pub fn unmount(&mut self) {
        self.shortcut = None;
    }

    /// Returns the hero carousel engine.
    #[must_use]
    pub const fn rotator(&self) -> &SlideRotator {
        &self.rotator
    }

    /// Returns the review strip engine.
    #[must_use]
    pub const fn strip(&self) -> &ReviewStrip {
        &self.strip
    }

    /// Returns the region holding keyboard focus.
    #[must_use]
    pub const fn focus(&self) -> Option<Region> {
        self.focus
    }

    /// Returns `true` once the intro overlay has been revealed.
    #[must_use]
    pub const fn intro_visible(&self) -> bool {
        self.intro_deadline.is_none()
    }

    /// Returns how many times the quote flow was opened.
    #[must_use]
    pub fn quote_requests(&self) -> usize {
        self.quote_requests.load(Ordering::SeqCst)
    }

    /// Returns how many times the feedback flow was opened.
    #[must_use]
    pub const fn feedback_requests(&self) -> usize {
        self.feedback_requests
    }

    /// Returns the location the admin shortcut navigated to, if it fired.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the status bar message of the last outbound action.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the deadline of the wakeup currently in flight.
    #[must_use]
    pub const fn armed_wakeup(&self) -> Option<Instant> {
        self.armed_wakeup
    }

    /// Handles a message at the current time.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        self.handle_message_at(msg, Instant::now())
    }

    /// Handles a message as if it arrived at `now`, then arms a wakeup for
    /// the earliest pending deadline when none earlier is in flight.
    ///
    /// This method is the core update function. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message_at(&mut self, msg: &AppMsg, now: Instant) -> Option<Cmd> {
        let cmd = if msg.is_hold() {
            self.handle_hold_msg(msg, now)
        } else if msg.is_carousel() {
            self.handle_carousel_msg(msg, now)
        } else {
            self.handle_lifecycle_msg(msg, now)
        };

        if cmd.is_some() {
            return cmd;
        }
        self.schedule_wakeup()
    }
}

impl Model for ShowcaseApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve startup context from module-level storage
        let mut model = Self::new(super::startup_context(), Instant::now());
        model.mount();

        // Start the one-shot review fetch alongside the startup event that
        // arms the first wakeup.
        let cmd = bubbletea_rs::batch(vec![Self::immediate_init_cmd(), model.fetch_reviews_cmd()]);

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.render()
    }
}

#[cfg(test)]
mod tests;
