//! Terminal preview of the home page hero and review strip.
//!
//! This module hosts both rotation engines in an interactive terminal
//! application built on the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ShowcaseApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! The engines never sleep. After every update the application arms a
//! single wakeup for the earliest deadline across both engines and the
//! intro reveal, and lets the engines fire whatever is due when it elapses.
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`components`]: Hero and review strip renderers
//! - [`input`]: Key-to-message mapping for input handling
//! - [`shortcut`]: The global admin shortcut
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the hero settings and review feed are passed through
//! module-level storage. Call [`set_startup_context`] before starting the
//! program, and `ShowcaseApp::init()` will retrieve them.

use std::sync::{Arc, OnceLock};

use crate::config::ShowcaseConfig;
use crate::hero::HeroSettings;
use crate::reviews::ReviewFeed;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod shortcut;

pub use app::ShowcaseApp;

/// Global storage for the startup context.
///
/// This is set before the TUI program starts and read by `ShowcaseApp::init()`.
static STARTUP_CONTEXT: OnceLock<StartupContext> = OnceLock::new();

/// Everything the preview needs at mount.
#[derive(Clone)]
pub struct StartupContext {
    /// Hero slides and timing.
    pub hero: HeroSettings,
    /// Review data collaborator.
    pub feed: ReviewFeed,
    /// Sink for outbound action events.
    pub telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for StartupContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartupContext")
            .field("hero", &self.hero)
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}

impl Default for StartupContext {
    fn default() -> Self {
        Self {
            hero: HeroSettings::from_config(&ShowcaseConfig::default()),
            feed: ReviewFeed::unconfigured(),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }
}

/// Sets the startup context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_startup_context(context: StartupContext) -> bool {
    STARTUP_CONTEXT.set(context).is_ok()
}

/// Gets a clone of the startup context, or the defaults when none was set.
pub(crate) fn startup_context() -> StartupContext {
    STARTUP_CONTEXT.get().cloned().unwrap_or_default()
}
