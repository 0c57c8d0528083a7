//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use tokio::time::Instant;

use crate::reviews::ReviewEntry;

/// Interactive region of the home page preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The hero image carousel.
    Hero,
    /// The review strip.
    Reviews,
}

/// Messages for the showcase preview application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Carousel interaction
    /// Jump to the slide at this index (an indicator dot was chosen).
    GoToSlide(usize),
    /// Activate the active slide's call-to-action.
    ActivateCta,
    /// Open the feedback flow from the review section.
    LeaveReview,

    // Hold sources
    /// Move keyboard focus to the next region (or out of the page).
    CycleFocus,
    /// Toggle the pointer hovering over a region.
    TogglePointer(Region),
    /// Toggle a touch held down on a region.
    ToggleTouch(Region),
    /// Flip the process-wide reduced-motion preference.
    ToggleReducedMotion,

    // Scheduling and data
    /// Startup event emitted once after mount.
    Initialized,
    /// The host wakeup armed for `deadline` elapsed.
    Wake {
        /// Deadline the wakeup was armed for.
        deadline: Instant,
    },
    /// The review fetch finished (failures arrive as an empty list).
    ReviewsLoaded(Vec<ReviewEntry>),

    // Application lifecycle
    /// The global admin shortcut was pressed.
    AdminShortcut,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for messages that add or remove an interaction hold.
    #[must_use]
    pub const fn is_hold(&self) -> bool {
        matches!(
            self,
            Self::CycleFocus | Self::TogglePointer(_) | Self::ToggleTouch(_)
        )
    }

    /// Returns `true` for messages produced by the carousel controls.
    #[must_use]
    pub const fn is_carousel(&self) -> bool {
        matches!(
            self,
            Self::GoToSlide(_) | Self::ActivateCta | Self::LeaveReview | Self::ToggleReducedMotion
        )
    }
}
