//! Reduced-motion accommodation.
//!
//! The preference is process-wide and read at every transition rather than
//! cached by the engines, so flipping it takes effect on the next advance.
//! It only changes how a transition is presented, never which state the
//! engines move to.

use std::sync::atomic::{AtomicBool, Ordering};

static REDUCED_MOTION: AtomicBool = AtomicBool::new(false);

/// Presentation style of a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Animated change (crossfade or smooth scroll).
    #[default]
    Smooth,
    /// Immediate jump.
    Instant,
}

impl Transition {
    /// Returns the transition to use for a change that would normally
    /// animate, honouring the reduced-motion preference.
    #[must_use]
    pub fn animated() -> Self {
        if prefers_reduced_motion() {
            Self::Instant
        } else {
            Self::Smooth
        }
    }

    /// Returns a short label for rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
        }
    }
}

/// Records the reduced-motion preference for the whole process.
pub fn set_reduced_motion(enabled: bool) {
    REDUCED_MOTION.store(enabled, Ordering::Relaxed);
}

/// Returns the current reduced-motion preference.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    REDUCED_MOTION.load(Ordering::Relaxed)
}
