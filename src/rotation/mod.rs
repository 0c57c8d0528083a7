//! Timed rotation engines.
//!
//! Two auto-advancing presentation engines share one set of primitives:
//!
//! - [`SlideRotator`] walks a hero carousel through its slides and, within
//!   the active slide, through that slide's images.
//! - [`ReviewStrip`] scrolls a horizontal list of review cards by a fixed
//!   step and wraps at the end.
//!
//! Both are driven by their host: they never sleep or spawn. The host asks
//! for [`SlideRotator::next_deadline`] and [`ReviewStrip::next_deadline`],
//! waits until the earliest one, and calls `fire_due(now)`. Interaction
//! holds go through a [`PauseGate`].

pub mod cadence;
pub mod motion;
pub mod pause_gate;
pub mod review_strip;
pub mod slide;
pub mod slide_rotator;
pub mod view;

pub use cadence::{Cadence, MIN_INTERVAL};
pub use motion::{Transition, prefers_reduced_motion, set_reduced_motion};
pub use pause_gate::{GateChange, HoldSource, PauseGate};
pub use review_strip::{DEFAULT_SCROLL_INTERVAL, DEFAULT_SCROLL_STEP, ReviewStrip, StripPhase};
pub use slide::{PLACEHOLDER_IMAGE, Slide};
pub use slide_rotator::{CtaCallback, SlideRotator};
pub use view::{
    CarouselFrame, CarouselView, Indicator, IndicatorList, LivePoliteness, SlideFrame, StripFrame,
    StripView,
};
