//! Observable rendering contracts of the rotation engines.
//!
//! These types carry everything a renderer or screen reader consumes:
//! visibility flags, the displayed image, indicator state, and the
//! accessibility roles and live-region politeness.

use crate::reviews::ReviewEntry;

use super::motion::Transition;

/// Live-region politeness advertised to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivePoliteness {
    /// Automatic changes are announced without interrupting.
    Polite,
    /// Announcements are suppressed while the user interacts.
    Off,
}

impl LivePoliteness {
    /// Politeness for the given paused state.
    #[must_use]
    pub const fn for_paused(paused: bool) -> Self {
        if paused { Self::Off } else { Self::Polite }
    }

    /// Returns the attribute value (`polite` or `off`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Off => "off",
        }
    }
}

/// Rendering of one slide within the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFrame<'a> {
    /// Render key.
    pub id: &'a str,
    /// Whether the slide is faded in (true only for the active slide).
    pub visible: bool,
    /// Image reference currently displayed for this slide.
    pub image: &'a str,
    /// Headline, if any.
    pub title: Option<&'a str>,
    /// Kicker, if any.
    pub subtitle: Option<&'a str>,
    /// Body copy, if any.
    pub description: Option<&'a str>,
    /// Visible call-to-action label.
    pub cta_label: &'a str,
    /// Accessible call-to-action label.
    pub cta_accessible_label: &'a str,
}

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Slide index the dot jumps to.
    pub index: usize,
    /// Whether this dot represents the active slide.
    pub selected: bool,
    /// Accessible label, e.g. `Slide 2 of 4`.
    pub label: String,
}

/// Tab list of navigation dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorList {
    /// Accessible label of the tab list.
    pub label: &'static str,
    /// One dot per slide.
    pub dots: Vec<Indicator>,
}

/// Rendering of a carousel that has slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselFrame<'a> {
    /// Landmark role of the carousel container.
    pub role: &'static str,
    /// Accessible label of the container.
    pub label: &'static str,
    /// Role description announced by screen readers.
    pub role_description: &'static str,
    /// Live-region politeness.
    pub live: LivePoliteness,
    /// How the latest slide change is presented.
    pub transition: Transition,
    /// Every slide, in order, with its visibility flag.
    pub slides: Vec<SlideFrame<'a>>,
    /// Navigation dots, present only when there is more than one slide.
    pub indicators: Option<IndicatorList>,
}

impl CarouselFrame<'_> {
    /// Returns the visible slide.
    #[must_use]
    pub fn active_slide(&self) -> Option<&SlideFrame<'_>> {
        self.slides.iter().find(|slide| slide.visible)
    }
}

/// Rendering of the hero carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselView<'a> {
    /// No slides were configured.
    Empty {
        /// Role of the empty-state container.
        role: &'static str,
        /// Accessible label of the empty-state container.
        label: &'static str,
        /// Visible message.
        message: &'static str,
    },
    /// Slides are available.
    Slides(CarouselFrame<'a>),
}

/// Rendering of a review strip that has cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripFrame<'a> {
    /// Cards in display order.
    pub entries: &'a [ReviewEntry],
    /// Current horizontal scroll offset.
    pub offset: u32,
    /// Largest reachable offset.
    pub max_scroll: u32,
    /// How the latest offset change is presented.
    pub transition: Transition,
    /// Whether automatic scrolling is suspended.
    pub paused: bool,
}

/// Rendering of the review strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripView<'a> {
    /// Reviews are still being fetched.
    Loading,
    /// No reviews are available, whether the fetch failed or returned none.
    Empty,
    /// Cards are available.
    Cards(StripFrame<'a>),
}
