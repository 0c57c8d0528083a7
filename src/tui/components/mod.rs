//! UI components for the showcase preview.
//!
//! Components are stateless renderers: each takes a view context built from
//! an engine's observable view and produces newline-terminated lines.

mod hero_carousel;
mod review_strip;
mod text_layout;

pub(crate) use text_layout::clip_to_width;

pub use hero_carousel::{HeroCarouselComponent, HeroViewContext};
pub use review_strip::{
    CARD_GAP, CARD_WIDTH, ReviewStripComponent, StripViewContext, card_step, content_width,
};
