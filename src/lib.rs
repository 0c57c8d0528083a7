//! Showcase library crate: the timed rotation engines behind the Eagles
//! Events home page and a terminal preview that hosts them.
//!
//! The library provides a hero carousel that rotates slides and the images
//! within each slide, a review strip that scrolls published reviews, the
//! interaction gate that pauses both, and the review feed that degrades
//! every fetch failure to an empty strip.

pub mod config;
pub mod error;
pub mod hero;
pub mod reviews;
pub mod rotation;
pub mod telemetry;
pub mod tui;

pub use config::ShowcaseConfig;
pub use error::ShowcaseError;
pub use hero::{HeroSettings, home_page_slides};
pub use reviews::{
    HttpReviewGateway, ReviewEntry, ReviewFeed, ReviewFetchError, ReviewGateway, ReviewQuery,
};
pub use rotation::{HoldSource, ReviewStrip, Slide, SlideRotator};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
