//! Compiled-in home page content.
//!
//! The hero slides, headline copy, and review section text of the Eagles
//! Events home page. Nothing here changes at runtime; only the interval and
//! autoplay flag can be overridden by configuration.

use std::time::Duration;

use crate::config::ShowcaseConfig;
use crate::rotation::Slide;

/// Brand shown above the carousel.
pub const BRAND: &str = "Eagles Events";

/// Delay before the hero overlay and call-to-action section are revealed.
pub const INTRO_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Headline of the call-to-action section under the carousel.
pub const CTA_HEADLINE: &str = "Ready to Make Your Event Unforgettable?";

/// Supporting copy of the call-to-action section.
pub const CTA_BODY: &str = "Get a personalized Quotation for your event needs. Our team is ready \
                            to help you create the perfect experience.";

/// Label of the section-level quote button.
pub const CTA_BUTTON: &str = "Get Your Quotation";

/// Heading of the review section.
pub const REVIEWS_HEADING: &str = "What Our Clients Say";

/// Shown while reviews are loading.
pub const REVIEWS_LOADING: &str = "Loading reviews...";

/// Shown when there are no reviews to display.
pub const REVIEWS_EMPTY: &str = "No reviews yet. Be the first to share your experience!";

/// Label of the feedback action under the review strip.
pub const LEAVE_REVIEW: &str = "Leave a Review";

/// Location the admin shortcut navigates to.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

const HIRE_NOW: &str = "Hire now";

/// Hero carousel settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSettings {
    /// Slides in display order.
    pub slides: Vec<Slide>,
    /// Whether the carousel rotates on its own.
    pub auto_play: bool,
    /// Slide interval before clamping.
    pub interval: Duration,
}

impl HeroSettings {
    /// Builds the home page hero with configured timing.
    #[must_use]
    pub fn from_config(config: &ShowcaseConfig) -> Self {
        Self {
            slides: home_page_slides(),
            auto_play: config.auto_play(),
            interval: config.slide_interval(),
        }
    }
}

/// The four service slides of the home page hero.
#[must_use]
pub fn home_page_slides() -> Vec<Slide> {
    vec![
        Slide::new("VIP MOBILE TOILETS")
            .with_image("/images/t1.jpg")
            .with_images(["/images/t1.jpg", "/images/t4.jpg", "/images/t6.webp"])
            .with_title("VIP Mobile Toilets")
            .with_subtitle("Complete Event Solutions")
            .with_description(
                "Premium VIP mobile toilets with luxury amenities. Clean, hygienic, and \
                 comfortable facilities for your special events.",
            )
            .with_cta_text(HIRE_NOW),
        Slide::new("TENTS")
            .with_image("/images/s5.webp")
            .with_images(["/images/s5.webp", "/images/t4.jpg"])
            .with_title("TENTS")
            .with_subtitle("Perfect Hospitality Solutions")
            .with_description(
                "High-quality tents and marquees for all weather protection. Perfect for \
                 weddings, parties, and corporate events.",
            )
            .with_cta_text(HIRE_NOW),
        Slide::new("MOBILE FACILITIES")
            .with_image("/images/t6.webp")
            .with_images(["/images/t6.webp", "/images/t1.jpg"])
            .with_title("Mobile Facilities")
            .with_subtitle("Professional Event Services")
            .with_description(
                "Complete mobile facility solutions including generators, lighting, and \
                 power. Everything you need for successful events.",
            )
            .with_cta_text(HIRE_NOW),
        Slide::new("SLAUGHTERING SERVICES")
            .with_image("/images/sla.jpg")
            .with_images(["/images/sla.jpg", "/images/t4.jpg"])
            .with_title("Slaughtering Services")
            .with_subtitle("Professional & Hygienic")
            .with_description(
                "Professional mobile slaughtering services that bring expert meat \
                 processing to your location. Fully compliant with health standards.",
            )
            .with_cta_text(HIRE_NOW),
    ]
}
