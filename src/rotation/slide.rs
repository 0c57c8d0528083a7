//! Slide content model for the hero carousel.

use serde::{Deserialize, Serialize};

/// Image shown when a slide resolves no images at all.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Call-to-action label used when a slide has no `cta_text`.
pub const DEFAULT_CTA_LABEL: &str = "Get Started";

/// Accessible label of the call-to-action when a slide has no `cta_text`.
pub const DEFAULT_CTA_ACCESSIBLE_LABEL: &str = "Get a quote";

/// One rotating panel of the hero carousel.
///
/// Slides are built once from static configuration and never mutated by the
/// rotator; only the active slide and image indices change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    /// Stable identifier, used as render key.
    pub id: String,
    /// Ordered image references rotated while the slide is active.
    pub images: Vec<String>,
    /// Legacy single image used when `images` is empty.
    pub image: Option<String>,
    /// Headline.
    pub title: Option<String>,
    /// Kicker shown above the headline.
    pub subtitle: Option<String>,
    /// Body copy.
    pub description: Option<String>,
    /// Call-to-action label.
    pub cta_text: Option<String>,
}

impl Slide {
    /// Creates a slide with an identifier and no content.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the image set.
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the legacy single image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the headline.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the kicker.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the body copy.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the call-to-action label.
    #[must_use]
    pub fn with_cta_text(mut self, cta_text: impl Into<String>) -> Self {
        self.cta_text = Some(cta_text.into());
        self
    }

    /// Returns the images this slide rotates through: `images` when
    /// non-empty, otherwise the legacy `image`, otherwise nothing.
    #[must_use]
    pub fn resolved_images(&self) -> Vec<&str> {
        if self.images.is_empty() {
            self.image.as_deref().into_iter().collect()
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Number of images the slide rotates through.
    #[must_use]
    pub fn image_count(&self) -> usize {
        if self.images.is_empty() {
            usize::from(self.image.is_some())
        } else {
            self.images.len()
        }
    }

    /// Returns the image displayed for `inner_index`, wrapping against the
    /// resolved image count and falling back to [`PLACEHOLDER_IMAGE`].
    #[must_use]
    pub fn image_at(&self, inner_index: usize) -> &str {
        let images = self.resolved_images();
        inner_index
            .checked_rem(images.len())
            .and_then(|index| images.get(index).copied())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Returns the visible call-to-action label.
    #[must_use]
    pub fn cta_label(&self) -> &str {
        self.cta_text.as_deref().unwrap_or(DEFAULT_CTA_LABEL)
    }

    /// Returns the accessible call-to-action label.
    #[must_use]
    pub fn cta_accessible_label(&self) -> &str {
        self.cta_text
            .as_deref()
            .unwrap_or(DEFAULT_CTA_ACCESSIBLE_LABEL)
    }
}
