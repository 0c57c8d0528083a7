//! Review payload shapes and their mapping to display entries.
//!
//! The review API is loosely typed: ratings may arrive as numbers, numeric
//! strings, or garbage, and sources may be absent or unknown. All of that is
//! coerced here so the review strip only ever sees well-formed entries.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rating used when the API value is absent, zero, or not a number.
pub const DEFAULT_RATING: u8 = 5;

/// Name shown when a reviewer left none.
pub const ANONYMOUS: &str = "Anonymous";

/// Where a review was originally posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    /// Posted on Facebook.
    Facebook,
    /// Posted on Instagram.
    Instagram,
    /// Submitted through the website (also the fallback).
    #[default]
    Website,
}

impl ReviewSource {
    /// Parses a source tag, falling back to [`ReviewSource::Website`] for
    /// absent or unrecognised values.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("facebook") => Self::Facebook,
            Some("instagram") => Self::Instagram,
            _ => Self::Website,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Website => "Website",
        }
    }
}

/// One review card as displayed by the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// Reviewer name.
    pub name: String,
    /// Original platform.
    pub source: ReviewSource,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review body.
    pub text: String,
    /// Display date (`M/D/YYYY`), when the review carried a valid timestamp.
    pub date: Option<String>,
}

impl ReviewEntry {
    /// Renders the rating as five filled or hollow stars.
    #[must_use]
    pub fn stars(&self) -> String {
        (1..=5_u8)
            .map(|position| if position <= self.rating { '★' } else { '☆' })
            .collect()
    }
}

/// Review record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiReview {
    /// Reviewer name.
    pub name: Option<String>,
    /// Source tag (`facebook`, `instagram`, `website`).
    pub source: Option<String>,
    /// Rating in whatever shape the API stored it.
    pub rating: Option<Value>,
    /// Review body.
    pub comment: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Accepted response envelopes: a bare array or `{ "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReviewPayload {
    /// Bare list of reviews.
    List(Vec<ApiReview>),
    /// Reviews wrapped in a `data` field.
    Envelope {
        /// Wrapped reviews.
        data: Vec<ApiReview>,
    },
}

impl ReviewPayload {
    /// Unwraps the envelope.
    #[must_use]
    pub fn into_reviews(self) -> Vec<ApiReview> {
        match self {
            Self::List(reviews) | Self::Envelope { data: reviews } => reviews,
        }
    }
}

impl From<ApiReview> for ReviewEntry {
    fn from(review: ApiReview) -> Self {
        Self {
            name: review
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| ANONYMOUS.to_owned()),
            source: ReviewSource::from_tag(review.source.as_deref()),
            rating: coerce_rating(review.rating.as_ref()),
            text: review.comment.unwrap_or_default(),
            date: review.created_at.as_deref().and_then(format_display_date),
        }
    }
}

/// Coerces an API rating into `1..=5`.
///
/// Numbers and numeric strings are accepted; fractional values round and
/// out-of-range values clamp. Absent, zero, and non-numeric values yield
/// [`DEFAULT_RATING`].
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 1..=5 before the cast"
)]
pub fn coerce_rating(value: Option<&Value>) -> u8 {
    let numeric = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    let Some(rating) = numeric.filter(|rating| rating.is_finite() && *rating != 0.0) else {
        return DEFAULT_RATING;
    };

    rating.round().clamp(1.0, 5.0) as u8
}

/// Formats an RFC 3339 timestamp (or a bare `YYYY-MM-DD` date) as
/// `M/D/YYYY`. Returns `None` when the value cannot be parsed.
#[must_use]
pub fn format_display_date(raw: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%-m/%-d/%Y").to_string())
}
