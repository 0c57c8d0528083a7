//! Review data collaborator.
//!
//! Reads published reviews from the review API, coerces the loosely typed
//! payload into [`ReviewEntry`] values, and converts every failure into an
//! empty list so the review strip never sees an error.

pub mod error;
pub mod feed;
pub mod gateway;
pub mod model;

pub use error::ReviewFetchError;
pub use feed::ReviewFeed;
pub use gateway::{DEFAULT_REVIEW_LIMIT, HttpReviewGateway, ReviewGateway, ReviewQuery};
pub use model::{ApiReview, ReviewEntry, ReviewPayload, ReviewSource};

#[cfg(test)]
pub use gateway::MockReviewGateway;
