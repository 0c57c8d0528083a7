//! Review API gateway.
//!
//! The trait seam lets the feed be tested with mocks while
//! [`HttpReviewGateway`] performs the real paginated read.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::ReviewFetchError;
use super::model::{ApiReview, ReviewPayload};

/// Page size requested when none is configured.
pub const DEFAULT_REVIEW_LIMIT: u32 = 20;

/// Parameters of the review read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Only request reviews approved for publication.
    pub approved_only: bool,
    /// Maximum number of reviews to return.
    pub limit: u32,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        Self {
            approved_only: true,
            limit: DEFAULT_REVIEW_LIMIT,
        }
    }
}

/// Gateway that can list published reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch one page of reviews.
    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<ApiReview>, ReviewFetchError>;
}

/// HTTP implementation reading `GET {api_base}/reviews`.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    endpoint: Url,
}

impl HttpReviewGateway {
    /// Creates a gateway for the API rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFetchError::InvalidUrl`] when `api_base` does not
    /// parse, or [`ReviewFetchError::Client`] when the HTTP client cannot be
    /// built.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, ReviewFetchError> {
        let endpoint = reviews_endpoint(api_base)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ReviewFetchError::Client {
                message: error.to_string(),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Returns the resolved reviews endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<ApiReview>, ReviewFetchError> {
        let approved = if query.approved_only { "true" } else { "false" };
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("approved", approved.to_owned()),
                ("limit", query.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|error| ReviewFetchError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewFetchError::Status {
                status: status.as_u16(),
            });
        }

        let payload: ReviewPayload =
            response
                .json()
                .await
                .map_err(|error| ReviewFetchError::Decode {
                    message: error.to_string(),
                })?;
        Ok(payload.into_reviews())
    }
}

/// Resolves `{api_base}/reviews`, tolerating a trailing slash on the base.
fn reviews_endpoint(api_base: &str) -> Result<Url, ReviewFetchError> {
    let base = format!("{}/", api_base.trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|url| url.join("reviews"))
        .map_err(|error| ReviewFetchError::InvalidUrl(format!("{api_base}: {error}")))
}
