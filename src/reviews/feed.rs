//! High-level review feed used by the preview host.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::error::ReviewFetchError;
use super::gateway::{HttpReviewGateway, ReviewGateway, ReviewQuery};
use super::model::ReviewEntry;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Loads review entries through a gateway and shapes them for display.
///
/// The feed is the error boundary of the review data: [`ReviewFeed::load`]
/// never fails, so the review strip sees the same empty list whether the
/// fetch failed or legitimately returned nothing.
#[derive(Clone)]
pub struct ReviewFeed {
    gateway: Option<Arc<dyn ReviewGateway>>,
    query: ReviewQuery,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for ReviewFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewFeed")
            .field("configured", &self.gateway.is_some())
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl ReviewFeed {
    /// Creates a feed reading through `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewGateway>, query: ReviewQuery) -> Self {
        Self {
            gateway: Some(gateway),
            query,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Creates a feed with no endpoint. Every load degrades to empty.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            gateway: None,
            query: ReviewQuery::default(),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Builds an HTTP-backed feed for `api_base`.
    ///
    /// A missing base URL, or one the gateway rejects, yields an
    /// unconfigured feed so the strip shows its empty state instead of
    /// failing startup. Construction failures are logged and recorded.
    #[must_use]
    pub fn for_endpoint(
        api_base: Option<&str>,
        timeout: Duration,
        query: ReviewQuery,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        let Some(api_base) = api_base else {
            tracing::info!("no review API configured");
            return Self::unconfigured().with_telemetry(telemetry);
        };
        match HttpReviewGateway::new(api_base, timeout) {
            Ok(gateway) => Self::new(Arc::new(gateway), query).with_telemetry(telemetry),
            Err(error) => {
                tracing::warn!(%error, api_base, "review API unusable; showing no reviews");
                telemetry.record(TelemetryEvent::ReviewFetchFailed {
                    reason: error.to_string(),
                });
                Self::unconfigured().with_telemetry(telemetry)
            }
        }
    }

    /// Routes fetch outcomes to `telemetry`.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the query sent to the gateway.
    #[must_use]
    pub const fn query(&self) -> &ReviewQuery {
        &self.query
    }

    /// Fetches and shapes reviews, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFetchError::NotConfigured`] when the feed has no
    /// gateway, or whatever the gateway reports.
    pub async fn fetch(&self) -> Result<Vec<ReviewEntry>, ReviewFetchError> {
        let gateway = self
            .gateway
            .as_ref()
            .ok_or(ReviewFetchError::NotConfigured)?;
        let reviews = gateway.list_reviews(&self.query).await?;
        Ok(reviews.into_iter().map(ReviewEntry::from).collect())
    }

    /// Fetches reviews once, degrading any failure to an empty list.
    ///
    /// Failures are logged and recorded as telemetry here and nowhere else.
    pub async fn load(&self) -> Vec<ReviewEntry> {
        match self.fetch().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "reviews loaded");
                self.telemetry.record(TelemetryEvent::ReviewsLoaded {
                    review_count: entries.len(),
                });
                entries
            }
            Err(error) => {
                tracing::warn!(%error, "review fetch failed; showing no reviews");
                self.telemetry.record(TelemetryEvent::ReviewFetchFailed {
                    reason: error.to_string(),
                });
                Vec::new()
            }
        }
    }
}
