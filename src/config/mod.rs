//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.showcase.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SHOWCASE_API_URL`,
//!    `SHOWCASE_INTERVAL_MS`, and friends
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--interval-ms`/`-i`
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://api.example.com/api"
//! review_limit = 20
//! interval_ms = 6000
//! no_autoplay = false
//! reduced_motion = false
//! telemetry = false
//! request_timeout_secs = 10
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::reviews::{DEFAULT_REVIEW_LIMIT, ReviewQuery};

/// Default hero slide interval, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 6000;

/// Default review API request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SHOWCASE_API_URL` or `--api-url`: Review API base URL
/// - `SHOWCASE_REVIEW_LIMIT` or `--review-limit`: Reviews requested
/// - `SHOWCASE_INTERVAL_MS` or `--interval-ms`: Hero slide interval
/// - `SHOWCASE_REQUEST_TIMEOUT_SECS` or `--request-timeout-secs`
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use showcase::ShowcaseConfig;
///
/// let config = ShowcaseConfig::load().expect("failed to load configuration");
/// let interval = config.slide_interval();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SHOWCASE",
    discovery(
        dotfile_name = ".showcase.toml",
        config_file_name = "showcase.toml",
        app_name = "showcase"
    )
)]
pub struct ShowcaseConfig {
    /// Base URL of the review API (the feed reads `{api_url}/reviews`).
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `SHOWCASE_API_URL`
    /// - Config file: `api_url = "..."`
    ///
    /// When absent the review strip shows its empty state.
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Maximum number of approved reviews requested.
    ///
    /// Defaults to 20.
    #[ortho_config(cli_short = 'l')]
    pub review_limit: u32,

    /// Hero slide interval, in milliseconds.
    ///
    /// Values below 2000 are clamped by the rotator. Defaults to 6000.
    #[ortho_config(cli_short = 'i')]
    pub interval_ms: u64,

    /// Disables automatic hero rotation.
    ///
    /// Can be provided via:
    /// - CLI: `--no-autoplay`
    /// - Config file: `no_autoplay = true`
    #[ortho_config()]
    pub no_autoplay: bool,

    /// Replaces smooth transitions with instant jumps.
    ///
    /// Can be provided via:
    /// - CLI: `--reduced-motion` / `-r`
    /// - Config file: `reduced_motion = true`
    #[ortho_config(cli_short = 'r')]
    pub reduced_motion: bool,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,

    /// Review API request timeout, in seconds. Defaults to 10.
    #[ortho_config(cli_short = 'w')]
    pub request_timeout_secs: u64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            review_limit: DEFAULT_REVIEW_LIMIT,
            interval_ms: DEFAULT_INTERVAL_MS,
            no_autoplay: false,
            reduced_motion: false,
            telemetry: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ShowcaseConfig {
    /// Hero slide interval as a [`Duration`].
    #[must_use]
    pub const fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Whether the hero rotates automatically.
    #[must_use]
    pub const fn auto_play(&self) -> bool {
        !self.no_autoplay
    }

    /// Review API request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the configured API base URL, ignoring blank values.
    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Query sent to the review API: approved reviews only, at least one.
    #[must_use]
    pub fn review_query(&self) -> ReviewQuery {
        ReviewQuery {
            approved_only: true,
            limit: self.review_limit.max(1),
        }
    }
}

#[cfg(test)]
mod tests;
