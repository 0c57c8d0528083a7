//! Application-level errors reported by the `showcase` binary.
//!
//! Review data problems never surface here; the feed degrades them to an
//! empty strip.

use thiserror::Error;

/// Failures that stop the preview from starting or running.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Layered configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Loader error detail.
        message: String,
    },

    /// The terminal program failed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Program error detail.
        message: String,
    },
}
