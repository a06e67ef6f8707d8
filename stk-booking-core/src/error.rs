//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Errors produced while talking to the booking backend.
///
/// Client-side validation problems are not errors of this type; they are
/// reported as [`ValidationError`](crate::validation::ValidationError) lists
/// before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum BookingError {
    /// The backend answered with a non-success HTTP status.
    ///
    /// `message` is the `detail` (or `message`) text from the response body, if any.
    #[error("Request rejected (HTTP {status}){}", detail_suffix(.message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request never completed (connection refused, DNS failure, reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// The appointment endpoint could not be built from the configured base URL.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl BookingError {
    /// Whether it is expected behavior (the server refused the booking), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[allow(clippy::ref_option)]
fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type alias for booking operations
pub type BookingResult<T> = std::result::Result<T, BookingError>;
