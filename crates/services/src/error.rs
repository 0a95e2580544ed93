//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the quiz backend gateway.
///
/// The `Display` text is what the view layer shows, so backend-provided
/// messages are passed through untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("{0}")]
    Backend(String),
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("backend url cannot be used as a base: {0}")]
    NotABase(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
