//! Error types for the relay client.

use thiserror::Error;

/// Errors that can occur when calling a relay.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL could not be parsed or joined.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Relay answered with a non-2xx status and an `{"error": ...}` body.
    #[error("Relay error ({status}): {message}")]
    Relay {
        /// HTTP status code.
        status: u16,
        /// The relay's `error` string, or the raw body when it was not JSON.
        message: String,
    },

    /// Relay returned a body that is neither a reply nor an error.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
