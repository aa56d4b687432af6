//! Brevet times client error types.

use thiserror::Error;

/// Errors from the brevet times HTTP client.
///
/// Transport errors carry the underlying description as a string so the
/// error stays `Clone` and can be served from the mock client in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The API could not be reached at all (DNS failure, connection
    /// refused, timeout).
    #[error("Failed to connect to API: {message}")]
    Transport { message: String },

    /// The API answered with a non-200 status code.
    #[error("API returned status code {status}")]
    Status { status: u16 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}
