//! Fetch Errors

use thiserror::Error;

/// Failure of any request in a listing load
///
/// The `Display` text is what the error screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status
    #[error("Network error: {0}")]
    Network(String),

    /// Anything else, e.g. a body that does not match the expected shape.
    /// The detail is kept for logging only.
    #[error("Some error occurred")]
    Unexpected(String),
}

impl FetchError {
    /// Underlying message, for diagnostics
    pub fn detail(&self) -> &str {
        match self {
            FetchError::Network(msg) | FetchError::Unexpected(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Unexpected(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
