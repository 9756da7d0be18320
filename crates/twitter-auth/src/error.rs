//! Error types for Twitter API operations

/// Errors from token acquisition and search.
///
/// A non-success status or empty body is not an error: callers receive an
/// empty token or an empty result list instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result alias for Twitter API operations.
pub type Result<T> = std::result::Result<T, Error>;
