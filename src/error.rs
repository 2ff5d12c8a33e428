//! Crate-level error types.
//!
//! [`TradedeskError`] unifies every error source (configuration, terminal
//! I/O, HTTP, JSON) behind a single enum. From the session's point of view
//! the HTTP and JSON variants are the same thing: the remote call failed.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TradedeskError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TradedeskError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal, log file, or transport I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// The HTTP request failed or the service answered with a non-2xx status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
