//! Crate-level error types.
//!
//! [`PricelockError`] unifies every error source (configuration, HTTP,
//! JSON, terminal I/O) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PricelockError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PricelockError {
    /// An environment variable held a value the configuration cannot use.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request to the quote source failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup, rendering, or teardown failed.
    #[error("io error: {0}")]
    Io(String),

    /// The quote source answered with a body we cannot use.
    #[error("malformed quote: {0}")]
    MalformedQuote(String),
}
