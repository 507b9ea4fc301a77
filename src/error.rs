use thiserror::Error;

use crate::client::RateLimitInfo;

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the gateway.
///
/// Webhook dispatch never produces these; anomalies there degrade to the
/// fallback event instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, TLS, body read).
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("api: {0}")]
    Api(#[from] ApiError),

    /// Request quota exhausted (HTTP 429).
    #[error("rate limited{}", retry_after.map(|s| format!(", retry after {s}s")).unwrap_or_default())]
    RateLimited {
        /// Seconds to wait, from the `retry-after` header.
        retry_after: Option<u64>,
        /// Quota snapshot from the rate-limit headers, when present.
        info: Option<RateLimitInfo>,
    },

    /// The response body was not the expected envelope.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// A structured error reported by the gateway API.
#[derive(Error, Debug)]
#[error("status {status}: {message}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the response envelope, or the status reason.
    pub message: String,
}
