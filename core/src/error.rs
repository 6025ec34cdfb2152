//! Error types for the Pexels API client.
//!
//! Every variant ends up as a 500 at the HTTP edge; the split exists so
//! callers and tests can tell a bad status from a bad payload.

use thiserror::Error;

/// Errors returned by `PexelsClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provider answered with something other than 200.
    #[error("status code: {status}")]
    Status { status: u16, body: String },

    /// A 200 response without the `X-Ratelimit-Remaining` header.
    #[error("missing X-Ratelimit-Remaining header")]
    MissingRateLimit,

    /// The `X-Ratelimit-Remaining` header is not a non-negative integer.
    #[error("invalid X-Ratelimit-Remaining header: {0:?}")]
    InvalidRateLimit(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request never produced a response (DNS, connect, timeout, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// A random pick landed on a page with no items.
    #[error("no {0} found on the selected page")]
    EmptyPage(&'static str),
}
