//! Error taxonomy for the fetch-transform pipeline.

use thiserror::Error;

/// Errors that can occur while fetching and reshaping the upstream ticker.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Network failure reaching the upstream endpoint.
    #[error("upstream request failed: {0}")]
    UpstreamTransport(String),

    /// Upstream did not answer within the configured timeout.
    #[error("upstream request timed out after {0} ms")]
    UpstreamTimeout(u64),

    /// Upstream answered, but the body is not JSON or fails the
    /// `code`/`data` checks. Carries the raw body.
    #[error("Invalid API Response: {0}")]
    InvalidUpstreamResponse(String),

    /// A single record could not be mapped.
    #[error("invalid ticker record: {0}")]
    Transform(String),
}

impl ProxyError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::UpstreamTransport(_) => "transport",
            ProxyError::UpstreamTimeout(_) => "timeout",
            ProxyError::InvalidUpstreamResponse(_) => "invalid_response",
            ProxyError::Transform(_) => "transform",
        }
    }
}

/// Result type for pipeline operations.
pub type ProxyResult<T> = Result<T, ProxyError>;
