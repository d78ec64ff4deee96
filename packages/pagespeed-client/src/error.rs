//! Error types for the PageSpeed Insights client.

use thiserror::Error;

use crate::types::Strategy;

/// Result type for PageSpeed client operations.
pub type Result<T> = std::result::Result<T, PageSpeedError>;

/// Failure of a single `runPagespeed` call.
///
/// Every variant describes one outbound request. The client never retries,
/// so callers decide what a failure means for their own workflow.
#[derive(Debug, Error)]
pub enum PageSpeedError {
    /// The client-side deadline expired and the request was aborted
    #[error("PageSpeed API timeout after {seconds} seconds for {strategy} analysis. Google's servers may be overloaded.")]
    Timeout { strategy: Strategy, seconds: u64 },

    /// HTTP 429
    #[error("Google PageSpeed API rate limit reached. Please try again in a few minutes.")]
    RateLimited,

    /// HTTP 5xx
    #[error("Google PageSpeed servers are experiencing issues ({status}). Please try again later.")]
    UpstreamUnavailable { status: u16 },

    /// Any other non-200 status, with the upstream `error.message` when present
    #[error("PageSpeed API Error: {message}")]
    Upstream { status: u16, message: String },

    /// DNS resolution or connection establishment failed
    #[error("Network error: Unable to reach Google PageSpeed Insights. Check your internet connection. ({0})")]
    NetworkUnreachable(String),

    /// Any other transport failure
    #[error("PageSpeed API request failed: {0}")]
    Transport(String),

    /// A 200 response whose body is not JSON
    #[error("Failed to parse PageSpeed response: {0}")]
    MalformedResponse(String),
}

impl PageSpeedError {
    /// Stable name of the failure kind, suitable for API responses and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "Timeout",
            Self::RateLimited => "RateLimited",
            Self::UpstreamUnavailable { .. } => "UpstreamUnavailable",
            Self::Upstream { .. } => "UpstreamError",
            Self::NetworkUnreachable(_) => "NetworkUnreachable",
            Self::Transport(_) => "TransportError",
            Self::MalformedResponse(_) => "MalformedResponse",
        }
    }

    /// HTTP status reported by the upstream, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::UpstreamUnavailable { status } | Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
