//! Typed errors for the audit domain.

use thiserror::Error;

use super::models::Analysis;

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Request-level audit failures.
///
/// Per-strategy fetch failures never appear here: they are downgraded to
/// missing data inside the orchestrator.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The submitted URL cannot be parsed even after adding a scheme
    #[error("Invalid URL provided: {url}")]
    InvalidInput { url: String },

    /// Neither the mobile nor the desktop analysis produced data.
    /// Carries the all-defaults analysis so callers can still render its shape.
    #[error("{message}")]
    UpstreamUnavailable {
        message: String,
        analysis: Box<Analysis>,
    },
}

impl AuditError {
    /// Stable name of the failure kind for API responses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInput",
            Self::UpstreamUnavailable { .. } => "UpstreamUnavailable",
        }
    }
}
