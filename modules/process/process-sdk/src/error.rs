//! Error types for the process SDK.

use thiserror::Error;

/// Errors returned by [`crate::ProcessClient`].
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The request was rejected as invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The process service is not reachable.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
