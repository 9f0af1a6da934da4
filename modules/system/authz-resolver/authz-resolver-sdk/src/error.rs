//! Failures of calls to the policy decision point.

use thiserror::Error;

/// A batch authorization or listing call that produced no answer.
///
/// A refused resource is not an error: it comes back as a [`crate::Decision`]
/// with `authorized` unset, at the same index as the resource in the batch.
#[derive(Debug, Error)]
pub enum AuthZResolverError {
    /// Caller credentials were rejected before any resource was evaluated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The PDP answered with something other than a decision list, or failed
    /// while evaluating one.
    #[error("internal error: {0}")]
    Internal(String),
}
