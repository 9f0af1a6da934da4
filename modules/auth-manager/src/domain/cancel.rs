use std::future::Future;

use ac_security::SecurityContext;

use super::error::AuthManagerError;

/// Race `fut` against the caller's cancellation token.
///
/// An already cancelled context never polls `fut`.
pub async fn with_cancellation<F: Future>(
    ctx: &SecurityContext,
    op: &'static str,
    fut: F,
) -> Result<F::Output, AuthManagerError> {
    tokio::select! {
        biased;
        () = ctx.cancellation().cancelled() => {
            tracing::debug!(rid = ctx.request_id(), op, "operation cancelled by caller");
            Err(AuthManagerError::Cancelled { op })
        }
        out = fut => Ok(out),
    }
}
