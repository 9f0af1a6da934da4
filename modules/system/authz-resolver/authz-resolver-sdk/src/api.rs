//! Public API trait for the `AuthZ` resolver.

use async_trait::async_trait;

use crate::error::AuthZResolverError;
use crate::models::{
    AuthorizeBatchRequest, AuthorizeBatchResponse, AuthorizedResourceGroup,
    ListAuthorizedResourcesParam,
};

/// Public API trait for the policy decision point.
///
/// Implementations must be safe for concurrent use; consumers share a single
/// `Arc<dyn AuthZResolverClient>` across requests:
///
/// ```ignore
/// let authz: Arc<dyn AuthZResolverClient> = Arc::new(plugin);
///
/// let response = authz.authorize_batch(&request).await?;
/// ```
#[async_trait]
pub trait AuthZResolverClient: Send + Sync {
    /// Decide a batch of permission checks in one call.
    ///
    /// Returns one [`crate::Decision`] per entry of `request.resources`, in the
    /// same order.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller's credentials were rejected by the PDP
    /// - `ServiceUnavailable` if the PDP cannot be reached
    /// - `Internal` for unexpected errors
    async fn authorize_batch(
        &self,
        request: &AuthorizeBatchRequest,
    ) -> Result<AuthorizeBatchResponse, AuthZResolverError>;

    /// List the ids of every resource the principal may act on.
    ///
    /// Ids are returned as strings, grouped the way the PDP stores them.
    ///
    /// # Errors
    ///
    /// Same as [`AuthZResolverClient::authorize_batch`].
    async fn list_authorized_resources(
        &self,
        param: &ListAuthorizedResourcesParam,
    ) -> Result<Vec<AuthorizedResourceGroup>, AuthZResolverError>;
}
