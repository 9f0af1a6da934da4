//! Client implementation for the static `AuthZ` resolver plugin.

use async_trait::async_trait;
use authz_resolver_sdk::{
    AuthZResolverClient, AuthZResolverError, AuthorizeBatchRequest, AuthorizeBatchResponse,
    AuthorizedResourceGroup, ListAuthorizedResourcesParam,
};

use super::service::Service;

#[async_trait]
impl AuthZResolverClient for Service {
    async fn authorize_batch(
        &self,
        request: &AuthorizeBatchRequest,
    ) -> Result<AuthorizeBatchResponse, AuthZResolverError> {
        Ok(self.evaluate(request))
    }

    async fn list_authorized_resources(
        &self,
        param: &ListAuthorizedResourcesParam,
    ) -> Result<Vec<AuthorizedResourceGroup>, AuthZResolverError> {
        Ok(self.list(param))
    }
}
