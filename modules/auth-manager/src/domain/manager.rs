use std::fmt;
use std::sync::Arc;

use ac_security::SecurityContext;
use authz_resolver_sdk::{
    Action, AuthZResolverClient, AuthorizeBatchRequest, Decision, ListAuthorizedResourcesParam,
    ResourceAttribute, ResourceType, Subject,
};
use process_sdk::ProcessClient;
use tracing::instrument;

use super::cancel::with_cancellation;
use super::error::{AuthManagerError, DeniedResource, PolicyDecisionError};
use crate::config::AuthManagerConfig;

/// Translates business objects into permission checks and enforces them
/// through the policy decision point.
///
/// Holds only shared client handles; clones are cheap.
#[derive(Clone)]
pub struct AuthManager {
    config: AuthManagerConfig,
    pub(crate) process: Arc<dyn ProcessClient>,
    authz: Arc<dyn AuthZResolverClient>,
}

impl fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    #[must_use]
    pub fn new(
        config: AuthManagerConfig,
        process: Arc<dyn ProcessClient>,
        authz: Arc<dyn AuthZResolverClient>,
    ) -> Self {
        Self {
            config,
            process,
            authz,
        }
    }

    /// Whether checks are enforced. When `false` every authorize call succeeds.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Submit one batch to the policy decision point. Succeeds only if every
    /// resource is authorized.
    pub(crate) async fn authorize(
        &self,
        ctx: &SecurityContext,
        op: &'static str,
        business_id: i64,
        resources: Vec<ResourceAttribute>,
    ) -> Result<(), AuthManagerError> {
        let request = AuthorizeBatchRequest {
            subject: Subject::new(ctx.user(), ctx.supplier_account()),
            business_id,
            resources,
            bearer_token: ctx.bearer_token().cloned(),
        };

        let response = with_cancellation(ctx, op, self.authz.authorize_batch(&request))
            .await?
            .map_err(|e| {
                tracing::error!(rid = ctx.request_id(), error = %e, "authorize batch failed");
                AuthManagerError::policy(op, e)
            })?;

        check_decisions(&request.resources, response.decisions)
            .map_err(|e| AuthManagerError::policy(op, e))
    }

    /// Identifiers of every `resource_type` instance the caller may perform
    /// `action` on within `biz_id` (`0` for any business), in the order the
    /// policy decision point returned them.
    ///
    /// # Errors
    ///
    /// - `PolicyDecision` if the listing call fails
    /// - `Parse` if any returned id is not an integer; no partial list is returned
    /// - `Cancelled` if the caller's context is cancelled first
    #[instrument(skip_all, fields(rid = ctx.request_id(), biz_id = biz_id, resource_type = %resource_type, action = %action))]
    pub async fn list_authorized_ids(
        &self,
        ctx: &SecurityContext,
        biz_id: i64,
        resource_type: ResourceType,
        action: Action,
    ) -> Result<Vec<i64>, AuthManagerError> {
        const OP: &str = "list_authorized_ids";

        let param = ListAuthorizedResourcesParam {
            user: ctx.user().to_owned(),
            biz_id,
            resource_type,
            action,
            bearer_token: ctx.bearer_token().cloned(),
        };

        let groups = with_cancellation(ctx, OP, self.authz.list_authorized_resources(&param))
            .await?
            .map_err(|e| {
                tracing::error!(
                    rid = ctx.request_id(),
                    error = %e,
                    "list authorized {resource_type} from policy decision point failed"
                );
                AuthManagerError::policy(OP, e)
            })?;

        groups
            .iter()
            .flat_map(|group| &group.resources)
            .map(|resource| {
                resource.resource_id.parse::<i64>().map_err(|source| {
                    tracing::error!(
                        rid = ctx.request_id(),
                        resource_id = %resource.resource_id,
                        error = %source,
                        "authorized resource id is not an integer"
                    );
                    AuthManagerError::Parse {
                        op: OP,
                        resource_id: resource.resource_id.clone(),
                        source,
                    }
                })
            })
            .collect()
    }
}

fn check_decisions(
    resources: &[ResourceAttribute],
    decisions: Vec<Decision>,
) -> Result<(), PolicyDecisionError> {
    if decisions.len() != resources.len() {
        return Err(PolicyDecisionError::MalformedResponse {
            expected: resources.len(),
            got: decisions.len(),
        });
    }

    let denied: Vec<DeniedResource> = resources
        .iter()
        .zip(decisions)
        .filter(|(_, decision)| !decision.authorized)
        .map(|(resource, decision)| DeniedResource {
            resource_type: resource.basic.resource_type,
            instance_id: resource.basic.instance_id,
            name: resource.basic.name.clone(),
            reason: decision.reason,
        })
        .collect();

    if denied.is_empty() {
        Ok(())
    } else {
        Err(PolicyDecisionError::Denied { denied })
    }
}
