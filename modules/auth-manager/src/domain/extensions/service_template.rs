//! Service template authorization.

use ac_security::SecurityContext;
use authz_resolver_sdk::{Action, ResourceAttribute, ResourceType};
use process_sdk::{ListServiceTemplateOption, ServiceTemplate};
use tracing::instrument;

use crate::domain::cancel::with_cancellation;
use crate::domain::error::{AuthManagerError, LookupError};
use crate::domain::ids::{missing_ids, unique_ids};
use crate::domain::manager::AuthManager;
use crate::domain::no_permission::NoPermissionResp;
use crate::domain::resources::make_resources;
use crate::domain::scope::extract_business_id;

impl AuthManager {
    /// Resolve `ids` into service templates with a single lookup.
    ///
    /// Duplicate ids are collapsed first so that unknown ids show up as a
    /// difference between what was asked for and what came back. Records
    /// that were not asked for are dropped.
    async fn collect_service_templates_by_ids(
        &self,
        ctx: &SecurityContext,
        op: &'static str,
        ids: &[i64],
    ) -> Result<Vec<ServiceTemplate>, AuthManagerError> {
        let ids = unique_ids(ids);
        let option = ListServiceTemplateOption::by_ids(ids.clone());

        let list = with_cancellation(ctx, op, self.process.list_service_templates(ctx, option))
            .await?
            .map_err(|source| {
                tracing::debug!(
                    rid = ctx.request_id(),
                    template_ids = ?ids,
                    error = %source,
                    "list service templates by id failed"
                );
                AuthManagerError::lookup(op, LookupError::Failed { ids: ids.clone(), source })
            })?;

        let missing = missing_ids(&ids, list.info.iter().map(|t| t.id));
        if !missing.is_empty() {
            tracing::debug!(
                rid = ctx.request_id(),
                template_ids = ?ids,
                missing = ?missing,
                "service templates not found"
            );
            return Err(AuthManagerError::lookup(op, LookupError::Missing { missing }));
        }

        let (templates, unexpected): (Vec<ServiceTemplate>, Vec<ServiceTemplate>) =
            list.info.into_iter().partition(|t| ids.contains(&t.id));
        if !unexpected.is_empty() {
            tracing::debug!(
                rid = ctx.request_id(),
                template_ids = ?ids,
                unexpected = ?unexpected.iter().map(|t| t.id).collect::<Vec<_>>(),
                "lookup returned service templates that were not requested"
            );
        }

        Ok(templates)
    }

    /// Permission-check requests for `templates`, scoped to `business_id`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn make_resources_by_service_templates(
        &self,
        ctx: &SecurityContext,
        action: Action,
        business_id: i64,
        templates: &[ServiceTemplate],
    ) -> Vec<ResourceAttribute> {
        make_resources(ctx, action, business_id, templates)
    }

    /// Authorize `action` on the service templates identified by `ids`.
    ///
    /// Succeeds immediately, without any lookup, when checks are disabled or
    /// `ids` is empty. Duplicate ids are checked once.
    ///
    /// # Errors
    ///
    /// - `Lookup` if the templates cannot be listed or some ids do not exist
    /// - `InconsistentScope` if the templates belong to different businesses
    /// - `PolicyDecision` if evaluation fails or any template is denied
    /// - `Cancelled` if the caller's context is cancelled first
    #[instrument(skip_all, fields(rid = ctx.request_id(), action = %action, count = ids.len()))]
    pub async fn authorize_by_service_template_ids(
        &self,
        ctx: &SecurityContext,
        action: Action,
        ids: &[i64],
    ) -> Result<(), AuthManagerError> {
        const OP: &str = "authorize_by_service_template_ids";

        if !self.enabled() || ids.is_empty() {
            return Ok(());
        }

        let templates = self.collect_service_templates_by_ids(ctx, OP, ids).await?;
        self.authorize_service_templates(ctx, OP, action, &templates)
            .await
    }

    /// Authorize `action` on already resolved service templates.
    ///
    /// # Errors
    ///
    /// Same as [`Self::authorize_by_service_template_ids`] minus `Lookup`.
    #[instrument(skip_all, fields(rid = ctx.request_id(), action = %action, count = templates.len()))]
    pub async fn authorize_by_service_templates(
        &self,
        ctx: &SecurityContext,
        action: Action,
        templates: &[ServiceTemplate],
    ) -> Result<(), AuthManagerError> {
        self.authorize_service_templates(ctx, "authorize_by_service_templates", action, templates)
            .await
    }

    async fn authorize_service_templates(
        &self,
        ctx: &SecurityContext,
        op: &'static str,
        action: Action,
        templates: &[ServiceTemplate],
    ) -> Result<(), AuthManagerError> {
        if !self.enabled() || templates.is_empty() {
            return Ok(());
        }

        let business_id = extract_business_id(templates)
            .map_err(|e| AuthManagerError::inconsistent_scope(op, e))?;
        let resources = make_resources(ctx, action, business_id, templates);

        self.authorize(ctx, op, business_id, resources).await
    }

    /// Service templates of `biz_id` (`0` for any business) the caller may list.
    ///
    /// # Errors
    ///
    /// See [`Self::list_authorized_ids`].
    pub async fn list_authorized_service_template_ids(
        &self,
        ctx: &SecurityContext,
        biz_id: i64,
    ) -> Result<Vec<i64>, AuthManagerError> {
        self.list_authorized_ids(ctx, biz_id, ResourceType::ServiceTemplate, Action::FindMany)
            .await
    }

    // TODO: describe the missing service template permissions once the
    // permission center exposes action names.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn service_template_no_permission_resp(&self) -> NoPermissionResp {
        NoPermissionResp::new(Vec::new())
    }
}
