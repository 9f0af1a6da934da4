#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ac_security::SecurityContext;
use async_trait::async_trait;
use authz_resolver_sdk::{
    AuthZResolverClient, AuthZResolverError, AuthorizeBatchRequest, AuthorizeBatchResponse,
    AuthorizedResourceGroup, Decision, ListAuthorizedResourcesParam,
};
use parking_lot::Mutex;
use process_sdk::{
    ListServiceTemplateOption, ProcessClient, ProcessError, ServiceTemplate, ServiceTemplateList,
};

use crate::config::AuthManagerConfig;
use crate::domain::AuthManager;

#[must_use]
pub fn ctx_for_user(user: &str) -> SecurityContext {
    SecurityContext::builder()
        .user(user)
        .supplier_account("0")
        .build()
}

/// Service templates named `tpl-{id}` from `(id, biz_id)` pairs.
#[must_use]
pub fn templates(specs: &[(i64, Option<i64>)]) -> Vec<ServiceTemplate> {
    specs
        .iter()
        .map(|&(id, biz_id)| ServiceTemplate::new(id, format!("tpl-{id}"), biz_id))
        .collect()
}

/// Enabled manager over the given collaborators.
#[must_use]
pub fn manager_with(
    process: impl ProcessClient + 'static,
    authz: impl AuthZResolverClient + 'static,
) -> AuthManager {
    AuthManager::new(AuthManagerConfig::default(), Arc::new(process), Arc::new(authz))
}

/// Process client over a fixed set of templates, counting calls.
///
/// Clones share the call log.
#[derive(Clone)]
pub struct MockProcessClient {
    templates: Arc<Vec<ServiceTemplate>>,
    failure: Option<Arc<dyn Fn() -> ProcessError + Send + Sync>>,
    unfiltered: bool,
    calls: Arc<AtomicUsize>,
    requested: Arc<Mutex<Vec<Vec<i64>>>>,
}

impl MockProcessClient {
    #[must_use]
    pub fn new(templates: Vec<ServiceTemplate>) -> Self {
        Self {
            templates: Arc::new(templates),
            failure: None,
            unfiltered: false,
            calls: Arc::new(AtomicUsize::new(0)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every lookup returns all of `templates`, requested or not.
    #[must_use]
    pub fn unfiltered(templates: Vec<ServiceTemplate>) -> Self {
        Self {
            unfiltered: true,
            ..Self::new(templates)
        }
    }

    /// Every lookup fails with an error of the same kind and message as `error`.
    #[must_use]
    pub fn failing(error: ProcessError) -> Self {
        let (kind, detail): (fn(String) -> ProcessError, String) = match error {
            ProcessError::InvalidRequest(m) => (ProcessError::InvalidRequest, m),
            ProcessError::Unavailable(m) => (ProcessError::Unavailable, m),
            ProcessError::Internal(m) => (ProcessError::Internal, m),
        };
        Self {
            failure: Some(Arc::new(move || kind(detail.clone()))),
            ..Self::new(Vec::new())
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Ids requested by each lookup, in call order.
    #[must_use]
    pub fn requested_ids(&self) -> Vec<Vec<i64>> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl ProcessClient for MockProcessClient {
    async fn list_service_templates(
        &self,
        _ctx: &SecurityContext,
        option: ListServiceTemplateOption,
    ) -> Result<ServiceTemplateList, ProcessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(option.service_template_ids.clone());

        if let Some(failure) = &self.failure {
            return Err(failure());
        }

        let info: Vec<ServiceTemplate> = self
            .templates
            .iter()
            .filter(|t| self.unfiltered || option.service_template_ids.contains(&t.id))
            .cloned()
            .collect();
        Ok(info.into())
    }
}

/// Process client whose lookups never complete.
pub struct PendingProcessClient;

#[async_trait]
impl ProcessClient for PendingProcessClient {
    async fn list_service_templates(
        &self,
        _ctx: &SecurityContext,
        _option: ListServiceTemplateOption,
    ) -> Result<ServiceTemplateList, ProcessError> {
        std::future::pending().await
    }
}

#[derive(Clone, Copy)]
enum Verdict {
    Allow,
    DenyAll,
    ShortResponse,
}

/// Policy decision point recording every request it receives.
///
/// Clones share the recorded requests.
#[derive(Clone)]
pub struct MockAuthZClient {
    verdict: Verdict,
    denied_ids: Arc<Vec<i64>>,
    failure: Option<Arc<dyn Fn() -> AuthZResolverError + Send + Sync>>,
    groups: Arc<Vec<AuthorizedResourceGroup>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<AuthorizeBatchRequest>>>,
    list_params: Arc<Mutex<Vec<ListAuthorizedResourcesParam>>>,
}

impl MockAuthZClient {
    fn with_verdict(verdict: Verdict) -> Self {
        Self {
            verdict,
            denied_ids: Arc::new(Vec::new()),
            failure: None,
            groups: Arc::new(Vec::new()),
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            list_params: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn allow_all() -> Self {
        Self::with_verdict(Verdict::Allow)
    }

    #[must_use]
    pub fn deny_all() -> Self {
        Self::with_verdict(Verdict::DenyAll)
    }

    /// Allows everything except the listed instance ids.
    #[must_use]
    pub fn deny_ids(ids: &[i64]) -> Self {
        Self {
            denied_ids: Arc::new(ids.to_vec()),
            ..Self::allow_all()
        }
    }

    /// Answers with one decision fewer than requested.
    #[must_use]
    pub fn short_response() -> Self {
        Self::with_verdict(Verdict::ShortResponse)
    }

    /// Every call fails with an error of the same kind and message as `error`.
    #[must_use]
    pub fn failing(error: AuthZResolverError) -> Self {
        let (kind, detail): (fn(String) -> AuthZResolverError, String) = match error {
            AuthZResolverError::Unauthorized(m) => (AuthZResolverError::Unauthorized, m),
            AuthZResolverError::ServiceUnavailable(m) => {
                (AuthZResolverError::ServiceUnavailable, m)
            }
            AuthZResolverError::Internal(m) => (AuthZResolverError::Internal, m),
        };
        Self {
            failure: Some(Arc::new(move || kind(detail.clone()))),
            ..Self::allow_all()
        }
    }

    /// Allows everything and lists the given id groups.
    #[must_use]
    pub fn listing(groups: Vec<Vec<&str>>) -> Self {
        Self {
            groups: Arc::new(groups.into_iter().map(|g| g.into_iter().collect()).collect()),
            ..Self::allow_all()
        }
    }

    /// Number of calls of either operation.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn requests(&self) -> Vec<AuthorizeBatchRequest> {
        self.requests.lock().clone()
    }

    #[must_use]
    pub fn list_params(&self) -> Vec<ListAuthorizedResourcesParam> {
        self.list_params.lock().clone()
    }

    fn fail(&self) -> Option<AuthZResolverError> {
        self.failure.as_ref().map(|f| f())
    }
}

#[async_trait]
impl AuthZResolverClient for MockAuthZClient {
    async fn authorize_batch(
        &self,
        request: &AuthorizeBatchRequest,
    ) -> Result<AuthorizeBatchResponse, AuthZResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        if let Some(err) = self.fail() {
            return Err(err);
        }

        let mut decisions: Vec<Decision> = request
            .resources
            .iter()
            .map(|r| {
                if matches!(self.verdict, Verdict::DenyAll)
                    || self.denied_ids.contains(&r.basic.instance_id)
                {
                    Decision::deny("mock_deny", None)
                } else {
                    Decision::allow()
                }
            })
            .collect();
        if matches!(self.verdict, Verdict::ShortResponse) {
            decisions.pop();
        }

        Ok(AuthorizeBatchResponse { decisions })
    }

    async fn list_authorized_resources(
        &self,
        param: &ListAuthorizedResourcesParam,
    ) -> Result<Vec<AuthorizedResourceGroup>, AuthZResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.list_params.lock().push(param.clone());

        if let Some(err) = self.fail() {
            return Err(err);
        }

        Ok(self.groups.as_ref().clone())
    }
}

/// Policy decision point whose calls never complete.
pub struct PendingAuthZClient;

#[async_trait]
impl AuthZResolverClient for PendingAuthZClient {
    async fn authorize_batch(
        &self,
        _request: &AuthorizeBatchRequest,
    ) -> Result<AuthorizeBatchResponse, AuthZResolverError> {
        std::future::pending().await
    }

    async fn list_authorized_resources(
        &self,
        _param: &ListAuthorizedResourcesParam,
    ) -> Result<Vec<AuthorizedResourceGroup>, AuthZResolverError> {
        std::future::pending().await
    }
}
