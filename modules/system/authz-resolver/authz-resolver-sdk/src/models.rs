//! Domain models for the `AuthZ` resolver module.

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Action performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Find,
    FindMany,
    Update,
    UpdateMany,
    Delete,
    DeleteMany,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Find => "find",
            Self::FindMany => "find_many",
            Self::Update => "update",
            Self::UpdateMany => "update_many",
            Self::Delete => "delete",
            Self::DeleteMany => "delete_many",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of resource a permission check concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// `process_service_template`
    #[serde(rename = "process_service_template")]
    ServiceTemplate,
    /// `process_service_category`
    #[serde(rename = "process_service_category")]
    ServiceCategory,
    /// `process_service_instance`
    #[serde(rename = "process_service_instance")]
    ServiceInstance,
    SetTemplate,
}

impl ResourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServiceTemplate => "process_service_template",
            Self::ServiceCategory => "process_service_category",
            Self::ServiceInstance => "process_service_instance",
            Self::SetTemplate => "set_template",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the resource and the action requested on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basic {
    pub action: Action,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub name: String,
    pub instance_id: i64,
}

/// One permission check: a resource, the action on it and its scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAttribute {
    #[serde(flatten)]
    pub basic: Basic,
    pub supplier_account: String,
    #[serde(rename = "bk_biz_id")]
    pub business_id: i64,
}

/// The principal a decision is made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub user: String,
    pub supplier_account: String,
}

impl Subject {
    #[must_use]
    pub fn new(user: impl Into<String>, supplier_account: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            supplier_account: supplier_account.into(),
        }
    }
}

/// Batch authorization request. All resources share one business scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeBatchRequest {
    pub subject: Subject,
    #[serde(rename = "bk_biz_id")]
    pub business_id: i64,
    pub resources: Vec<ResourceAttribute>,
    /// Caller's bearer token, forwarded to PDPs that re-check credentials.
    /// Never serialized.
    #[serde(skip)]
    pub bearer_token: Option<SecretString>,
}

/// Reason for an explicit deny from the PDP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenyReason {
    /// Machine-readable error code.
    pub error_code: String,
    /// Human-readable details (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Decision for a single resource of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub authorized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
}

impl Decision {
    #[must_use]
    pub fn allow() -> Self {
        Self {
            authorized: true,
            reason: None,
        }
    }

    #[must_use]
    pub fn deny(error_code: impl Into<String>, details: Option<String>) -> Self {
        Self {
            authorized: false,
            reason: Some(DenyReason {
                error_code: error_code.into(),
                details,
            }),
        }
    }
}

/// Batch authorization response; `decisions[i]` answers `resources[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorizeBatchResponse {
    pub decisions: Vec<Decision>,
}

/// Inverse query: which resources may the principal act on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAuthorizedResourcesParam {
    pub user: String,
    /// Business filter; `0` means any business.
    #[serde(rename = "bk_biz_id")]
    pub biz_id: i64,
    pub resource_type: ResourceType,
    pub action: Action,
    #[serde(skip)]
    pub bearer_token: Option<SecretString>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedResource {
    pub resource_id: String,
}

impl AuthorizedResource {
    #[must_use]
    pub fn new(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
        }
    }
}

/// A group of authorized resources as stored by the PDP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedResourceGroup {
    pub resources: Vec<AuthorizedResource>,
}

impl<S: Into<String>> FromIterator<S> for AuthorizedResourceGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().map(AuthorizedResource::new).collect(),
        }
    }
}
