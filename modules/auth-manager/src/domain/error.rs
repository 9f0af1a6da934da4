use std::num::ParseIntError;

use authz_resolver_sdk::{AuthZResolverError, DenyReason, ResourceType};
use process_sdk::ProcessError;
use thiserror::Error;

/// Failure to resolve identifiers into domain records.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("list service templates by ids [{}] failed: {source}", join_ids(ids))]
    Failed {
        ids: Vec<i64>,
        #[source]
        source: ProcessError,
    },

    #[error("service templates not found: [{}]", join_ids(missing))]
    Missing { missing: Vec<i64> },
}

/// Records of one batch belong to different businesses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{resource_type} {instance_id} belongs to business {found}, batch is scoped to business {expected}"
)]
pub struct InconsistentScopeError {
    pub resource_type: ResourceType,
    pub expected: i64,
    pub found: i64,
    pub instance_id: i64,
}

/// A resource the policy decision point refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeniedResource {
    pub resource_type: ResourceType,
    pub instance_id: i64,
    pub name: String,
    pub reason: Option<DenyReason>,
}

#[derive(Error, Debug)]
pub enum PolicyDecisionError {
    #[error("policy evaluation failed: {0}")]
    Evaluation(#[from] AuthZResolverError),

    #[error("access denied to {} resource(s): {}", denied.len(), describe(denied))]
    Denied { denied: Vec<DeniedResource> },

    #[error("policy returned {got} decisions for {expected} resources")]
    MalformedResponse { expected: usize, got: usize },
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(denied: &[DeniedResource]) -> String {
    denied
        .iter()
        .map(|d| format!("{} {}", d.resource_type, d.instance_id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors returned by [`crate::AuthManager`] operations.
///
/// Every variant names the operation it was raised in. Nothing is retried.
#[derive(Error, Debug)]
pub enum AuthManagerError {
    #[error("{op}: {source}")]
    Lookup {
        op: &'static str,
        #[source]
        source: LookupError,
    },

    #[error("{op}: {source}")]
    InconsistentScope {
        op: &'static str,
        #[source]
        source: InconsistentScopeError,
    },

    #[error("{op}: {source}")]
    PolicyDecision {
        op: &'static str,
        #[source]
        source: PolicyDecisionError,
    },

    #[error("{op}: parse resource id '{resource_id}' into int64 failed: {source}")]
    Parse {
        op: &'static str,
        resource_id: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{op}: cancelled by caller")]
    Cancelled { op: &'static str },
}

impl AuthManagerError {
    /// `true` when the policy decision point refused at least one resource,
    /// as opposed to an infrastructure or data failure.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(
            self,
            Self::PolicyDecision {
                source: PolicyDecisionError::Denied { .. },
                ..
            }
        )
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Resources refused by the policy decision point, empty for any other error.
    #[must_use]
    pub fn denied_resources(&self) -> &[DeniedResource] {
        match self {
            Self::PolicyDecision {
                source: PolicyDecisionError::Denied { denied },
                ..
            } => denied,
            _ => &[],
        }
    }

    pub(crate) fn lookup(op: &'static str, source: LookupError) -> Self {
        Self::Lookup { op, source }
    }

    pub(crate) fn inconsistent_scope(op: &'static str, source: InconsistentScopeError) -> Self {
        Self::InconsistentScope { op, source }
    }

    pub(crate) fn policy(op: &'static str, source: impl Into<PolicyDecisionError>) -> Self {
        Self::PolicyDecision {
            op,
            source: source.into(),
        }
    }
}
