//! Configuration for the static `AuthZ` resolver plugin.

use authz_resolver_sdk::{Action, ResourceType};
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthZPluginConfig {
    /// Authorization mode.
    pub mode: AuthZMode,

    /// Grants consulted in `grants` mode.
    pub grants: Vec<Grant>,
}

/// Authorization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthZMode {
    /// Authorize everything.
    #[default]
    AllowAll,
    /// Deny everything.
    DenyAll,
    /// Authorize only what a grant covers.
    Grants,
}

/// Permission for one user to perform one action on resources of one type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grant {
    pub user: String,
    pub resource_type: ResourceType,
    pub action: Action,
    /// Business the grant is limited to; any business when absent.
    #[serde(default)]
    pub biz_id: Option<i64>,
    /// Granted instances; every instance when empty.
    #[serde(default)]
    pub resource_ids: Vec<i64>,
}
