#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Service template access control.
//!
//! [`AuthManager`] turns service template ids or records into permission
//! checks and submits them, one batch per call, to an
//! [`authz_resolver_sdk::AuthZResolverClient`]:
//!
//! 1. duplicate ids are collapsed and resolved with one
//!    [`process_sdk::ProcessClient`] lookup; unknown ids fail the call
//! 2. the owning business is derived from the records and must be the same
//!    for the whole batch
//! 3. one [`authz_resolver_sdk::ResourceAttribute`] is built per record
//! 4. the batch succeeds only if every resource is authorized
//!
//! The inverse query, [`AuthManager::list_authorized_ids`], lists the
//! resource ids a principal may act on.
//!
//! ```ignore
//! let manager = AuthManager::new(AuthManagerConfig::load("auth.yaml")?, process, authz);
//! manager
//!     .authorize_by_service_template_ids(&ctx, Action::Update, &[12, 7])
//!     .await?;
//! ```

pub mod config;
pub mod domain;

pub use config::AuthManagerConfig;
pub use domain::{
    AuthManager, AuthManagerError, AuthResource, DeniedResource, InconsistentScopeError,
    LookupError, NoPermissionResp, Permission, PermissionResource, PolicyDecisionError,
};
pub use domain::ids::unique_ids;
pub use domain::resources::make_resources;
pub use domain::scope::extract_business_id;

#[cfg(test)]
mod test_support;
