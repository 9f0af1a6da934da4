#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! `AuthZ` Resolver SDK
//!
//! This crate provides the public API of the policy decision point (PDP):
//!
//! - [`AuthZResolverClient`] - Public API trait for consumers and plugins
//! - [`AuthorizeBatchRequest`], [`AuthorizeBatchResponse`] - Batch decision models
//! - [`ListAuthorizedResourcesParam`], [`AuthorizedResourceGroup`] - Inverse query models
//! - [`ResourceAttribute`], [`Action`], [`ResourceType`] - Canonical permission-check tuple
//! - [`AuthZResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use authz_resolver_sdk::{AuthZResolverClient, AuthorizeBatchRequest, Subject};
//!
//! let response = authz
//!     .authorize_batch(&AuthorizeBatchRequest {
//!         subject: Subject::new("admin", "0"),
//!         business_id: 2,
//!         resources,
//!         bearer_token: ctx.bearer_token().cloned(),
//!     })
//!     .await?;
//!
//! let allowed = response.decisions.iter().all(|d| d.authorized);
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::AuthZResolverClient;
pub use error::AuthZResolverError;
pub use models::{
    Action, AuthorizeBatchRequest, AuthorizeBatchResponse, AuthorizedResource,
    AuthorizedResourceGroup, Basic, Decision, DenyReason, ListAuthorizedResourcesParam,
    ResourceAttribute, ResourceType, Subject,
};
