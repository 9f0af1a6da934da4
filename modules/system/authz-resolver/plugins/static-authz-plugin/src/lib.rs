#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static `AuthZ` Resolver Plugin
//!
//! This plugin provides a static, configuration-driven policy for development and testing.
//!
//! ## Mode: `allow_all` (default)
//!
//! Every resource of every batch is authorized. Listing returns no groups.
//!
//! ## Mode: `deny_all`
//!
//! Every resource is denied with error code `static_deny_all`. Listing returns no groups.
//!
//! ## Mode: `grants`
//!
//! A resource is authorized when a configured grant matches the subject, resource type,
//! action and business. Listing returns one group per matching grant.
//!
//! ## Configuration
//!
//! ```yaml
//! static_authz_plugin:
//!   mode: grants
//!   grants:
//!     - user: "admin"
//!       resource_type: process_service_template
//!       action: find_many
//!       biz_id: 2
//!       resource_ids: [12, 7]
//! ```

pub mod config;
pub mod domain;

pub use config::{AuthZMode, Grant, StaticAuthZPluginConfig};
pub use domain::Service;
