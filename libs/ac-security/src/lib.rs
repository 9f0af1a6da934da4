#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Request-scoped security context.
//!
//! - [`SecurityContext`] - principal, supplier account, request id, bearer
//!   token and the caller's cancellation token
//! - [`headers`] - identity extraction from inbound HTTP headers

pub mod context;
pub mod headers;

pub use context::{DEFAULT_SUPPLIER_ACCOUNT, SecurityContext, SecurityContextBuilder};
