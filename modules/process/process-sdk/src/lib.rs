#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Process SDK
//!
//! Public contract of the process service as consumed by access control:
//!
//! - [`ProcessClient`] - batch lookup of service templates
//! - [`ServiceTemplate`], [`ListServiceTemplateOption`], [`ServiceTemplateList`] - models
//! - [`ProcessError`] - error types

pub mod api;
pub mod error;
pub mod models;

pub use api::ProcessClient;
pub use error::ProcessError;
pub use models::{ListServiceTemplateOption, ServiceTemplate, ServiceTemplateList};
