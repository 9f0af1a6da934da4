//! Per-resource-kind authorization entry points of [`crate::AuthManager`].

mod service_template;
