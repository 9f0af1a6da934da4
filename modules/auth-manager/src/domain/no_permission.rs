//! Standard "access denied" payload.

use serde::Serialize;

/// Error code callers return when the principal lacks a permission.
pub const NO_PERMISSION_CODE: i32 = 9_900_403;

const NO_PERMISSION_MESSAGE: &str = "no permission";

/// One missing permission the principal would need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permission {
    pub scope_type: String,
    pub scope_id: String,
    pub scope_name: String,
    pub action_id: String,
    pub action_name: String,
    pub resources: Vec<Vec<PermissionResource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionResource {
    pub resource_type: String,
    pub resource_type_name: String,
    pub resource_id: String,
    pub resource_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoPermissionResp {
    pub result: bool,
    #[serde(rename = "bk_error_code")]
    pub code: i32,
    #[serde(rename = "bk_error_msg")]
    pub error_message: String,
    #[serde(rename = "permission")]
    pub permissions: Vec<Permission>,
}

impl NoPermissionResp {
    #[must_use]
    pub fn new(permissions: Vec<Permission>) -> Self {
        Self {
            result: false,
            code: NO_PERMISSION_CODE,
            error_message: NO_PERMISSION_MESSAGE.to_owned(),
            permissions,
        }
    }
}
