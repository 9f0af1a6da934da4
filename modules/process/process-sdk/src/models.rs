//! Domain models for the process SDK.

use serde::{Deserialize, Serialize};

/// A service template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTemplate {
    pub id: i64,
    pub name: String,
    /// Owning business. Absent on records written before the field existed.
    #[serde(rename = "bk_biz_id", default, skip_serializing_if = "Option::is_none")]
    pub biz_id: Option<i64>,
    #[serde(default)]
    pub service_category_id: i64,
    #[serde(rename = "bk_supplier_account", default)]
    pub supplier_account: String,
}

impl ServiceTemplate {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, biz_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            biz_id,
            service_category_id: 0,
            supplier_account: String::new(),
        }
    }
}

/// Filter for [`crate::ProcessClient::list_service_templates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListServiceTemplateOption {
    #[serde(rename = "bk_biz_id", default, skip_serializing_if = "Option::is_none")]
    pub biz_id: Option<i64>,
    #[serde(default)]
    pub service_template_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_category_id: Option<i64>,
}

impl ListServiceTemplateOption {
    /// Filter by template ids only.
    #[must_use]
    pub fn by_ids(ids: Vec<i64>) -> Self {
        Self {
            service_template_ids: ids,
            ..Self::default()
        }
    }
}

/// Result of a service template listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTemplateList {
    pub count: u64,
    pub info: Vec<ServiceTemplate>,
}

impl From<Vec<ServiceTemplate>> for ServiceTemplateList {
    fn from(info: Vec<ServiceTemplate>) -> Self {
        Self {
            count: info.len() as u64,
            info,
        }
    }
}
