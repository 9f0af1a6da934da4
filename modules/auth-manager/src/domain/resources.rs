//! Projection of domain records into permission-check requests.

use ac_security::SecurityContext;
use authz_resolver_sdk::{Action, Basic, ResourceAttribute, ResourceType};
use process_sdk::ServiceTemplate;

/// A domain record that can be checked against the policy decision point.
pub trait AuthResource {
    const RESOURCE_TYPE: ResourceType;

    fn instance_id(&self) -> i64;

    fn name(&self) -> &str;

    /// Owning business, `None` when the record does not carry one.
    fn business_id(&self) -> Option<i64>;
}

impl AuthResource for ServiceTemplate {
    const RESOURCE_TYPE: ResourceType = ResourceType::ServiceTemplate;

    fn instance_id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn business_id(&self) -> Option<i64> {
        self.biz_id
    }
}

/// One request per record, in input order, all scoped to `business_id`.
///
/// The supplier account comes from the caller's context, never from the record.
#[must_use]
pub fn make_resources<R: AuthResource>(
    ctx: &SecurityContext,
    action: Action,
    business_id: i64,
    records: &[R],
) -> Vec<ResourceAttribute> {
    records
        .iter()
        .map(|record| ResourceAttribute {
            basic: Basic {
                action,
                resource_type: R::RESOURCE_TYPE,
                name: record.name().to_owned(),
                instance_id: record.instance_id(),
            },
            supplier_account: ctx.supplier_account().to_owned(),
            business_id,
        })
        .collect()
}
