//! Service implementation for the static `AuthZ` resolver plugin.

use authz_resolver_sdk::{
    AuthorizeBatchRequest, AuthorizeBatchResponse, AuthorizedResourceGroup, Decision,
    ListAuthorizedResourcesParam, ResourceAttribute,
};

use crate::config::{AuthZMode, Grant, StaticAuthZPluginConfig};

const DENY_ALL_CODE: &str = "static_deny_all";
const NO_GRANT_CODE: &str = "no_matching_grant";

/// Static `AuthZ` resolver service.
#[derive(Debug, Default)]
pub struct Service {
    config: StaticAuthZPluginConfig,
}

impl Service {
    #[must_use]
    pub fn new(config: StaticAuthZPluginConfig) -> Self {
        Self { config }
    }

    /// Decide every resource of the batch, one decision per resource.
    #[must_use]
    pub fn evaluate(&self, request: &AuthorizeBatchRequest) -> AuthorizeBatchResponse {
        let decisions = request
            .resources
            .iter()
            .map(|resource| self.decide(&request.subject.user, resource))
            .collect();

        AuthorizeBatchResponse { decisions }
    }

    fn decide(&self, user: &str, resource: &ResourceAttribute) -> Decision {
        match self.config.mode {
            AuthZMode::AllowAll => Decision::allow(),
            AuthZMode::DenyAll => Decision::deny(DENY_ALL_CODE, None),
            AuthZMode::Grants => {
                if self.config.grants.iter().any(|g| covers(g, user, resource)) {
                    Decision::allow()
                } else {
                    tracing::debug!(
                        user,
                        resource_type = %resource.basic.resource_type,
                        action = %resource.basic.action,
                        instance_id = resource.basic.instance_id,
                        "no grant covers resource"
                    );
                    Decision::deny(
                        NO_GRANT_CODE,
                        Some(format!(
                            "{user} may not {} {} {}",
                            resource.basic.action,
                            resource.basic.resource_type,
                            resource.basic.instance_id
                        )),
                    )
                }
            }
        }
    }

    /// Resource ids the principal may act on, one group per matching grant.
    #[must_use]
    pub fn list(&self, param: &ListAuthorizedResourcesParam) -> Vec<AuthorizedResourceGroup> {
        if self.config.mode != AuthZMode::Grants {
            return Vec::new();
        }

        self.config
            .grants
            .iter()
            .filter(|g| {
                g.user == param.user
                    && g.resource_type == param.resource_type
                    && g.action == param.action
                    && (param.biz_id == 0 || g.biz_id.is_none_or(|biz| biz == param.biz_id))
            })
            .map(|g| {
                g.resource_ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<AuthorizedResourceGroup>()
            })
            .collect()
    }
}

fn covers(grant: &Grant, user: &str, resource: &ResourceAttribute) -> bool {
    grant.user == user
        && grant.resource_type == resource.basic.resource_type
        && grant.action == resource.basic.action
        && grant.biz_id.is_none_or(|biz| biz == resource.business_id)
        && (grant.resource_ids.is_empty() || grant.resource_ids.contains(&resource.basic.instance_id))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use authz_resolver_sdk::{Action, Basic, ResourceType, Subject};

    fn resource(action: Action, instance_id: i64, business_id: i64) -> ResourceAttribute {
        ResourceAttribute {
            basic: Basic {
                action,
                resource_type: ResourceType::ServiceTemplate,
                name: format!("tpl-{instance_id}"),
                instance_id,
            },
            supplier_account: "0".to_owned(),
            business_id,
        }
    }

    fn request(user: &str, resources: Vec<ResourceAttribute>) -> AuthorizeBatchRequest {
        AuthorizeBatchRequest {
            subject: Subject::new(user, "0"),
            business_id: resources.first().map_or(0, |r| r.business_id),
            resources,
            bearer_token: None,
        }
    }

    fn grant(user: &str, action: Action, biz_id: Option<i64>, ids: &[i64]) -> Grant {
        Grant {
            user: user.to_owned(),
            resource_type: ResourceType::ServiceTemplate,
            action,
            biz_id,
            resource_ids: ids.to_vec(),
        }
    }

    fn grants_service(grants: Vec<Grant>) -> Service {
        Service::new(StaticAuthZPluginConfig {
            mode: AuthZMode::Grants,
            grants,
        })
    }

    #[test]
    fn allow_all_authorizes_every_resource() {
        let service = Service::default();
        let response = service.evaluate(&request(
            "anyone",
            vec![resource(Action::Delete, 1, 2), resource(Action::Delete, 3, 2)],
        ));

        assert_eq!(response.decisions.len(), 2);
        assert!(response.decisions.iter().all(|d| d.authorized));
    }

    #[test]
    fn deny_all_denies_with_code() {
        let service = Service::new(StaticAuthZPluginConfig {
            mode: AuthZMode::DenyAll,
            grants: vec![],
        });
        let response = service.evaluate(&request("admin", vec![resource(Action::Find, 1, 2)]));

        let decision = &response.decisions[0];
        assert!(!decision.authorized);
        assert_eq!(
            decision.reason.as_ref().map(|r| r.error_code.as_str()),
            Some(DENY_ALL_CODE)
        );
    }

    #[test]
    fn grants_decide_per_resource() {
        let service = grants_service(vec![grant("admin", Action::Update, Some(2), &[1, 3])]);
        let response = service.evaluate(&request(
            "admin",
            vec![
                resource(Action::Update, 1, 2),
                resource(Action::Update, 2, 2),
                resource(Action::Update, 3, 2),
            ],
        ));

        let authorized: Vec<bool> = response.decisions.iter().map(|d| d.authorized).collect();
        assert_eq!(authorized, vec![true, false, true]);
    }

    #[test]
    fn grant_scope_and_action_must_match() {
        let service = grants_service(vec![grant("admin", Action::Update, Some(2), &[])]);

        let other_biz = service.evaluate(&request("admin", vec![resource(Action::Update, 1, 5)]));
        let other_action = service.evaluate(&request("admin", vec![resource(Action::Delete, 1, 2)]));
        let other_user = service.evaluate(&request("guest", vec![resource(Action::Update, 1, 2)]));
        let wildcard = service.evaluate(&request("admin", vec![resource(Action::Update, 99, 2)]));

        assert!(!other_biz.decisions[0].authorized);
        assert!(!other_action.decisions[0].authorized);
        assert!(!other_user.decisions[0].authorized);
        assert!(wildcard.decisions[0].authorized);
    }

    #[test]
    fn list_groups_ids_per_grant() {
        let service = grants_service(vec![
            grant("admin", Action::FindMany, None, &[12, 7]),
            grant("admin", Action::FindMany, Some(4), &[3]),
            grant("admin", Action::Update, None, &[100]),
            grant("guest", Action::FindMany, None, &[200]),
        ]);

        let groups = service.list(&ListAuthorizedResourcesParam {
            user: "admin".to_owned(),
            biz_id: 0,
            resource_type: ResourceType::ServiceTemplate,
            action: Action::FindMany,
            bearer_token: None,
        });

        let ids: Vec<Vec<&str>> = groups
            .iter()
            .map(|g| g.resources.iter().map(|r| r.resource_id.as_str()).collect())
            .collect();
        assert_eq!(ids, vec![vec!["12", "7"], vec!["3"]]);
    }

    #[test]
    fn list_filters_by_business() {
        let service = grants_service(vec![
            grant("admin", Action::FindMany, Some(4), &[3]),
            grant("admin", Action::FindMany, Some(5), &[8]),
        ]);

        let groups = service.list(&ListAuthorizedResourcesParam {
            user: "admin".to_owned(),
            biz_id: 5,
            resource_type: ResourceType::ServiceTemplate,
            action: Action::FindMany,
            bearer_token: None,
        });

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].resources[0].resource_id, "8");
    }

    #[test]
    fn list_is_empty_outside_grants_mode() {
        let service = Service::default();

        let groups = service.list(&ListAuthorizedResourcesParam {
            user: "admin".to_owned(),
            biz_id: 0,
            resource_type: ResourceType::ServiceTemplate,
            action: Action::FindMany,
            bearer_token: None,
        });

        assert!(groups.is_empty());
    }
}
