//! Depth-first traversal that mirrors an org tree into the remote API.
//!
//! Creation is pre-order: an organization must exist before a leader,
//! member, or child can reference it. Subordinate linkage is post-order:
//! a unit's subordinate-list patch waits until every child beneath it is
//! fully materialized. Calls are strictly sequential because each one
//! consumes an identifier produced by an earlier one.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use tracing::{debug, info};

use crate::api::OrgApi;
use crate::models::{OrgNode, PersonSpec};

/// Seed `node` and everything beneath it, returning the new organization's
/// remote identifier.
///
/// `parent` is threaded into the creation request so the remote system
/// records the upward link; the downward link is patched in once all
/// children exist. The traversal is recursive and async, hence the boxed
/// future.
pub fn seed_organization<'a, A>(
    api: &'a A,
    node: &'a OrgNode,
    parent: Option<&'a str>,
) -> BoxFuture<'a, Result<String>>
where
    A: OrgApi + Sync,
{
    Box::pin(async move {
        let org_id = api
            .create_organization(node.org_type, &node.name, parent)
            .await
            .with_context(|| format!("creating organization {}", node.name))?;

        if let Some(ref spec) = node.leader {
            let leader: PersonSpec = spec
                .parse()
                .with_context(|| format!("leader of {}", node.name))?;
            let leader_id = api.create_person(&leader).await?;
            api.replace_leader(&org_id, &leader_id).await?;
            debug!(org = %node.name, leader = %leader.last_name, "attached leader");
        }

        // One create + one patch per member; the remote list keeps
        // insertion order only if we attach sequentially.
        for spec in &node.members {
            let member: PersonSpec = spec
                .parse()
                .with_context(|| format!("member of {}", node.name))?;
            let member_id = api.create_person(&member).await?;
            api.append_member(&org_id, &member_id).await?;
        }

        if !node.units.is_empty() {
            let mut unit_ids = Vec::with_capacity(node.units.len());
            for unit in &node.units {
                unit_ids.push(seed_organization(api, unit, Some(&org_id)).await?);
            }
            api.append_subordinates(&org_id, &unit_ids).await?;
        }

        info!(
            org = %node.name,
            id = %org_id,
            members = node.members.len(),
            units = node.units.len(),
            "seeded organization"
        );
        Ok(org_id)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::bail;
    use async_trait::async_trait;

    use super::*;
    use crate::models::{MalformedPersonSpec, OrgType};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        CreateOrg {
            name: String,
            parent: Option<String>,
        },
        CreatePerson {
            last_name: String,
        },
        ReplaceLeader {
            org: String,
            person: String,
        },
        AppendMember {
            org: String,
            person: String,
        },
        AppendSubordinates {
            org: String,
            units: Vec<String>,
        },
    }

    /// Records every call in order; identifiers encode the call index so
    /// tests can check exactly which earlier call produced them.
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<Call>>,
        fail_after: Option<usize>,
    }

    impl RecordingApi {
        fn failing_after(n: usize) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_after: Some(n),
            }
        }

        fn record(&self, call: Call) -> Result<usize> {
            let mut calls = self.calls.lock().unwrap();
            if self.fail_after.is_some_and(|n| calls.len() >= n) {
                bail!("remote call rejected");
            }
            calls.push(call);
            Ok(calls.len() - 1)
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OrgApi for RecordingApi {
        async fn create_person(&self, person: &PersonSpec) -> Result<String> {
            let idx = self.record(Call::CreatePerson {
                last_name: person.last_name.clone(),
            })?;
            Ok(format!("person-{idx}"))
        }

        async fn create_organization(
            &self,
            _org_type: OrgType,
            name: &str,
            parent: Option<&str>,
        ) -> Result<String> {
            let idx = self.record(Call::CreateOrg {
                name: name.to_string(),
                parent: parent.map(str::to_string),
            })?;
            Ok(format!("org-{idx}"))
        }

        async fn replace_leader(&self, org_id: &str, person_id: &str) -> Result<String> {
            self.record(Call::ReplaceLeader {
                org: org_id.to_string(),
                person: person_id.to_string(),
            })?;
            Ok(org_id.to_string())
        }

        async fn append_member(&self, org_id: &str, person_id: &str) -> Result<String> {
            self.record(Call::AppendMember {
                org: org_id.to_string(),
                person: person_id.to_string(),
            })?;
            Ok(org_id.to_string())
        }

        async fn append_subordinates(&self, org_id: &str, unit_ids: &[String]) -> Result<String> {
            self.record(Call::AppendSubordinates {
                org: org_id.to_string(),
                units: unit_ids.to_vec(),
            })?;
            Ok(org_id.to_string())
        }
    }

    fn org(name: &str, org_type: OrgType) -> OrgNode {
        OrgNode {
            name: name.to_string(),
            org_type,
            leader: None,
            members: Vec::new(),
            units: Vec::new(),
        }
    }

    #[tokio::test]
    async fn two_level_tree_issues_the_exact_call_sequence() {
        let mut child = org("137th IS", OrgType::Squadron);
        child.members = vec![
            "SrA Marley Esperanza Windler Adah71@gmail.com".to_string(),
            "SSgt Turner Oren Pouros Danial44@hotmail.com".to_string(),
        ];
        let mut root = org("181st IW", OrgType::Wing);
        root.units = vec![child];

        let api = RecordingApi::default();
        let root_id = seed_organization(&api, &root, None).await.unwrap();

        assert_eq!(root_id, "org-0");
        assert_eq!(
            api.calls(),
            vec![
                Call::CreateOrg {
                    name: "181st IW".to_string(),
                    parent: None,
                },
                Call::CreateOrg {
                    name: "137th IS".to_string(),
                    parent: Some("org-0".to_string()),
                },
                Call::CreatePerson {
                    last_name: "Windler".to_string(),
                },
                Call::AppendMember {
                    org: "org-1".to_string(),
                    person: "person-2".to_string(),
                },
                Call::CreatePerson {
                    last_name: "Pouros".to_string(),
                },
                Call::AppendMember {
                    org: "org-1".to_string(),
                    person: "person-4".to_string(),
                },
                Call::AppendSubordinates {
                    org: "org-0".to_string(),
                    units: vec!["org-1".to_string()],
                },
            ]
        );
    }

    #[tokio::test]
    async fn leader_is_created_before_attachment() {
        let mut node = org("181st MSG", OrgType::Group);
        node.leader = Some("Col SARAH A GRAPESEED SG@AF.MIL".to_string());

        let api = RecordingApi::default();
        seed_organization(&api, &node, None).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                Call::CreateOrg {
                    name: "181st MSG".to_string(),
                    parent: None,
                },
                Call::CreatePerson {
                    last_name: "GRAPESEED".to_string(),
                },
                Call::ReplaceLeader {
                    org: "org-0".to_string(),
                    person: "person-1".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn member_attachment_preserves_input_order() {
        let mut node = org("181st CF", OrgType::Flight);
        node.members = vec![
            "TSgt Jalon Dasia Crona Cielo_Mayert51@hotmail.com".to_string(),
            "MSgt Prudence Marcus Ward Lonny_Turner49@gmail.com".to_string(),
            "SSgt Jovanny Aryanna Parker Keith_Hintz@hotmail.com".to_string(),
        ];

        let api = RecordingApi::default();
        seed_organization(&api, &node, None).await.unwrap();

        let attached: Vec<String> = api
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreatePerson { last_name } => Some(last_name),
                _ => None,
            })
            .collect();
        assert_eq!(attached, vec!["Crona", "Ward", "Parker"]);
    }

    #[tokio::test]
    async fn subordinate_patch_follows_every_descendant() {
        let squadron_a = org("137th IS", OrgType::Squadron);
        let squadron_b = org("137th ISS", OrgType::Squadron);
        let mut group = org("181st ISRG", OrgType::Group);
        group.units = vec![squadron_a, squadron_b];
        let mut wing = org("181st IW", OrgType::Wing);
        wing.units = vec![group];

        let api = RecordingApi::default();
        seed_organization(&api, &wing, None).await.unwrap();

        let calls = api.calls();
        // Both squadrons are created under the group, then the group is
        // patched, then the wing.
        assert_eq!(
            &calls[1..],
            &[
                Call::CreateOrg {
                    name: "181st ISRG".to_string(),
                    parent: Some("org-0".to_string()),
                },
                Call::CreateOrg {
                    name: "137th IS".to_string(),
                    parent: Some("org-1".to_string()),
                },
                Call::CreateOrg {
                    name: "137th ISS".to_string(),
                    parent: Some("org-1".to_string()),
                },
                Call::AppendSubordinates {
                    org: "org-1".to_string(),
                    units: vec!["org-2".to_string(), "org-3".to_string()],
                },
                Call::AppendSubordinates {
                    org: "org-0".to_string(),
                    units: vec!["org-1".to_string()],
                },
            ]
        );
    }

    #[tokio::test]
    async fn childless_unit_issues_no_subordinate_patch() {
        let node = org("137th OSS", OrgType::Squadron);

        let api = RecordingApi::default();
        seed_organization(&api, &node, None).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::CreateOrg {
                name: "137th OSS".to_string(),
                parent: None,
            }]
        );
    }

    #[tokio::test]
    async fn first_failure_stops_the_traversal() {
        let mut child = org("137th IS", OrgType::Squadron);
        child.members = vec![
            "SrA Marley Esperanza Windler Adah71@gmail.com".to_string(),
            "SSgt Turner Oren Pouros Danial44@hotmail.com".to_string(),
        ];
        let mut root = org("181st IW", OrgType::Wing);
        root.units = vec![child];

        // Third call (first person create) is rejected.
        let api = RecordingApi::failing_after(2);
        let err = seed_organization(&api, &root, None).await.unwrap_err();

        assert!(format!("{err:#}").contains("remote call rejected"));
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn malformed_member_spec_aborts_before_any_person_call() {
        let mut node = org("137th IS", OrgType::Squadron);
        node.members = vec!["SrA Bob Jones".to_string()];

        let api = RecordingApi::default();
        let err = seed_organization(&api, &node, None).await.unwrap_err();

        assert!(err.downcast_ref::<MalformedPersonSpec>().is_some());
        assert_eq!(api.calls().len(), 1);
    }
}
