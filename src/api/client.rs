//! HTTP client for the personnel API.
//!
//! Creation endpoints signal success only with `201 Created` and patch
//! endpoints only with `200 OK`; anything else fails the call, and the
//! seeder aborts on the first failure.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ApiError, OrgApi};
use crate::config::Config;
use crate::models::{Branch, OrgType, PersonSpec};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while still failing fast.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Content type for JSON Patch requests.
const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Every seeded record is tagged with the Air Force branch.
const SEED_BRANCH: Branch = Branch::Usaf;

/// API client for the personnel service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client pointed at the configured base URL
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// POST a creation request, requiring a 201 Created response.
    async fn create<B: Serialize>(
        &self,
        operation: &'static str,
        url: &str,
        body: &B,
    ) -> Result<String> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::require_status(operation, StatusCode::CREATED, response).await?;
        Self::read_id(response)
            .await
            .with_context(|| format!("Failed to parse {} response", operation))
    }

    /// PATCH a resource with a JSON Patch body, requiring a 200 OK response.
    /// The body is serialized by hand so the JSON Patch content type is
    /// authoritative.
    async fn patch(&self, operation: &'static str, url: &str, ops: &[PatchOp]) -> Result<String> {
        let body = serde_json::to_vec(ops)?;
        let response = self
            .client
            .patch(url)
            .header(header::CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to send PATCH request to {}", url))?;

        let response = Self::require_status(operation, StatusCode::OK, response).await?;
        Self::read_id(response)
            .await
            .with_context(|| format!("Failed to parse {} response", operation))
    }

    /// Check the response for the one status the API signals success with.
    async fn require_status(
        operation: &'static str,
        expected: StatusCode,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == expected {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::unexpected_status(operation, status, &body))
        }
    }

    async fn read_id(response: reqwest::Response) -> Result<String, ApiError> {
        let created: CreatedResponse = response.json().await?;
        Ok(created.id)
    }
}

#[async_trait]
impl OrgApi for ApiClient {
    async fn create_person(&self, person: &PersonSpec) -> Result<String> {
        let url = format!("{}/person", self.base_url);
        let body = NewPerson::from_spec(person);
        let id = self.create("person create", &url, &body).await?;
        debug!(%id, last_name = %person.last_name, "created person");
        Ok(id)
    }

    async fn create_organization(
        &self,
        org_type: OrgType,
        name: &str,
        parent: Option<&str>,
    ) -> Result<String> {
        let url = format!("{}/organization", self.base_url);
        let body = NewOrganization {
            name,
            members: &[],
            leader: None,
            parent_organization: parent,
            org_type,
            branch_type: SEED_BRANCH,
        };
        let id = self.create("organization create", &url, &body).await?;
        debug!(%id, org = %name, "created organization");
        Ok(id)
    }

    async fn replace_leader(&self, org_id: &str, person_id: &str) -> Result<String> {
        let url = format!("{}/organization/{}", self.base_url, org_id);
        let ops = [PatchOp::replace("/leader", person_id)];
        self.patch("leader patch", &url, &ops).await
    }

    async fn append_member(&self, org_id: &str, person_id: &str) -> Result<String> {
        let url = format!("{}/organization/{}", self.base_url, org_id);
        let ops = [PatchOp::add("/members/-", person_id)];
        self.patch("member patch", &url, &ops).await
    }

    async fn append_subordinates(&self, org_id: &str, unit_ids: &[String]) -> Result<String> {
        let url = format!("{}/organization/{}", self.base_url, org_id);
        let ops = subordinate_ops(unit_ids);
        self.patch("subordinate patch", &url, &ops).await
    }
}

/// One append op per new subordinate, batched into a single patch.
fn subordinate_ops(unit_ids: &[String]) -> Vec<PatchOp> {
    unit_ids
        .iter()
        .map(|id| PatchOp::add("/subordinateOrganizations/-", id))
        .collect()
}

// Internal API request/response types

#[derive(Debug, Serialize)]
struct NewPerson<'a> {
    #[serde(rename = "firstName")]
    first_name: &'a str,
    #[serde(rename = "middleName")]
    middle_name: &'a str,
    #[serde(rename = "lastName")]
    last_name: &'a str,
    rank: &'a str,
    email: &'a str,
    branch: Branch,
}

impl<'a> NewPerson<'a> {
    fn from_spec(spec: &'a PersonSpec) -> Self {
        Self {
            first_name: &spec.first_name,
            middle_name: &spec.middle_name,
            last_name: &spec.last_name,
            rank: &spec.rank,
            email: &spec.email,
            branch: SEED_BRANCH,
        }
    }
}

/// New organizations start with no members and no leader; both are patched
/// in afterwards.
#[derive(Debug, Serialize)]
struct NewOrganization<'a> {
    name: &'a str,
    members: &'a [String],
    leader: Option<&'a str>,
    #[serde(rename = "parentOrganization")]
    parent_organization: Option<&'a str>,
    #[serde(rename = "orgType")]
    org_type: OrgType,
    #[serde(rename = "branchType")]
    branch_type: Branch,
}

/// One JSON Patch operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PatchOp {
    op: PatchVerb,
    path: String,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum PatchVerb {
    Add,
    Replace,
}

impl PatchOp {
    fn add(path: &str, value: &str) -> Self {
        Self {
            op: PatchVerb::Add,
            path: path.to_string(),
            value: value.to_string(),
        }
    }

    fn replace(path: &str, value: &str) -> Self {
        Self {
            op: PatchVerb::Replace,
            path: path.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}
