//! Remote personnel API surface.
//!
//! `OrgApi` names the five remote operations the seeder depends on;
//! `ApiClient` is the reqwest implementation that talks to a live endpoint.

pub mod client;
pub mod error;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{OrgType, PersonSpec};

pub use client::ApiClient;
pub use error::ApiError;

/// The remote operations the seeder issues, in trait form so the traversal
/// can be exercised against a fake.
///
/// Implementations return only after the remote system has acknowledged the
/// call: the seeder threads returned identifiers straight into later
/// requests.
#[async_trait]
pub trait OrgApi {
    /// Create a person record, returning its new identifier.
    async fn create_person(&self, person: &PersonSpec) -> Result<String>;

    /// Create an organization under `parent`, returning its new identifier.
    async fn create_organization(
        &self,
        org_type: OrgType,
        name: &str,
        parent: Option<&str>,
    ) -> Result<String>;

    /// Replace the organization's leader with `person_id`.
    async fn replace_leader(&self, org_id: &str, person_id: &str) -> Result<String>;

    /// Append `person_id` to the organization's member list.
    async fn append_member(&self, org_id: &str, person_id: &str) -> Result<String>;

    /// Append `unit_ids` to the organization's subordinate list in one
    /// batched patch.
    async fn append_subordinates(&self, org_id: &str, unit_ids: &[String]) -> Result<String>;
}
