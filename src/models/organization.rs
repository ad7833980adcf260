use serde::{Deserialize, Serialize};

/// Organization categories recognized by the personnel API.
/// Serialized as the uppercased discriminator the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrgType {
    Wing,
    Group,
    Squadron,
    Flight,
    OtherUsaf,
    Organization,
}

/// Service branches recognized by the personnel API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Branch {
    Usaf,
    Usa,
    Usn,
    Usmc,
    Ussf,
    Uscg,
    Other,
}

/// One node of the organization tree to seed.
///
/// Leader and member entries are encoded person strings (see
/// [`crate::models::PersonSpec`]); they are parsed at seed time so a bad
/// entry aborts the run with a pointer at the offending unit. Empty
/// `members`/`units` lists mean the unit has none.
#[derive(Debug, Clone)]
pub struct OrgNode {
    pub name: String,
    pub org_type: OrgType,
    pub leader: Option<String>,
    /// Members in attachment order.
    pub members: Vec<String>,
    /// Subordinate units in creation order.
    pub units: Vec<OrgNode>,
}
