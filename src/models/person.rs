//! The compact encoded person record used by the seed roster.
//!
//! Every person in the roster is described by a single string of exactly
//! five whitespace-delimited fields: `"RANK FIRST MIDDLE LAST EMAIL"`.
//! Parsing normalizes the handful of rank abbreviations the remote API
//! does not accept verbatim; every other rank token is transmitted as-is.

use std::str::FromStr;

use thiserror::Error;

/// Rank abbreviations rewritten before transmission.
const RANK_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("LtCol", "Lt Col"),
    ("2Lt", "2nd Lt"),
    ("1Lt", "1st Lt"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected 5 whitespace-delimited fields (rank first middle last email), got {found} in {spec:?}")]
pub struct MalformedPersonSpec {
    pub spec: String,
    pub found: usize,
}

/// A person parsed from the encoded roster form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSpec {
    pub rank: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
}

impl FromStr for PersonSpec {
    type Err = MalformedPersonSpec;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = spec.split_whitespace().collect();
        let [rank, first_name, middle_name, last_name, email] = fields[..] else {
            return Err(MalformedPersonSpec {
                spec: spec.to_string(),
                found: fields.len(),
            });
        };

        Ok(Self {
            rank: normalize_rank(rank),
            first_name: first_name.to_string(),
            middle_name: middle_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        })
    }
}

/// Expand the rank abbreviations the API rejects; unknown ranks pass through.
fn normalize_rank(rank: &str) -> String {
    RANK_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == rank)
        .map_or_else(|| rank.to_string(), |(_, to)| (*to).to_string())
}
