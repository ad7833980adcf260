//! Seeder configuration.
//!
//! The only setting is the API base URL. The `PROXY` environment variable
//! overrides it so a run can be routed through an authenticating proxy;
//! otherwise requests go straight to a locally running instance.

use std::env;

/// Default endpoint of a locally running API instance.
const DEFAULT_BASE_URL: &str = "http://localhost:8088/api/v1";

/// Environment variable that overrides the base URL.
const BASE_URL_ENV_VAR: &str = "PROXY";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url =
            env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
