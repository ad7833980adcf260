//! orgseed - seeds a mock wing hierarchy into a personnel API instance.
//!
//! Runs against a locally running API by default. To route the requests
//! through an authenticating proxy, set `PROXY`, e.g.
//! `PROXY=http://localhost:9000/api/v1 orgseed`.
//!
//! The run either completes with a final log line or aborts on the first
//! failed call, leaving whatever was already created in place.

mod api;
mod config;
mod models;
mod roster;
mod seeder;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::ApiClient;
use config::Config;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env();
    info!(base_url = %config.base_url, "seeding organization tree");

    let client = ApiClient::new(&config)?;
    let root = roster::wing_roster();
    let root_id = seeder::seed_organization(&client, &root, None).await?;

    info!(%root_id, "seeding complete");
    Ok(())
}
