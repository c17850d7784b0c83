//! Direct-invocation runner for the isolation scenarios.
//!
//! Test collectors can lose assertion failures raised inside spawned worker
//! tasks; this binary replays every scenario in the main task's call chain so
//! a failure always reaches the exit code. Run with
//! `cargo run -p isolation-tests`.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reqscope_domain::{simulate_concurrent_requests, HarnessConfig, RequestHandler};

const SCENARIOS: &[(&str, &str)] = &[
    ("regular field", "query { viewerId }"),
    ("promised field", "query { viewerId: promiseViewerUserId }"),
    ("dataloader field", "query { viewerId: dataloaderViewerUserId }"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let handler = RequestHandler::new();
    let config = HarnessConfig::default();

    for &(name, query) in SCENARIOS {
        info!(scenario = name, "running");
        simulate_concurrent_requests(&handler, query, &config)
            .await
            .with_context(|| format!("scenario '{name}' detected cross-request leakage"))?;
    }

    info!("all scenarios passed");
    Ok(())
}
