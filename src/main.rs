// src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use site_liveness_check::{config::Config, handler::CheckHandler, health::SiteChecker};

#[tokio::main]
async fn main() -> Result<()> {
    // Lambda's log sink stamps each line itself
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_liveness_check=info".parse()?),
        )
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    // Fail fast before the runtime starts polling for events
    let config = Config::load()?;
    info!("Configured to check {}", config.site);

    let checker = Arc::new(SiteChecker::new(&config)?);

    lambda_runtime::run(CheckHandler::new(checker))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
