//! Service entrypoint: config, pool, metrics exporter, HTTP listener.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use outage_api_server::{db, http, metrics, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing()?;

    let config = Config::from_env()?;

    // Connectivity failure is fatal at startup.
    let pool = db::create_pool(&config.database_url)
        .await
        .context("failed to connect to postgres")?;
    tracing::info!("Connected to postgres");

    // Fire-and-forget: the exporter owns its listener and has no data
    // dependency on request handling.
    if let Err(err) = metrics::install_exporter(config.metrics_addr) {
        tracing::warn!(%err, "prometheus exporter not installed");
    }

    http::run_server(pool, &config).await?;
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
