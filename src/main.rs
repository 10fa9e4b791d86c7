//! Binary entry point: load configuration and serve the application

use anyhow::Result;
use billed::config::AppConfig;
use billed::server::AppBuilder;
use billed::store::InMemoryBillsStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("BILLED_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default_config(),
    };

    AppBuilder::new()
        .with_config(config)
        .with_store(InMemoryBillsStore::seeded())
        .serve()
        .await
}
