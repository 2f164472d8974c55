//! Offline step 1: dump account graph metrics from Neo4j to CSV.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risk_engine::dataset::write_account_features;
use risk_server::{config::Config, graph::{GraphStore, Neo4jStore}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let store = Neo4jStore::connect(&config)
        .await
        .context("Failed to connect to Neo4j")?;
    let rows = store.export_account_features().await?;

    let output_path = Path::new(&config.features_export_path);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let written = write_account_features(&rows, BufWriter::new(file))?;

    tracing::info!("Exported {} accounts -> {}", written, output_path.display());
    Ok(())
}
