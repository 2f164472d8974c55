//! Graph Risk Server binary
//!
//! Loads the classifier artifact, connects to Neo4j and serves the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risk_server::{config::Config, create_router, graph::Neo4jStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "risk_server=debug,risk_engine=info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Risk server starting...");
    tracing::info!("Neo4j: {}", config.neo4j_uri);

    // Refuse to start without a usable model
    let model = risk_engine::model::load_model(&config.model_path)?;
    tracing::info!(
        "Model loaded: {} trees, layout v{} ({})",
        model.trees.len(),
        model.layout.version,
        config.model_path
    );

    let store = Neo4jStore::connect(&config)
        .await
        .context("Failed to connect to Neo4j")?;

    let state = AppState {
        store: Arc::new(store),
        model: Arc::new(model),
        config: config.clone(),
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
