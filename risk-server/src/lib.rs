//! Graph Risk Server
//!
//! Transaction risk scoring over the account transfer graph.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    RISK SERVER (Axum)                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  /score ──► graph features ──► FeatureVector ──► model   │
//! │  /accounts, /transactions, /graph ──► samples / networks │
//! │        │                                     │           │
//! │        ▼                                     ▼           │
//! │  ┌─────────────┐                   ┌──────────────────┐  │
//! │  │   Neo4j     │                   │ GBDT artifact    │  │
//! │  │ (GraphStore)│                   │ (risk-engine)    │  │
//! │  └─────────────┘                   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod handlers;
pub mod models;
pub mod scoring;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use risk_engine::RiskModel;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

use crate::graph::GraphStore;

pub use config::Config;
pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GraphStore>,
    pub model: Arc<dyn RiskModel>,
    pub config: Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/model", get(handlers::model::info))

        // Scoring
        .route("/score", post(handlers::score::score))

        // Browsing
        .route("/accounts/sample", get(handlers::accounts::sample))
        .route("/transactions/sample", get(handlers::transactions::sample))
        .route("/transactions/fraud-samples", get(handlers::transactions::fraud_samples))
        .route("/transactions/normal-samples", get(handlers::transactions::normal_samples))

        // Visualization
        .route("/graph/network", get(handlers::graph::network))
        .route("/graph/account/:id", get(handlers::graph::account))
        .route("/graph/fraud-network", get(handlers::graph::fraud_network));

    let router = api
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let router = if state.config.is_production() {
        router
    } else {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
    };

    router.with_state(state)
}
