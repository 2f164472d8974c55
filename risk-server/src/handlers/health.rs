//! Health check handler

use axum::{extract::State, Json};

use crate::models::HealthResponse;
use crate::AppState;

/// Always answers; store problems are reported in the body
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let neo4j = match state.store.ping().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => {
            tracing::warn!("Health ping failed: {}", e);
            format!("error: {}", e)
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        neo4j,
        model: "loaded".to_string(),
    })
}
