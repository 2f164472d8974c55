//! Model info handler

use axum::{extract::State, Json};
use risk_engine::model::ModelSummary;

use crate::AppState;

pub async fn info(State(state): State<AppState>) -> Json<ModelSummary> {
    Json(state.model.summary())
}
