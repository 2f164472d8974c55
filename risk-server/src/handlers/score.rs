//! Scoring handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{ScoreRequest, ScoreResponse};
use crate::scoring::score_transaction;
use crate::{AppResult, AppState};

/// Score one transaction
pub async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> AppResult<Json<ScoreResponse>> {
    req.validate()?;

    let risk_score = score_transaction(state.store.as_ref(), state.model.as_ref(), &req).await?;

    tracing::info!(
        "Scored {} -> {} amount={} risk={:.4}",
        req.name_orig, req.name_dest, req.amount, risk_score
    );
    Ok(Json(ScoreResponse { risk_score }))
}
