//! Account browsing handlers

use axum::{extract::{Query, State}, Json};

use super::LimitQuery;
use crate::models::AccountListResponse;
use crate::{AppResult, AppState};

const DEFAULT_LIMIT: i64 = 10;

/// Sample accounts with their graph metrics
pub async fn sample(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<AccountListResponse>> {
    let accounts = state.store.sample_accounts(query.resolve(DEFAULT_LIMIT)).await?;
    Ok(Json(accounts.into()))
}
