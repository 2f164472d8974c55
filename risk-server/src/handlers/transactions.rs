//! Transaction sampling handlers

use axum::{extract::{Query, State}, Json};

use super::LimitQuery;
use crate::models::{TransactionKind, TransactionListResponse};
use crate::{AppResult, AppState};

const DEFAULT_LIMIT: i64 = 10;

async fn sample_kind(
    state: &AppState,
    kind: TransactionKind,
    query: &LimitQuery,
) -> AppResult<Json<TransactionListResponse>> {
    let transactions = state
        .store
        .sample_transactions(kind, query.resolve(DEFAULT_LIMIT))
        .await?;
    Ok(Json(transactions.into()))
}

/// Any transfers
pub async fn sample(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<TransactionListResponse>> {
    sample_kind(&state, TransactionKind::Any, &query).await
}

/// Transfers labeled fraudulent
pub async fn fraud_samples(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<TransactionListResponse>> {
    sample_kind(&state, TransactionKind::Fraud, &query).await
}

/// Transfers labeled normal
pub async fn normal_samples(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<TransactionListResponse>> {
    sample_kind(&state, TransactionKind::Normal, &query).await
}
