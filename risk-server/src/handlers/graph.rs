//! Network visualization handlers

use axum::{extract::{Path, Query, State}, Json};
use serde::Deserialize;

use super::LimitQuery;
use crate::graph::HopDepth;
use crate::models::{AccountNetworkResponse, NetworkResponse};
use crate::{AppResult, AppState};

const NETWORK_LIMIT: i64 = 100;
const ACCOUNT_NETWORK_LIMIT: i64 = 50;
const FRAUD_NETWORK_LIMIT: i64 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct AccountNetworkQuery {
    pub depth: Option<i64>,
    pub limit: Option<i64>,
}

/// Transfer network sample
pub async fn network(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<NetworkResponse>> {
    let transfers = state.store.network(query.resolve(NETWORK_LIMIT)).await?;
    Ok(Json(NetworkResponse::from_transfers(transfers)))
}

/// Neighbourhood of one account
pub async fn account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Query(query): Query<AccountNetworkQuery>,
) -> AppResult<Json<AccountNetworkResponse>> {
    let depth = query.depth.map(HopDepth::clamped).unwrap_or_default();
    let limit = query.limit.unwrap_or(ACCOUNT_NETWORK_LIMIT).max(1);

    let transfers = state.store.account_network(&account_id, depth, limit).await?;
    let network = NetworkResponse::from_transfers(transfers);
    Ok(Json(AccountNetworkResponse::new(account_id, network)))
}

/// Fraud-labeled transfers only
pub async fn fraud_network(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<NetworkResponse>> {
    let transfers = state.store.fraud_network(query.resolve(FRAUD_NETWORK_LIMIT)).await?;
    Ok(Json(NetworkResponse::from_transfers(transfers)))
}
