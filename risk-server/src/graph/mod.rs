//! Graph store - Neo4j access behind a trait
//!
//! Handlers receive an `Arc<dyn GraphStore>` through axum state, so the
//! HTTP layer never touches the driver directly.

pub mod neo4j;
pub mod queries;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use risk_engine::features::{AccountFeatureRow, AccountFeatures};

use crate::models::{Account, TransactionKind, TransactionSample, TransferEdge};

pub use neo4j::Neo4jStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("neo4j: {0}")]
    Neo4j(#[from] neo4rs::Error),

    #[error("unexpected row shape: {0}")]
    Decode(#[from] neo4rs::DeError),

    /// Store reachable at the driver level but not answering queries
    #[error("graph store unavailable: {0}")]
    Unavailable(String),
}

/// Traversal hop count, always within `MIN..=MAX`.
///
/// Variable-length bounds cannot be query parameters, so this is the only
/// value ever formatted into query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopDepth(u8);

impl HopDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HopDepth {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Metrics of one account, `None` when the account does not exist
    async fn account_features(&self, account_id: &str) -> StoreResult<Option<AccountFeatures>>;

    async fn sample_accounts(&self, limit: i64) -> StoreResult<Vec<Account>>;

    async fn sample_transactions(&self, kind: TransactionKind, limit: i64) -> StoreResult<Vec<TransactionSample>>;

    async fn network(&self, limit: i64) -> StoreResult<Vec<TransferEdge>>;

    /// Transfers reachable from `account_id` within `depth` hops, either direction
    async fn account_network(&self, account_id: &str, depth: HopDepth, limit: i64) -> StoreResult<Vec<TransferEdge>>;

    async fn fraud_network(&self, limit: i64) -> StoreResult<Vec<TransferEdge>>;

    /// Every account row, for the offline export
    async fn export_account_features(&self) -> StoreResult<Vec<AccountFeatureRow>>;

    /// Round trip to the store; `false` when it answered without a row
    async fn ping(&self) -> StoreResult<bool>;

    /// Feature lookup used for scoring: unknown accounts get the zero record
    async fn fetch(&self, account_id: &str) -> StoreResult<AccountFeatures> {
        Ok(self.account_features(account_id).await?.unwrap_or_default())
    }
}
