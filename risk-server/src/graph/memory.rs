//! In-memory graph store for handler tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use risk_engine::features::{AccountFeatureRow, AccountFeatures};

use super::{GraphStore, HopDepth, StoreError, StoreResult};
use crate::models::{Account, TransactionKind, TransactionSample, TransferEdge};

#[derive(Default)]
pub struct MemoryStore {
    pub accounts: Vec<Account>,
    pub transactions: Vec<TransactionSample>,
    pub transfers: Vec<TransferEdge>,
    /// When set, every call fails with `Unavailable`
    pub failure: Option<String>,
    /// Whether `ping` answers with a row
    pub ping_row: bool,
    pub depths: Mutex<Vec<HopDepth>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { ping_row: true, ..Default::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::new() }
    }

    pub fn with_account(mut self, id: &str, pagerank: f64, degree: i64, betweenness: f64) -> Self {
        self.accounts.push(AccountFeatureRow {
            id: id.to_string(),
            pagerank: Some(pagerank),
            degree: Some(degree),
            betweenness: Some(betweenness),
            community: None,
        });
        self
    }

    pub fn requested_depths(&self) -> Vec<u8> {
        self.depths.lock().unwrap().iter().map(|d| d.get()).collect()
    }

    fn check(&self) -> StoreResult<()> {
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }

    fn take<T: Clone>(items: &[T], limit: i64) -> Vec<T> {
        items.iter().take(limit.max(0) as usize).cloned().collect()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn account_features(&self, account_id: &str) -> StoreResult<Option<AccountFeatures>> {
        self.check()?;
        Ok(self.accounts.iter().find(|a| a.id == account_id).map(|a| a.features()))
    }

    async fn sample_accounts(&self, limit: i64) -> StoreResult<Vec<Account>> {
        self.check()?;
        Ok(Self::take(&self.accounts, limit))
    }

    async fn sample_transactions(&self, kind: TransactionKind, limit: i64) -> StoreResult<Vec<TransactionSample>> {
        self.check()?;
        let matching: Vec<TransactionSample> = self
            .transactions
            .iter()
            .filter(|t| match kind {
                TransactionKind::Any => true,
                TransactionKind::Fraud => t.is_fraud == Some(1),
                TransactionKind::Normal => t.is_fraud.unwrap_or(0) == 0,
            })
            .cloned()
            .collect();
        Ok(Self::take(&matching, limit))
    }

    async fn network(&self, limit: i64) -> StoreResult<Vec<TransferEdge>> {
        self.check()?;
        Ok(Self::take(&self.transfers, limit))
    }

    async fn account_network(&self, account_id: &str, depth: HopDepth, limit: i64) -> StoreResult<Vec<TransferEdge>> {
        self.check()?;
        self.depths.lock().unwrap().push(depth);
        let touching: Vec<TransferEdge> = self
            .transfers
            .iter()
            .filter(|t| t.source.id == account_id || t.target.id == account_id)
            .cloned()
            .collect();
        Ok(Self::take(&touching, limit))
    }

    async fn fraud_network(&self, limit: i64) -> StoreResult<Vec<TransferEdge>> {
        self.check()?;
        let fraud: Vec<TransferEdge> = self
            .transfers
            .iter()
            .filter(|t| t.is_fraud == Some(1))
            .cloned()
            .collect();
        Ok(Self::take(&fraud, limit))
    }

    async fn export_account_features(&self) -> StoreResult<Vec<AccountFeatureRow>> {
        self.check()?;
        Ok(self.accounts.clone())
    }

    async fn ping(&self) -> StoreResult<bool> {
        self.check()?;
        Ok(self.ping_row)
    }
}
