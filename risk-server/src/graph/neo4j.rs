//! Neo4j-backed graph store
//!
//! `neo4rs::Graph` owns a connection pool. Every query checks a connection
//! out and the row stream hands it back when dropped, including on early
//! returns through `?`.

use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph, Query, Row};
use risk_engine::features::{AccountFeatureRow, AccountFeatures};

use super::{queries, GraphStore, HopDepth, StoreError, StoreResult};
use crate::config::Config;
use crate::models::{Account, GraphNode, TransactionKind, TransactionSample, TransferEdge};

pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Build the connection pool from configuration and check the store answers
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(config.neo4j_uri.as_str())
            .user(config.neo4j_user.as_str())
            .password(config.neo4j_password.as_str())
            .max_connections(config.neo4j_max_connections)
            .build()?;

        let store = Self { graph: Graph::connect(neo4j_config).await? };
        if !store.ping().await? {
            return Err(StoreError::Unavailable(format!("{} returned no row for ping", config.neo4j_uri)));
        }
        Ok(store)
    }

    /// Run a read query and collect every row
    async fn fetch_rows(&self, q: Query) -> StoreResult<Vec<Row>> {
        let mut stream = self.graph.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }
}

fn features_from_row(row: &Row) -> StoreResult<AccountFeatures> {
    Ok(AccountFeatures::from_nullable(
        row.get("pagerank")?,
        row.get("degree")?,
        row.get("betweenness")?,
    ))
}

fn account_from_row(row: &Row) -> StoreResult<Account> {
    Ok(AccountFeatureRow {
        id: row.get("id")?,
        pagerank: row.get("pagerank")?,
        degree: row.get("degree")?,
        betweenness: row.get("betweenness")?,
        community: row.get("community")?,
    })
}

fn transaction_from_row(row: &Row) -> StoreResult<TransactionSample> {
    Ok(TransactionSample {
        name_orig: row.get("nameOrig")?,
        name_dest: row.get("nameDest")?,
        amount: row.get("amount")?,
        tx_type: row.get("type")?,
        step: row.get("step")?,
        is_fraud: row.get("isFraud")?,
    })
}

fn node_from_row(row: &Row, prefix: &str) -> StoreResult<GraphNode> {
    Ok(GraphNode {
        id: row.get(&format!("{}_id", prefix))?,
        pagerank: row.get(&format!("{}_pagerank", prefix))?,
        degree: row.get(&format!("{}_degree", prefix))?,
        community: row.get(&format!("{}_community", prefix))?,
    })
}

fn transfer_from_row(row: &Row) -> StoreResult<TransferEdge> {
    Ok(TransferEdge {
        source: node_from_row(row, "source")?,
        target: node_from_row(row, "target")?,
        amount: row.get("amount")?,
        is_fraud: row.get("is_fraud")?,
    })
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn account_features(&self, account_id: &str) -> StoreResult<Option<AccountFeatures>> {
        let rows = self
            .fetch_rows(query(queries::ACCOUNT_FEATURES).param("id", account_id))
            .await?;

        rows.first().map(features_from_row).transpose()
    }

    async fn sample_accounts(&self, limit: i64) -> StoreResult<Vec<Account>> {
        let rows = self
            .fetch_rows(query(&queries::sample_accounts()).param("limit", limit))
            .await?;
        rows.iter().map(account_from_row).collect()
    }

    async fn sample_transactions(&self, kind: TransactionKind, limit: i64) -> StoreResult<Vec<TransactionSample>> {
        let rows = self
            .fetch_rows(query(&queries::sample_transactions(kind)).param("limit", limit))
            .await?;
        rows.iter().map(transaction_from_row).collect()
    }

    async fn network(&self, limit: i64) -> StoreResult<Vec<TransferEdge>> {
        let rows = self
            .fetch_rows(query(&queries::network()).param("limit", limit))
            .await?;
        rows.iter().map(transfer_from_row).collect()
    }

    async fn account_network(&self, account_id: &str, depth: HopDepth, limit: i64) -> StoreResult<Vec<TransferEdge>> {
        let q = query(&queries::account_network(depth))
            .param("id", account_id)
            .param("limit", limit);
        let rows = self.fetch_rows(q).await?;
        rows.iter().map(transfer_from_row).collect()
    }

    async fn fraud_network(&self, limit: i64) -> StoreResult<Vec<TransferEdge>> {
        let rows = self
            .fetch_rows(query(&queries::fraud_network()).param("limit", limit))
            .await?;
        rows.iter().map(transfer_from_row).collect()
    }

    async fn export_account_features(&self) -> StoreResult<Vec<AccountFeatureRow>> {
        let rows = self.fetch_rows(query(&queries::export_accounts())).await?;
        rows.iter().map(account_from_row).collect()
    }

    async fn ping(&self) -> StoreResult<bool> {
        let rows = self.fetch_rows(query(queries::PING)).await?;
        Ok(!rows.is_empty())
    }
}
