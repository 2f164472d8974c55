//! Transaction samples

use serde::{Deserialize, Serialize};

/// Which slice of the transfer history to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Any,
    Fraud,
    Normal,
}

/// One historical transfer as stored on the graph edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSample {
    #[serde(rename = "nameOrig")]
    pub name_orig: String,
    #[serde(rename = "nameDest")]
    pub name_dest: String,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub tx_type: Option<String>,
    pub step: Option<i64>,
    #[serde(rename = "isFraud")]
    pub is_fraud: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionSample>,
    pub count: usize,
}

impl From<Vec<TransactionSample>> for TransactionListResponse {
    fn from(transactions: Vec<TransactionSample>) -> Self {
        Self { count: transactions.len(), transactions }
    }
}
