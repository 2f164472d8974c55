//! Account browsing

use serde::Serialize;

/// Account with its graph metrics, as exported and as browsed
pub use risk_engine::features::AccountFeatureRow as Account;

#[derive(Debug, Serialize)]
pub struct AccountListResponse {
    pub accounts: Vec<Account>,
    pub count: usize,
}

impl From<Vec<Account>> for AccountListResponse {
    fn from(accounts: Vec<Account>) -> Self {
        Self { count: accounts.len(), accounts }
    }
}
