//! HTTP handlers

pub mod accounts;
pub mod graph;
pub mod health;
pub mod model;
pub mod score;
pub mod transactions;

#[cfg(test)]
mod tests;

use serde::Deserialize;

/// `?limit=` query shared by the sampling endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

impl LimitQuery {
    /// Requested limit, or `default`; never below 1
    pub fn resolve(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).max(1)
    }
}
