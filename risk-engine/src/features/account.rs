//! Account graph metrics
//!
//! Two shapes of the same data: the zero-defaulted record used on the
//! scoring path, and the nullable row that the export and dataset files carry.

use serde::{Deserialize, Serialize};

/// Centrality metrics for one account as consumed by the model.
///
/// `Default` is the all-zero record substituted for unknown accounts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountFeatures {
    pub pagerank: f64,
    pub degree: i64,
    pub betweenness: f64,
}

impl AccountFeatures {
    pub fn new(pagerank: f64, degree: i64, betweenness: f64) -> Self {
        Self { pagerank, degree, betweenness }
    }

    /// Build from nullable store values; missing properties become zero.
    pub fn from_nullable(pagerank: Option<f64>, degree: Option<i64>, betweenness: Option<f64>) -> Self {
        Self {
            pagerank: pagerank.unwrap_or(0.0),
            degree: degree.unwrap_or(0),
            betweenness: betweenness.unwrap_or(0.0),
        }
    }
}

/// One row of `account_features.csv`.
///
/// Columns: `id,pagerank,degree,betweenness,community`. Empty cells are nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountFeatureRow {
    pub id: String,
    pub pagerank: Option<f64>,
    pub degree: Option<i64>,
    pub betweenness: Option<f64>,
    pub community: Option<i64>,
}

impl AccountFeatureRow {
    pub fn features(&self) -> AccountFeatures {
        AccountFeatures::from_nullable(self.pagerank, self.degree, self.betweenness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_record() {
        let f = AccountFeatures::default();
        assert_eq!(f.pagerank, 0.0);
        assert_eq!(f.degree, 0);
        assert_eq!(f.betweenness, 0.0);
    }

    #[test]
    fn test_from_nullable_fills_zero() {
        let f = AccountFeatures::from_nullable(Some(0.4), None, None);
        assert_eq!(f, AccountFeatures::new(0.4, 0, 0.0));
    }
}
