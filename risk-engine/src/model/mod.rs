//! Model Module - Fraud classifier and its artifact
//!
//! The scoring API only sees the [`RiskModel`] trait, so the concrete
//! classifier can be swapped without touching request handling.

pub mod classifier;
pub mod loader;
pub mod tree;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, LayoutInfo};
use crate::training::EvaluationReport;

pub use classifier::{sigmoid, GradientBoostedClassifier, MODEL_FORMAT_VERSION, MODEL_TYPE};
pub use loader::{load_model, save_model};
pub use tree::{Node, Tree};

/// Descriptive information about a loaded model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model_type: String,
    pub layout: LayoutInfo,
    pub tree_count: usize,
    pub trained_at: Option<DateTime<Utc>>,
    pub metrics: Option<EvaluationReport>,
}

/// Trait for fraud classifiers served by the API
pub trait RiskModel: Send + Sync {
    /// Probability mass assigned to the fraud class, in [0, 1]
    fn fraud_probability(&self, features: &FeatureVector) -> f64;

    fn summary(&self) -> ModelSummary;
}
