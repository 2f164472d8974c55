//! Gradient-boosted binary classifier
//!
//! Logistic-loss tree ensemble: `p(fraud) = sigmoid(base_score + Σ tree(x))`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tree::Tree;
use super::{ModelSummary, RiskModel};
use crate::features::{FeatureVector, LayoutInfo};
use crate::training::{EvaluationReport, TrainingParams};

/// Artifact format version written by this crate
pub const MODEL_FORMAT_VERSION: u32 = 1;

pub const MODEL_TYPE: &str = "gradient_boosted_trees";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedClassifier {
    pub format_version: u32,
    pub model_type: String,
    /// Feature layout the trees were fitted against
    pub layout: LayoutInfo,
    /// Starting margin (log-odds)
    pub base_score: f64,
    pub trees: Vec<Tree>,
    pub params: TrainingParams,
    pub trained_at: DateTime<Utc>,
    pub metrics: Option<EvaluationReport>,
}

impl GradientBoostedClassifier {
    pub fn new(base_score: f64, trees: Vec<Tree>, params: TrainingParams) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            model_type: MODEL_TYPE.to_string(),
            layout: LayoutInfo::current(),
            base_score,
            trees,
            params,
            trained_at: Utc::now(),
            metrics: None,
        }
    }

    /// Raw log-odds for a row of feature values
    pub fn margin(&self, values: &[f64]) -> f64 {
        self.base_score + self.trees.iter().map(|tree| tree.predict(values)).sum::<f64>()
    }

    /// Positive-class probability for a row of feature values
    pub fn predict_row(&self, values: &[f64]) -> f64 {
        sigmoid(self.margin(values))
    }

    /// `[p(normal), p(fraud)]`
    pub fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let p = self.predict_row(features.as_slice());
        [1.0 - p, p]
    }
}

impl RiskModel for GradientBoostedClassifier {
    fn fraud_probability(&self, features: &FeatureVector) -> f64 {
        self.predict_proba(features)[1]
    }

    fn summary(&self) -> ModelSummary {
        ModelSummary {
            model_type: self.model_type.clone(),
            layout: self.layout.clone(),
            tree_count: self.trees.len(),
            trained_at: Some(self.trained_at),
            metrics: self.metrics.clone(),
        }
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tree::Node;

    fn amount_model() -> GradientBoostedClassifier {
        let tree = Tree::new(vec![
            Node::internal(0, 0, 1_000.0, 1, 2),
            Node::leaf(1, -2.0),
            Node::leaf(2, 2.0),
        ]);
        GradientBoostedClassifier::new(0.0, vec![tree], TrainingParams::default())
    }

    #[test]
    fn test_sigmoid_bounds() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(40.0) <= 1.0);
        assert!(sigmoid(-40.0) >= 0.0);
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let model = amount_model();
        let features = FeatureVector::from_values([5_000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let [normal, fraud] = model.predict_proba(&features);
        assert!((normal + fraud - 1.0).abs() < 1e-12);
        assert!(fraud > 0.8);
    }

    #[test]
    fn test_fraud_probability_follows_trees() {
        let model = amount_model();
        let low = FeatureVector::from_values([10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let high = FeatureVector::from_values([10_000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(model.fraud_probability(&low) < model.fraud_probability(&high));
        assert!((model.fraud_probability(&low) - sigmoid(-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_summary() {
        let summary = amount_model().summary();
        assert_eq!(summary.model_type, MODEL_TYPE);
        assert_eq!(summary.tree_count, 1);
        assert_eq!(summary.layout, LayoutInfo::current());
        assert!(summary.metrics.is_none());
    }
}
