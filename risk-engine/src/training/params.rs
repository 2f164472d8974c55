//! Booster hyperparameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    /// Number of boosting rounds (trees)
    pub n_estimators: usize,
    pub max_depth: usize,
    /// Shrinkage applied to every leaf
    pub learning_rate: f64,
    /// L2 regularization on leaf weights
    pub lambda: f64,
    /// Minimum loss reduction required to split
    pub gamma: f64,
    /// Minimum hessian sum in each child
    pub min_child_weight: f64,
    /// Weight multiplier for fraud rows, counters label imbalance
    pub scale_pos_weight: f64,
    /// Histogram bins per feature
    pub max_bins: usize,
    /// Share of rows held out for evaluation
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: 6,
            learning_rate: 0.3,
            lambda: 1.0,
            gamma: 0.0,
            min_child_weight: 1.0,
            scale_pos_weight: 10.0,
            max_bins: 256,
            test_fraction: 0.25,
            seed: 42,
        }
    }
}

impl TrainingParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.n_estimators == 0 {
            return Err("n_estimators must be at least 1".to_string());
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(format!("learning_rate {} outside (0, 1]", self.learning_rate));
        }
        if self.lambda < 0.0 || self.gamma < 0.0 || self.min_child_weight < 0.0 {
            return Err("lambda, gamma and min_child_weight must be non-negative".to_string());
        }
        if self.scale_pos_weight <= 0.0 {
            return Err("scale_pos_weight must be positive".to_string());
        }
        if !(2..=u16::MAX as usize).contains(&self.max_bins) {
            return Err(format!("max_bins {} outside 2..=65535", self.max_bins));
        }
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(format!("test_fraction {} outside [0, 1)", self.test_fraction));
        }
        Ok(())
    }
}
