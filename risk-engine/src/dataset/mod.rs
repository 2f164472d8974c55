//! Dataset Module - Offline pipeline files
//!
//! - `export`: the account feature CSV written from the graph store
//! - `join`: transactions enriched with both endpoints' features
//! - `training_set`: the joined file read back as model input

pub mod export;
pub mod join;
pub mod training_set;

use crate::features::FEATURE_COUNT;

pub use export::write_account_features;
pub use join::{build_training_dataset, JoinStats};
pub use training_set::load_labeled_dataset;

/// Feature rows and their fraud labels, index-aligned
#[derive(Debug, Clone, Default)]
pub struct LabeledDataset {
    pub rows: Vec<[f64; FEATURE_COUNT]>,
    pub labels: Vec<u8>,
}

impl LabeledDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }

    /// Copy out the given rows
    pub fn select(&self, indices: &[usize]) -> (Vec<[f64; FEATURE_COUNT]>, Vec<u8>) {
        indices
            .iter()
            .map(|&i| (self.rows[i], self.labels[i]))
            .unzip()
    }
}
