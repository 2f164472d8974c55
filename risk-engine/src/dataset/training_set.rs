//! Joined dataset → model input
//!
//! Only the layout columns and the label are read; any other column is
//! ignored. Empty or non-finite feature cells are imputed to zero.

use std::io::Read;

use serde::Deserialize;

use super::LabeledDataset;
use crate::error::{EngineError, EngineResult};
use crate::features::FeatureVector;

#[derive(Debug, Deserialize)]
struct TrainingRow {
    amount: Option<f64>,
    src_pagerank: Option<f64>,
    dst_pagerank: Option<f64>,
    // float so "3.0" style cells survive
    src_degree: Option<f64>,
    dst_degree: Option<f64>,
    src_betweenness: Option<f64>,
    dst_betweenness: Option<f64>,
    #[serde(rename = "isFraud")]
    is_fraud: u8,
}

impl TrainingRow {
    /// Place every column by name, so file column order never matters
    fn to_vector(&self) -> FeatureVector {
        let mut vector = FeatureVector::new();
        let named = [
            ("amount", self.amount),
            ("src_pagerank", self.src_pagerank),
            ("dst_pagerank", self.dst_pagerank),
            ("src_degree", self.src_degree),
            ("dst_degree", self.dst_degree),
            ("src_betweenness", self.src_betweenness),
            ("dst_betweenness", self.dst_betweenness),
        ];
        for (name, value) in named {
            vector.set_by_name(name, value.filter(|v| v.is_finite()).unwrap_or(0.0));
        }
        vector
    }
}

/// Read the joined training dataset
pub fn load_labeled_dataset<R: Read>(reader: R) -> EngineResult<LabeledDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut dataset = LabeledDataset::default();

    for (line, record) in csv_reader.deserialize::<TrainingRow>().enumerate() {
        let row = record?;
        if row.is_fraud > 1 {
            return Err(EngineError::Dataset(format!(
                "row {}: label must be 0 or 1, got {}",
                line + 1,
                row.is_fraud
            )));
        }
        dataset.rows.push(*row.to_vector().as_array());
        dataset.labels.push(row.is_fraud);
    }

    Ok(dataset)
}
