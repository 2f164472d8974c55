//! Training Module - Offline classifier fitting
//!
//! Stratified split → histogram boosting on the train partition →
//! evaluation on the held-out partition. The returned model carries its
//! evaluation report so the API can expose it.

pub mod bins;
pub mod booster;
pub mod metrics;
pub mod params;
pub mod split;

use crate::dataset::LabeledDataset;
use crate::error::{EngineError, EngineResult};
use crate::model::GradientBoostedClassifier;

pub use metrics::{roc_auc, EvaluationReport};
pub use params::TrainingParams;
pub use split::{stratified_split, Split};

/// Split, fit and evaluate
pub fn train_classifier(
    dataset: &LabeledDataset,
    params: &TrainingParams,
) -> EngineResult<GradientBoostedClassifier> {
    params.validate().map_err(EngineError::Training)?;

    if dataset.is_empty() {
        return Err(EngineError::Training("training dataset is empty".to_string()));
    }

    let split = stratified_split(&dataset.labels, params.test_fraction, params.seed);
    if split.train.is_empty() {
        return Err(EngineError::Training("train partition is empty".to_string()));
    }

    let (train_rows, train_labels) = dataset.select(&split.train);
    log::info!(
        "Training on {} rows ({} fraud), holding out {}",
        train_rows.len(),
        train_labels.iter().filter(|&&l| l == 1).count(),
        split.test.len()
    );

    let mut model = booster::fit(&train_rows, &train_labels, params);

    if !split.test.is_empty() {
        let (test_rows, test_labels) = dataset.select(&split.test);
        let scores: Vec<f64> = test_rows.iter().map(|row| model.predict_row(row)).collect();
        let report = EvaluationReport::compute(&scores, &test_labels);

        match report.roc_auc {
            Some(auc) => log::info!(
                "Held-out ROC AUC {:.4}, precision {:.4}, recall {:.4}",
                auc, report.precision, report.recall
            ),
            None => log::warn!("Held-out partition has a single class; AUC undefined"),
        }
        model.metrics = Some(report);
    }

    Ok(model)
}
