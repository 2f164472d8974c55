//! Offline step 3: fit the fraud classifier on the joined dataset.

use std::fs::File;

use anyhow::{Context, Result};
use risk_engine::constants;
use risk_engine::dataset::load_labeled_dataset;
use risk_engine::model::save_model;
use risk_engine::training::{train_classifier, TrainingParams};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset_path = constants::training_dataset_path();
    let model_path = constants::model_path();

    let file = File::open(&dataset_path).with_context(|| {
        format!("Failed to open training dataset at {} (run build-dataset first)", dataset_path)
    })?;
    let dataset = load_labeled_dataset(file)?;
    log::info!(
        "Loaded {} rows ({} fraud) from {}",
        dataset.len(),
        dataset.positives(),
        dataset_path
    );

    log::info!("risk-engine v{} training", constants::ENGINE_VERSION);
    let params = TrainingParams::default();
    let model = train_classifier(&dataset, &params)?;
    save_model(&model, &model_path)?;

    log::info!("Model saved ({} trees) -> {}", model.trees.len(), model_path);
    Ok(())
}
