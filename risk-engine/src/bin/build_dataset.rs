//! Offline step 2: join raw transactions with exported account features.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use risk_engine::constants;
use risk_engine::dataset::build_training_dataset;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let transactions_path = constants::raw_transactions_path();
    let features_path = constants::account_features_path();
    let output_path = constants::training_dataset_path();

    let transactions = File::open(&transactions_path)
        .with_context(|| format!("Failed to open transactions at {}", transactions_path))?;
    let features = File::open(&features_path).with_context(|| {
        format!("Failed to open account features at {} (run export-features first)", features_path)
    })?;

    if let Some(parent) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent)?;
    }
    let output = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;

    let stats = build_training_dataset(transactions, features, BufWriter::new(output))?;

    log::info!(
        "Dataset ready with graph features: {} transactions, {} origin / {} destination matches -> {}",
        stats.transactions,
        stats.origin_matched,
        stats.destination_matched,
        output_path
    );
    Ok(())
}
