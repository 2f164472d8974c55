//! Model artifact loader
//!
//! Reads and writes the JSON classifier artifact. Loading is strict: a
//! missing file, a format we do not know, a layout mismatch or a broken
//! tree all fail before the model is handed to a caller.

use std::fs;
use std::path::Path;

use super::classifier::{GradientBoostedClassifier, MODEL_FORMAT_VERSION};
use crate::error::{EngineError, EngineResult};
use crate::features::{validate_layout, FEATURE_COUNT, FEATURE_LAYOUT};

/// Load and validate a classifier artifact
pub fn load_model<P: AsRef<Path>>(path: P) -> EngineResult<GradientBoostedClassifier> {
    let path = path.as_ref();
    log::info!("Loading model from: {}", path.display());

    if !path.exists() {
        return Err(EngineError::ModelNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let model: GradientBoostedClassifier = serde_json::from_str(&raw)?;

    if model.format_version != MODEL_FORMAT_VERSION {
        return Err(EngineError::InvalidModel(format!(
            "unsupported format version {} (expected {})",
            model.format_version, MODEL_FORMAT_VERSION
        )));
    }

    validate_layout(model.layout.version, model.layout.hash)?;

    if model.layout.feature_names != FEATURE_LAYOUT {
        return Err(EngineError::InvalidModel(format!(
            "feature names {:?} do not match layout {:?}",
            model.layout.feature_names, FEATURE_LAYOUT
        )));
    }

    if !model.base_score.is_finite() {
        return Err(EngineError::InvalidModel("non-finite base score".to_string()));
    }

    for (i, tree) in model.trees.iter().enumerate() {
        tree.validate(FEATURE_COUNT)
            .map_err(|e| EngineError::InvalidModel(format!("tree {}: {}", i, e)))?;
    }

    log::info!(
        "Model loaded: {} trees, layout v{} ({:08x}), trained at {}",
        model.trees.len(),
        model.layout.version,
        model.layout.hash,
        model.trained_at
    );

    Ok(model)
}

/// Serialize a classifier artifact, creating parent directories as needed
pub fn save_model<P: AsRef<Path>>(model: &GradientBoostedClassifier, path: P) -> EngineResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(model)?;
    fs::write(path, json)?;

    log::info!("Model saved to: {}", path.display());
    Ok(())
}
