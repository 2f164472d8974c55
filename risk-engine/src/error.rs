//! Error handling

use std::path::PathBuf;

use crate::features::LayoutMismatchError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(
        "Model file not found at {}. Please train the model first by running:\n  \
         1. export-features\n  \
         2. build-dataset\n  \
         3. train-model",
        .0.display()
    )]
    ModelNotFound(PathBuf),

    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
