//! Central Configuration Constants
//!
//! Default locations of the offline pipeline files.
//! Each can be overridden from the environment by the batch binaries.

/// Raw transaction export (one row per historical transfer)
pub const DEFAULT_RAW_TRANSACTIONS_PATH: &str = "data/raw/transactions.csv";

/// Account-level graph metrics dumped from Neo4j
pub const DEFAULT_ACCOUNT_FEATURES_PATH: &str = "data/processed/account_features.csv";

/// Transactions joined with both endpoints' graph metrics
pub const DEFAULT_TRAINING_DATASET_PATH: &str = "data/processed/training_dataset.csv";

/// Serialized classifier consumed by the scoring API
pub const DEFAULT_MODEL_PATH: &str = "models/aml_model.json";

/// Engine version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get raw transactions path from environment or use default
pub fn raw_transactions_path() -> String {
    std::env::var("RAW_TRANSACTIONS_PATH")
        .unwrap_or_else(|_| DEFAULT_RAW_TRANSACTIONS_PATH.to_string())
}

/// Get account features path from environment or use default
pub fn account_features_path() -> String {
    std::env::var("ACCOUNT_FEATURES_PATH")
        .unwrap_or_else(|_| DEFAULT_ACCOUNT_FEATURES_PATH.to_string())
}

/// Get training dataset path from environment or use default
pub fn training_dataset_path() -> String {
    std::env::var("TRAINING_DATASET_PATH")
        .unwrap_or_else(|_| DEFAULT_TRAINING_DATASET_PATH.to_string())
}

/// Get model artifact path from environment or use default
pub fn model_path() -> String {
    std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
