//! Graph Risk Engine
//!
//! Shared building blocks for transaction risk scoring:
//! the versioned feature layout, the gradient-boosted classifier and its
//! artifact format, and the offline dataset/training pipeline.

pub mod constants;
pub mod dataset;
pub mod error;
pub mod features;
pub mod model;
pub mod training;

pub use error::{EngineError, EngineResult};
pub use features::{AccountFeatures, FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT};
pub use model::{GradientBoostedClassifier, RiskModel};
