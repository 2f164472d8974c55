//! Features Module - Model input schema
//!
//! Account metrics from the graph store and the ordered vector built from them.

pub mod account;
pub mod layout;
pub mod vector;


pub use account::{AccountFeatureRow, AccountFeatures};
pub use layout::{
    layout_hash, validate_layout, LayoutInfo, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};
pub use vector::FeatureVector;
