//! Scoring request/response

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Transaction to score
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScoreRequest {
    #[serde(rename = "nameOrig")]
    #[validate(length(min = 1, message = "nameOrig must not be empty"))]
    pub name_orig: String,

    #[serde(rename = "nameDest")]
    #[validate(length(min = 1, message = "nameDest must not be empty"))]
    pub name_dest: String,

    #[validate(range(min = 0.0, message = "amount must be non-negative"))]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub risk_score: f64,
}
