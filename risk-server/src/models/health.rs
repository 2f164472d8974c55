//! Health report

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// `connected`, `disconnected` or `error: <message>`
    pub neo4j: String,
    pub model: String,
}
