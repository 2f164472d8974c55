//! Configuration module

use std::env;

use risk_engine::constants::{DEFAULT_ACCOUNT_FEATURES_PATH, DEFAULT_MODEL_PATH};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Neo4j bolt URI
    pub neo4j_uri: String,

    pub neo4j_user: String,

    pub neo4j_password: String,

    /// Connection pool size for the graph store
    pub neo4j_max_connections: usize,

    /// Server port
    pub port: u16,

    /// Trained classifier artifact
    pub model_path: String,

    /// Output of the offline feature export
    pub features_export_path: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            neo4j_uri: env::var("NEO4J_URI")
                .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),

            neo4j_user: env::var("NEO4J_USER")
                .unwrap_or_else(|_| "neo4j".to_string()),

            neo4j_password: env::var("NEO4J_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),

            neo4j_max_connections: env::var("NEO4J_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string()),

            features_export_path: env::var("FEATURES_EXPORT_PATH")
                .unwrap_or_else(|_| DEFAULT_ACCOUNT_FEATURES_PATH.to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo4j_uri: "bolt://localhost:7687".to_string(),
            neo4j_user: "neo4j".to_string(),
            neo4j_password: "password".to_string(),
            neo4j_max_connections: 10,
            port: 8000,
            model_path: DEFAULT_MODEL_PATH.to_string(),
            features_export_path: DEFAULT_ACCOUNT_FEATURES_PATH.to_string(),
            environment: "development".to_string(),
        }
    }
}
