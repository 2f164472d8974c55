use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use risk_engine::model::{ModelSummary, Node, Tree};
use risk_engine::training::TrainingParams;
use risk_engine::{FeatureVector, GradientBoostedClassifier, RiskModel};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::graph::memory::MemoryStore;
use crate::models::{GraphNode, TransactionSample, TransferEdge};
use crate::{create_router, AppState};

/// Returns a fixed probability and remembers every vector it was asked about
struct FixedModel {
    probability: f64,
    seen: Mutex<Vec<[f64; 7]>>,
}

impl FixedModel {
    fn new(probability: f64) -> Arc<Self> {
        Arc::new(Self { probability, seen: Mutex::new(Vec::new()) })
    }
}

impl RiskModel for FixedModel {
    fn fraud_probability(&self, features: &FeatureVector) -> f64 {
        self.seen.lock().unwrap().push(*features.as_array());
        self.probability
    }

    fn summary(&self) -> ModelSummary {
        GradientBoostedClassifier::new(0.0, Vec::new(), TrainingParams::default()).summary()
    }
}

fn app(store: Arc<MemoryStore>, model: Arc<dyn RiskModel>) -> Router {
    create_router(AppState { store, model, config: Config::default() })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn node(id: &str) -> GraphNode {
    GraphNode { id: id.to_string(), pagerank: Some(0.2), degree: Some(2), community: Some(1) }
}

fn transfer(source: &str, target: &str, is_fraud: i64) -> TransferEdge {
    TransferEdge { source: node(source), target: node(target), amount: Some(100.0), is_fraud: Some(is_fraud) }
}

fn sample(orig: &str, dest: &str, is_fraud: i64) -> TransactionSample {
    TransactionSample {
        name_orig: orig.to_string(),
        name_dest: dest.to_string(),
        amount: Some(50.0),
        tx_type: Some("TRANSFER".to_string()),
        step: Some(1),
        is_fraud: Some(is_fraud),
    }
}

#[tokio::test]
async fn test_score_passes_features_in_layout_order() {
    let store = Arc::new(
        MemoryStore::new()
            .with_account("C1", 0.15, 3, 0.25)
            .with_account("C2", 0.85, 40, 0.75),
    );
    let model = FixedModel::new(0.37);

    let body = json!({"nameOrig": "C1", "nameDest": "C2", "amount": 9839.64}).to_string();
    let (status, value) = post_json(app(store, model.clone()), "/score", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["risk_score"], json!(0.37));
    assert_eq!(model.seen.lock().unwrap()[0], [9839.64, 0.15, 0.85, 3.0, 40.0, 0.25, 0.75]);
}

#[tokio::test]
async fn test_score_unknown_accounts_use_zero_features() {
    let store = Arc::new(MemoryStore::new());
    let model = FixedModel::new(0.02);

    let body = json!({"nameOrig": "NOPE", "nameDest": "ALSO_NOPE", "amount": 5.0}).to_string();
    let (status, _) = post_json(app(store, model.clone()), "/score", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(model.seen.lock().unwrap()[0], [5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
}

#[tokio::test]
async fn test_score_with_real_classifier_is_probability() {
    let tree = Tree::new(vec![
        Node::internal(0, 0, 1_000.0, 1, 2),
        Node::leaf(1, -3.0),
        Node::leaf(2, 3.0),
    ]);
    let model = Arc::new(GradientBoostedClassifier::new(0.0, vec![tree], TrainingParams::default()));
    let store = Arc::new(MemoryStore::new());

    let body = json!({"nameOrig": "A", "nameDest": "B", "amount": 50_000.0}).to_string();
    let (status, value) = post_json(app(store, model), "/score", body).await;

    assert_eq!(status, StatusCode::OK);
    let score = value["risk_score"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score));
    assert!(score > 0.9);
}

#[tokio::test]
async fn test_score_rejects_malformed_body() {
    let store = Arc::new(MemoryStore::new());
    let model = FixedModel::new(0.5);

    let (status, _) = post_json(app(store.clone(), model.clone()), "/score", "{not json".to_string()).await;
    assert!(status.is_client_error());

    let missing = json!({"nameOrig": "C1", "amount": 1.0}).to_string();
    let (status, _) = post_json(app(store.clone(), model.clone()), "/score", missing).await;
    assert!(status.is_client_error());

    let wrong_type = json!({"nameOrig": "C1", "nameDest": "C2", "amount": "lots"}).to_string();
    let (status, _) = post_json(app(store, model.clone()), "/score", wrong_type).await;
    assert!(status.is_client_error());

    assert!(model.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_score_validation_errors() {
    let store = Arc::new(MemoryStore::new());
    let model = FixedModel::new(0.5);

    let negative = json!({"nameOrig": "C1", "nameDest": "C2", "amount": -1.0}).to_string();
    let (status, value) = post_json(app(store.clone(), model.clone()), "/score", negative).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["status"], json!(400));

    let empty = json!({"nameOrig": "", "nameDest": "C2", "amount": 1.0}).to_string();
    let (status, _) = post_json(app(store, model), "/score", empty).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_score_store_failure_is_500() {
    let store = Arc::new(MemoryStore::failing("connection refused"));
    let body = json!({"nameOrig": "C1", "nameDest": "C2", "amount": 1.0}).to_string();

    let (status, value) = post_json(app(store, FixedModel::new(0.5)), "/score", body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["error"], json!("Graph store error occurred"));
    assert_eq!(value["status"], json!(500));
}

#[tokio::test]
async fn test_accounts_sample_default_and_limit() {
    let mut store = MemoryStore::new();
    for i in 0..15 {
        store = store.with_account(&format!("C{}", i), 0.1, 1, 0.0);
    }
    let store = Arc::new(store);

    let (status, value) = get(app(store.clone(), FixedModel::new(0.0)), "/accounts/sample").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["count"], json!(10));
    assert_eq!(value["accounts"].as_array().unwrap().len(), 10);
    assert_eq!(value["accounts"][0]["id"], json!("C0"));

    let (_, value) = get(app(store.clone(), FixedModel::new(0.0)), "/accounts/sample?limit=3").await;
    assert_eq!(value["count"], json!(3));

    let (_, value) = get(app(store, FixedModel::new(0.0)), "/accounts/sample?limit=0").await;
    assert_eq!(value["count"], json!(1));
}

#[tokio::test]
async fn test_transaction_samples_by_label() {
    let mut store = MemoryStore::new();
    store.transactions = vec![sample("A", "B", 0), sample("B", "C", 1), sample("C", "D", 0)];
    let store = Arc::new(store);

    let (_, all) = get(app(store.clone(), FixedModel::new(0.0)), "/transactions/sample").await;
    assert_eq!(all["count"], json!(3));
    assert_eq!(all["transactions"][0]["nameOrig"], json!("A"));
    assert_eq!(all["transactions"][0]["type"], json!("TRANSFER"));

    let (_, fraud) = get(app(store.clone(), FixedModel::new(0.0)), "/transactions/fraud-samples").await;
    assert_eq!(fraud["count"], json!(1));
    assert_eq!(fraud["transactions"][0]["isFraud"], json!(1));

    let (_, normal) = get(app(store, FixedModel::new(0.0)), "/transactions/normal-samples?limit=1").await;
    assert_eq!(normal["count"], json!(1));
    assert_eq!(normal["transactions"][0]["isFraud"], json!(0));
}

#[tokio::test]
async fn test_network_dedups_nodes() {
    let mut store = MemoryStore::new();
    store.transfers = vec![transfer("A", "B", 0), transfer("B", "C", 1), transfer("A", "C", 0)];
    let store = Arc::new(store);

    let (status, value) = get(app(store.clone(), FixedModel::new(0.0)), "/graph/network").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["count"], json!(3));
    assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(value["edges"][1]["is_fraud"], json!(true));

    let (_, fraud) = get(app(store, FixedModel::new(0.0)), "/graph/fraud-network").await;
    assert_eq!(fraud["count"], json!(1));
    assert_eq!(fraud["edges"][0]["source"], json!("B"));
}

#[tokio::test]
async fn test_account_network_clamps_depth() {
    let mut store = MemoryStore::new();
    store.transfers = vec![transfer("A", "B", 0), transfer("C", "D", 0)];
    let store = Arc::new(store);

    let (status, deep) = get(app(store.clone(), FixedModel::new(0.0)), "/graph/account/A?depth=4").await;
    assert_eq!(status, StatusCode::OK);
    let (_, max) = get(app(store.clone(), FixedModel::new(0.0)), "/graph/account/A?depth=3").await;
    let (_, default) = get(app(store.clone(), FixedModel::new(0.0)), "/graph/account/A").await;

    assert_eq!(deep, max);
    assert_eq!(deep["center_account"], json!("A"));
    assert_eq!(deep["count"], json!(1));
    assert_eq!(store.requested_depths(), vec![3, 3, 1]);
    assert!(default["nodes"].as_array().unwrap().iter().all(|n| n["id"] != json!("C")));
}

#[tokio::test]
async fn test_health_connected() {
    let store = Arc::new(MemoryStore::new());
    let (status, value) = get(app(store, FixedModel::new(0.0)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({"status": "healthy", "neo4j": "connected", "model": "loaded"}));
}

#[tokio::test]
async fn test_health_reports_store_problems_without_failing() {
    let (status, value) = get(app(Arc::new(MemoryStore::failing("refused")), FixedModel::new(0.0)), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], json!("healthy"));
    assert!(value["neo4j"].as_str().unwrap().starts_with("error: "));
    assert!(value["neo4j"].as_str().unwrap().contains("refused"));

    let silent = MemoryStore { ping_row: false, ..MemoryStore::new() };
    let (_, value) = get(app(Arc::new(silent), FixedModel::new(0.0)), "/health").await;
    assert_eq!(value["neo4j"], json!("disconnected"));
}

#[tokio::test]
async fn test_browsing_store_failure_is_500() {
    let store = Arc::new(MemoryStore::failing("down"));
    for uri in ["/accounts/sample", "/transactions/sample", "/graph/network", "/graph/account/A"] {
        let (status, _) = get(app(store.clone(), FixedModel::new(0.0)), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
    }
}

#[tokio::test]
async fn test_model_summary() {
    let store = Arc::new(MemoryStore::new());
    let (status, value) = get(app(store, FixedModel::new(0.0)), "/model").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["model_type"], json!("gradient_boosted_trees"));
    assert_eq!(value["layout"]["feature_count"], json!(7));
}

#[test]
fn test_fetch_defaults_unknown_account() {
    let store = MemoryStore::new();
    let result = tokio_test::block_on(crate::graph::GraphStore::fetch(&store, "missing"));
    let features = tokio_test::assert_ok!(result);
    assert_eq!(features, risk_engine::AccountFeatures::default());
}
