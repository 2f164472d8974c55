//! Transaction scoring: graph lookup, feature assembly, inference

use risk_engine::{FeatureVector, RiskModel};

use crate::graph::{GraphStore, StoreResult};
use crate::models::ScoreRequest;

/// Fraud probability for one transfer.
///
/// Accounts missing from the graph contribute all-zero features.
pub async fn score_transaction(
    store: &dyn GraphStore,
    model: &dyn RiskModel,
    request: &ScoreRequest,
) -> StoreResult<f64> {
    let src = store.fetch(&request.name_orig).await?;
    let dst = store.fetch(&request.name_dest).await?;

    let features = FeatureVector::assemble(request.amount, &src, &dst);
    tracing::debug!(features = %features.to_log_entry(), "scoring transaction");

    Ok(model.fraud_probability(&features).clamp(0.0, 1.0))
}
