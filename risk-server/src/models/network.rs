//! Node/edge collections for graph visualization

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Account as a graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub pagerank: Option<f64>,
    pub degree: Option<i64>,
    pub community: Option<i64>,
}

/// One transfer relationship together with both endpoint accounts,
/// as returned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEdge {
    pub source: GraphNode,
    pub target: GraphNode,
    pub amount: Option<f64>,
    pub is_fraud: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub amount: Option<f64>,
    pub is_fraud: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Number of edges
    pub count: usize,
}

impl NetworkResponse {
    /// Flatten transfer rows into unique nodes (first-seen order) and edges
    pub fn from_transfers(transfers: Vec<TransferEdge>) -> Self {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        let mut edges = Vec::with_capacity(transfers.len());

        for transfer in transfers {
            edges.push(GraphEdge {
                source: transfer.source.id.clone(),
                target: transfer.target.id.clone(),
                amount: transfer.amount,
                is_fraud: transfer.is_fraud.unwrap_or(0) == 1,
            });

            for node in [transfer.source, transfer.target] {
                if seen.insert(node.id.clone()) {
                    nodes.push(node);
                }
            }
        }

        Self { count: edges.len(), nodes, edges }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountNetworkResponse {
    pub center_account: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub count: usize,
}

impl AccountNetworkResponse {
    pub fn new(center_account: String, network: NetworkResponse) -> Self {
        Self {
            center_account,
            nodes: network.nodes,
            edges: network.edges,
            count: network.count,
        }
    }
}
