//! Regression tree stored as a flat node array
//!
//! Node 0 is the root. Split nodes send `x[feature] <= threshold` left.
//! Children always sit at a higher index than their parent, which keeps
//! traversal acyclic once [`Tree::validate`] has passed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: u32,
    /// Feature index, -1 for leaves
    pub feature: i32,
    pub threshold: f64,
    pub left: i32,
    pub right: i32,
    /// Output value (learning rate already applied)
    pub leaf: Option<f64>,
}

impl Node {
    pub fn internal(id: u32, feature: usize, threshold: f64, left: u32, right: u32) -> Self {
        Self {
            id,
            feature: feature as i32,
            threshold,
            left: left as i32,
            right: right as i32,
            leaf: None,
        }
    }

    pub fn leaf(id: u32, value: f64) -> Self {
        Self {
            id,
            feature: -1,
            threshold: 0.0,
            left: -1,
            right: -1,
            leaf: Some(value),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Walk from the root to a leaf and return its value.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut index = 0usize;
        while let Some(node) = self.nodes.get(index) {
            if let Some(value) = node.leaf {
                return value;
            }
            let x = features.get(node.feature as usize).copied().unwrap_or(0.0);
            let next = if x <= node.threshold { node.left } else { node.right };
            index = next as usize;
        }
        0.0
    }

    /// Structural check run by the loader before a tree is ever evaluated.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.id as usize != index {
                return Err(format!("node at position {} has id {}", index, node.id));
            }
            if node.is_leaf() {
                continue;
            }
            if node.feature < 0 || node.feature as usize >= feature_count {
                return Err(format!("node {} splits on unknown feature {}", index, node.feature));
            }
            if !node.threshold.is_finite() {
                return Err(format!("node {} has a non-finite threshold", index));
            }
            for child in [node.left, node.right] {
                if child <= index as i32 || child as usize >= self.nodes.len() {
                    return Err(format!("node {} has invalid child {}", index, child));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
impl Tree {
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], index: usize) -> usize {
            match nodes.get(index) {
                Some(node) if !node.is_leaf() => {
                    1 + walk(nodes, node.left as usize).max(walk(nodes, node.right as usize))
                }
                _ => 0,
            }
        }
        walk(&self.nodes, 0)
    }
}
