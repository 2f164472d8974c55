//! Histogram gradient boosting with logistic loss
//!
//! Second-order boosting: every round fits one tree to the per-row
//! gradient `w(p - y)` and hessian `w·p(1 - p)` of the weighted log loss,
//! choosing splits that maximize the regularized gain.

use super::bins::BinnedMatrix;
use super::params::TrainingParams;
use crate::features::FEATURE_COUNT;
use crate::model::{sigmoid, GradientBoostedClassifier, Node, Tree};

const MIN_HESSIAN: f64 = 1e-16;
const PROBABILITY_CLAMP: f64 = 1e-6;

#[derive(Clone, Copy, Default)]
struct GradPair {
    grad: f64,
    hess: f64,
}

struct SplitCandidate {
    feature: usize,
    bin: u16,
    gain: f64,
}

struct TreeBuilder<'a> {
    matrix: &'a BinnedMatrix,
    grads: &'a [GradPair],
    params: &'a TrainingParams,
    nodes: Vec<Node>,
    /// Leaf value reached by each row, filled while building
    row_output: Vec<f64>,
}

impl<'a> TreeBuilder<'a> {
    fn build(mut self, rows: Vec<usize>) -> (Tree, Vec<f64>) {
        self.grow(rows, 0);
        (Tree::new(self.nodes), self.row_output)
    }

    fn grow(&mut self, rows: Vec<usize>, depth: usize) -> u32 {
        let id = self.nodes.len() as u32;
        let total = self.sum(&rows);

        let split = if depth < self.params.max_depth && rows.len() > 1 {
            self.best_split(&rows, total)
        } else {
            None
        };

        let Some(split) = split else {
            let value = self.leaf_value(total);
            for &row in &rows {
                self.row_output[row] = value;
            }
            self.nodes.push(Node::leaf(id, value));
            return id;
        };

        let threshold = self.matrix.bins[split.feature].cuts[split.bin as usize];
        // placeholder, children are patched in once they exist
        self.nodes.push(Node::internal(id, split.feature, threshold, 0, 0));

        let matrix = self.matrix;
        let column = &matrix.columns[split.feature];
        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) =
            rows.into_iter().partition(|&row| column[row] <= split.bin);

        let left = self.grow(left_rows, depth + 1);
        let right = self.grow(right_rows, depth + 1);

        let node = &mut self.nodes[id as usize];
        node.left = left as i32;
        node.right = right as i32;
        id
    }

    fn sum(&self, rows: &[usize]) -> GradPair {
        rows.iter().fold(GradPair::default(), |acc, &row| GradPair {
            grad: acc.grad + self.grads[row].grad,
            hess: acc.hess + self.grads[row].hess,
        })
    }

    fn score(&self, pair: GradPair) -> f64 {
        pair.grad * pair.grad / (pair.hess + self.params.lambda)
    }

    fn leaf_value(&self, pair: GradPair) -> f64 {
        -pair.grad / (pair.hess + self.params.lambda) * self.params.learning_rate
    }

    fn best_split(&self, rows: &[usize], total: GradPair) -> Option<SplitCandidate> {
        let parent_score = self.score(total);
        let mut best: Option<SplitCandidate> = None;

        for feature in 0..FEATURE_COUNT {
            let bins = &self.matrix.bins[feature];
            if bins.cuts.is_empty() {
                continue;
            }

            let column = &self.matrix.columns[feature];
            let mut histogram = vec![GradPair::default(); bins.bin_count()];
            for &row in rows {
                let slot = &mut histogram[column[row] as usize];
                slot.grad += self.grads[row].grad;
                slot.hess += self.grads[row].hess;
            }

            let mut left = GradPair::default();
            for (bin, slot) in histogram.iter().take(bins.cuts.len()).enumerate() {
                left.grad += slot.grad;
                left.hess += slot.hess;
                let right = GradPair {
                    grad: total.grad - left.grad,
                    hess: total.hess - left.hess,
                };

                if left.hess < self.params.min_child_weight
                    || right.hess < self.params.min_child_weight
                {
                    continue;
                }

                let gain = 0.5 * (self.score(left) + self.score(right) - parent_score)
                    - self.params.gamma;

                if gain > 1e-12 && best.as_ref().map_or(true, |b| gain > b.gain) {
                    best = Some(SplitCandidate { feature, bin: bin as u16, gain });
                }
            }
        }

        best
    }
}

/// Log-odds of the weighted positive rate, used as the starting margin
pub fn initial_margin(labels: &[u8], weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let positive: f64 = labels
        .iter()
        .zip(weights)
        .filter(|(&label, _)| label == 1)
        .map(|(_, &w)| w)
        .sum();
    let p = (positive / total).clamp(PROBABILITY_CLAMP, 1.0 - PROBABILITY_CLAMP);
    (p / (1.0 - p)).ln()
}

/// Fit a classifier on the given rows
pub fn fit(
    rows: &[[f64; FEATURE_COUNT]],
    labels: &[u8],
    params: &TrainingParams,
) -> GradientBoostedClassifier {
    let weights: Vec<f64> = labels
        .iter()
        .map(|&label| if label == 1 { params.scale_pos_weight } else { 1.0 })
        .collect();

    let base_score = initial_margin(labels, &weights);
    let matrix = BinnedMatrix::build(rows, params.max_bins);
    let mut margins = vec![base_score; rows.len()];
    let mut trees = Vec::with_capacity(params.n_estimators);

    for round in 0..params.n_estimators {
        let grads: Vec<GradPair> = margins
            .iter()
            .zip(labels)
            .zip(&weights)
            .map(|((&margin, &label), &w)| {
                let p = sigmoid(margin);
                GradPair {
                    grad: w * (p - label as f64),
                    hess: (w * p * (1.0 - p)).max(MIN_HESSIAN),
                }
            })
            .collect();

        let builder = TreeBuilder {
            matrix: &matrix,
            grads: &grads,
            params,
            nodes: Vec::new(),
            row_output: vec![0.0; rows.len()],
        };
        let (tree, outputs) = builder.build((0..rows.len()).collect());

        for (margin, output) in margins.iter_mut().zip(&outputs) {
            *margin += output;
        }

        if (round + 1) % 10 == 0 {
            log::debug!("Boosting round {}/{}: {} nodes", round + 1, params.n_estimators, tree.nodes.len());
        }
        trees.push(tree);
    }

    GradientBoostedClassifier::new(base_score, trees, params.clone())
}
