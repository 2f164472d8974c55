//! Held-out evaluation metrics

use serde::{Deserialize, Serialize};

/// Decision threshold used for precision/recall reporting
pub const REPORT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub samples: usize,
    pub positives: usize,
    /// `None` when the held-out set contains a single class
    pub roc_auc: Option<f64>,
    pub precision: f64,
    pub recall: f64,
    pub threshold: f64,
}

impl EvaluationReport {
    pub fn compute(scores: &[f64], labels: &[u8]) -> Self {
        let mut true_pos = 0usize;
        let mut false_pos = 0usize;
        let mut false_neg = 0usize;

        for (&score, &label) in scores.iter().zip(labels) {
            match (score >= REPORT_THRESHOLD, label == 1) {
                (true, true) => true_pos += 1,
                (true, false) => false_pos += 1,
                (false, true) => false_neg += 1,
                (false, false) => {}
            }
        }

        Self {
            samples: labels.len(),
            positives: labels.iter().filter(|&&l| l == 1).count(),
            roc_auc: roc_auc(scores, labels),
            precision: ratio(true_pos, true_pos + false_pos),
            recall: ratio(true_pos, true_pos + false_neg),
            threshold: REPORT_THRESHOLD,
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Area under the ROC curve via the rank-sum statistic, ties averaged.
pub fn roc_auc(scores: &[f64], labels: &[u8]) -> Option<f64> {
    let n = scores.len().min(labels.len());
    let positives = labels[..n].iter().filter(|&&l| l == 1).count();
    let negatives = n - positives;
    if positives == 0 || negatives == 0 {
        return None;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut rank_sum = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        // ranks are 1-based; tied block shares the mean rank
        let mean_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            if labels[idx] == 1 {
                rank_sum += mean_rank;
            }
        }
        i = j + 1;
    }

    let p = positives as f64;
    let q = negatives as f64;
    Some((rank_sum - p * (p + 1.0) / 2.0) / (p * q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_ranking() {
        let auc = roc_auc(&[0.1, 0.2, 0.8, 0.9], &[0, 0, 1, 1]).unwrap();
        assert!((auc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_ranking() {
        let auc = roc_auc(&[0.9, 0.8, 0.2, 0.1], &[0, 0, 1, 1]).unwrap();
        assert!(auc.abs() < 1e-12);
    }

    #[test]
    fn test_ties_count_half() {
        let auc = roc_auc(&[0.5, 0.5], &[0, 1]).unwrap();
        assert!((auc - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_class_has_no_auc() {
        assert_eq!(roc_auc(&[0.1, 0.7], &[0, 0]), None);
    }

    #[test]
    fn test_report_precision_recall() {
        let report = EvaluationReport::compute(&[0.9, 0.6, 0.4, 0.1], &[1, 0, 1, 0]);
        assert_eq!(report.samples, 4);
        assert_eq!(report.positives, 2);
        assert!((report.precision - 0.5).abs() < 1e-12);
        assert!((report.recall - 0.5).abs() < 1e-12);
        assert!((report.roc_auc.unwrap() - 0.75).abs() < 1e-12);
    }
}
