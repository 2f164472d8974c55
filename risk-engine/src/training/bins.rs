//! Quantile histogram binning
//!
//! Each feature gets an ascending list of cut points. A value lands in the
//! first bin whose cut is `>=` it, or in the overflow bin past the last cut.
//! Splitting after bin `b` is therefore the same as `x <= cuts[b]`.

use crate::features::FEATURE_COUNT;

#[derive(Debug, Clone)]
pub struct FeatureBins {
    pub cuts: Vec<f64>,
}

impl FeatureBins {
    /// Derive at most `max_bins - 1` cut points from a column of values.
    pub fn from_column(values: &[f64], max_bins: usize) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut distinct = sorted.clone();
        distinct.dedup();

        let candidates: Vec<f64> = if distinct.len() <= max_bins {
            distinct
        } else {
            let n = sorted.len();
            (1..max_bins).map(|i| sorted[(i * n / max_bins).min(n - 1)]).collect()
        };

        let mut cuts = candidates;
        cuts.dedup();
        // a cut at the maximum value would leave an empty right side
        if let Some(&max) = sorted.last() {
            cuts.retain(|&c| c < max);
        }

        Self { cuts }
    }

    pub fn bin_count(&self) -> usize {
        self.cuts.len() + 1
    }

    pub fn bin_of(&self, value: f64) -> u16 {
        self.cuts.partition_point(|&c| c < value) as u16
    }
}

/// Column-major binned copy of the training rows
#[derive(Debug, Clone)]
pub struct BinnedMatrix {
    pub bins: Vec<FeatureBins>,
    /// `columns[feature][row]`
    pub columns: Vec<Vec<u16>>,
}

impl BinnedMatrix {
    pub fn build(rows: &[[f64; FEATURE_COUNT]], max_bins: usize) -> Self {
        let mut bins = Vec::with_capacity(FEATURE_COUNT);
        let mut columns = Vec::with_capacity(FEATURE_COUNT);

        for feature in 0..FEATURE_COUNT {
            let column: Vec<f64> = rows.iter().map(|row| row[feature]).collect();
            let feature_bins = FeatureBins::from_column(&column, max_bins);
            columns.push(column.iter().map(|&v| feature_bins.bin_of(v)).collect());
            bins.push(feature_bins);
        }

        Self { bins, columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_column_uses_distinct_values() {
        let bins = FeatureBins::from_column(&[3.0, 1.0, 2.0, 2.0, 1.0], 256);
        assert_eq!(bins.cuts, vec![1.0, 2.0]);
        assert_eq!(bins.bin_count(), 3);
        assert_eq!(bins.bin_of(1.0), 0);
        assert_eq!(bins.bin_of(1.5), 1);
        assert_eq!(bins.bin_of(2.0), 1);
        assert_eq!(bins.bin_of(3.0), 2);
    }

    #[test]
    fn test_large_column_is_capped() {
        let values: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
        let bins = FeatureBins::from_column(&values, 16);
        assert!(bins.cuts.len() <= 15);
        assert!(bins.cuts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_constant_column_has_no_cuts() {
        let bins = FeatureBins::from_column(&[0.0; 32], 256);
        assert!(bins.cuts.is_empty());
        assert_eq!(bins.bin_of(0.0), 0);
    }

    #[test]
    fn test_bin_split_matches_threshold() {
        let values = [0.5, 1.0, 4.0, 9.0, 12.0];
        let bins = FeatureBins::from_column(&values, 256);
        for (b, &cut) in bins.cuts.iter().enumerate() {
            for &v in &values {
                assert_eq!(bins.bin_of(v) as usize <= b, v <= cut);
            }
        }
    }
}
