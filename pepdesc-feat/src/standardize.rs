//! Output-level column standardization and column filtering.
//!
//! These operate on the sample dimension of a [`FeatureMatrix`] (column mean
//! and spread across sequences), as opposed to the per-property z-scoring of
//! reference tables done in [`crate::tables::PropertyTable::standardized`].

use pepdesc_core::{FeatureMatrix, Result};

/// Output standardization mode for the aggregate descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standardize {
    /// Return raw aggregates.
    #[default]
    None,
    /// Per column: subtract mean, divide by population standard deviation.
    Zscore,
    /// Per column: rescale to `[0, 1]` by column min/max.
    MinMax,
}

/// Mask of columns free of NaN entries.
pub(crate) fn non_nan_columns(m: &FeatureMatrix) -> Vec<bool> {
    (0..m.n_cols())
        .map(|j| (0..m.n_rows()).all(|i| !m.get(i, j).is_nan()))
        .collect()
}

/// Mask of columns with at least one non-zero entry.
pub(crate) fn non_zero_columns(m: &FeatureMatrix) -> Vec<bool> {
    (0..m.n_cols())
        .map(|j| (0..m.n_rows()).any(|i| m.get(i, j) != 0.0))
        .collect()
}

/// Apply `mode` to every column in place.
///
/// Callers must have removed NaN columns first and must skip standardization
/// for single-row matrices; constant columns scale to all zeros rather than
/// dividing by zero.
pub(crate) fn apply(m: &mut FeatureMatrix, mode: Standardize) -> Result<()> {
    match mode {
        Standardize::None => Ok(()),
        Standardize::Zscore => {
            zscore_columns(m);
            Ok(())
        }
        Standardize::MinMax => {
            minmax_columns(m);
            Ok(())
        }
    }
}

fn zscore_columns(m: &mut FeatureMatrix) {
    let (n_rows, n_cols) = m.shape();
    let n = n_rows as f64;
    for j in 0..n_cols {
        let col = m.column(j);
        let mean = col.iter().sum::<f64>() / n;
        let var = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = var.sqrt();
        for i in 0..n_rows {
            let v = if std == 0.0 { 0.0 } else { (m.get(i, j) - mean) / std };
            m.set(i, j, v);
        }
    }
}

fn minmax_columns(m: &mut FeatureMatrix) {
    let (n_rows, n_cols) = m.shape();
    for j in 0..n_cols {
        let col = m.column(j);
        let min = col.iter().copied().fold(f64::INFINITY, f64::min);
        let max = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        for i in 0..n_rows {
            let v = if range == 0.0 {
                0.0
            } else {
                (m.get(i, j) - min) / range
            };
            m.set(i, j, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> FeatureMatrix {
        let n = rows[0].len();
        let labels = (0..n).map(|i| format!("c{}", i)).collect();
        FeatureMatrix::from_rows(rows, labels).unwrap()
    }

    #[test]
    fn zscore_columns_center_and_scale() {
        let mut m = matrix(vec![vec![1.0, 10.0], vec![3.0, 30.0], vec![5.0, 50.0]]);
        apply(&mut m, Standardize::Zscore).unwrap();
        for j in 0..2 {
            let col = m.column(j);
            let mean = col.iter().sum::<f64>() / 3.0;
            let var = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 3.0;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn minmax_columns_span_unit_interval() {
        let mut m = matrix(vec![vec![2.0, -1.0], vec![4.0, 0.0], vec![6.0, 3.0]]);
        apply(&mut m, Standardize::MinMax).unwrap();
        for j in 0..2 {
            let col = m.column(j);
            let min = col.iter().copied().fold(f64::INFINITY, f64::min);
            let max = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(min.abs() < 1e-12);
            assert!((max - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_column_scales_to_zero() {
        let mut m = matrix(vec![vec![5.0], vec![5.0]]);
        apply(&mut m, Standardize::Zscore).unwrap();
        assert_eq!(m.column(0), vec![0.0, 0.0]);
    }

    #[test]
    fn masks_flag_nan_and_zero_columns() {
        let m = matrix(vec![vec![1.0, f64::NAN, 0.0], vec![2.0, 3.0, 0.0]]);
        assert_eq!(non_nan_columns(&m), vec![true, false, true]);
        assert_eq!(non_zero_columns(&m), vec![true, true, false]);
    }
}
