//! Dense feature matrix with labeled columns.
//!
//! [`FeatureMatrix`] is the common output type of every descriptor function:
//! a row-major `Vec<f64>` of shape `(n_rows, n_cols)` paired with one label
//! per column. Row `i` always corresponds to input sequence `i`.

use crate::error::{PepdescError, Result};

/// A labeled, row-major 2-D feature array.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
    labels: Vec<String>,
}

impl FeatureMatrix {
    /// Create a zero-filled matrix with the given shape and column labels.
    ///
    /// Returns an error if `labels.len() != n_cols`.
    pub fn zeros(n_rows: usize, n_cols: usize, labels: Vec<String>) -> Result<Self> {
        if labels.len() != n_cols {
            return Err(PepdescError::InvalidInput(format!(
                "label count {} does not match column count {}",
                labels.len(),
                n_cols
            )));
        }
        Ok(Self {
            data: vec![0.0; n_rows * n_cols],
            n_rows,
            n_cols,
            labels,
        })
    }

    /// Assemble a matrix from per-sequence rows.
    ///
    /// Every row must have `labels.len()` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>, labels: Vec<String>) -> Result<Self> {
        let n_cols = labels.len();
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(PepdescError::InvalidInput(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
            labels,
        })
    }

    /// Number of rows (sequences).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (descriptors).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(n_rows, n_cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Column labels, parallel to the columns.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The flat row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Row `i` as a slice. Panics if out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Entry at `(row, col)`. Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n_cols + col]
    }

    /// Set entry at `(row, col)`. Panics if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n_cols + col] = value;
    }

    /// Column `j` collected into a `Vec`. Panics if out of bounds.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.n_rows).map(|i| self.get(i, j)).collect()
    }

    /// Mutable view of the flat data (row-major).
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Keep only the columns where `keep[j]` is true.
    ///
    /// The mask is applied to the data and the label list in one pass, so the
    /// two can never drift apart. Surviving columns keep their relative order.
    pub fn retain_columns(&mut self, keep: &[bool]) -> Result<()> {
        if keep.len() != self.n_cols {
            return Err(PepdescError::InvalidInput(format!(
                "keep mask length {} does not match column count {}",
                keep.len(),
                self.n_cols
            )));
        }
        let kept = keep.iter().filter(|&&k| k).count();
        if kept == self.n_cols {
            return Ok(());
        }
        let mut data = Vec::with_capacity(self.n_rows * kept);
        for i in 0..self.n_rows {
            let row = self.row(i);
            for (j, &k) in keep.iter().enumerate() {
                if k {
                    data.push(row[j]);
                }
            }
        }
        let mut idx = 0;
        self.labels.retain(|_| {
            let k = keep[idx];
            idx += 1;
            k
        });
        self.data = data;
        self.n_cols = kept;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zeros_shape_and_labels() {
        let m = FeatureMatrix::zeros(3, 2, labels(&["a", "b"])).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.labels(), &["a".to_string(), "b".to_string()]);
        assert!(m.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zeros_label_mismatch_errors() {
        assert!(FeatureMatrix::zeros(1, 2, labels(&["a"])).is_err());
    }

    #[test]
    fn from_rows_round_trip() {
        let m = FeatureMatrix::from_rows(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            labels(&["x", "y"]),
        )
        .unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.column(1), vec![2.0, 4.0]);
    }

    #[test]
    fn from_rows_ragged_errors() {
        assert!(
            FeatureMatrix::from_rows(vec![vec![1.0], vec![1.0, 2.0]], labels(&["x"])).is_err()
        );
    }

    #[test]
    fn retain_columns_filters_data_and_labels() {
        let mut m = FeatureMatrix::from_rows(
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            labels(&["a", "b", "c"]),
        )
        .unwrap();
        m.retain_columns(&[true, false, true]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.labels(), &["a".to_string(), "c".to_string()]);
        assert_eq!(m.row(0), &[1.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 6.0]);
    }

    #[test]
    fn retain_columns_bad_mask_errors() {
        let mut m = FeatureMatrix::zeros(1, 2, labels(&["a", "b"])).unwrap();
        assert!(m.retain_columns(&[true]).is_err());
    }
}
