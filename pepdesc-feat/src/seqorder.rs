//! Sequence-order descriptors: the sequence-order-coupling number (SOCN) and
//! quasi-sequence-order (QSO).
//!
//! Both are derived from 20×20 amino-acid distance matrices (Chou, 2000).
//! The paired entry points compute against the Schneider-Wrede and Grantham
//! matrices in one call, returning two parallel matrices; the `*_matrix`
//! variants take a single caller-supplied matrix.

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, Result};
use pepdesc_seq::{Peptide, Span};

use crate::composition::counts;
use crate::input::{aa_labels, check_lag, check_weight, indices, min_len, sliced_views};
use crate::standardize::non_zero_columns;
use crate::tables::DistanceMatrix;

/// Per-sequence coupling numbers for lags `1..=d`:
/// `socn_n = Σ_j distance(s_j, s_{j+n})²`.
fn coupling_numbers(idx: &[usize], d: usize, matrix: &DistanceMatrix) -> Vec<f64> {
    (1..=d)
        .map(|n| {
            (0..idx.len() - n)
                .map(|j| matrix.get(idx[j], idx[j + n]).powi(2))
                .sum()
        })
        .collect()
}

/// Sequence-order-coupling numbers against a single distance matrix.
///
/// Output: `d` columns labeled `d1..dd`. Precondition: `d` smaller than the
/// shortest sliced sequence.
pub fn socn_matrix(
    seqs: &[Peptide],
    matrix: &DistanceMatrix,
    d: usize,
    span: Span,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    check_lag(d, min_len(&views), None)?;

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| coupling_numbers(&indices(view), d, matrix))
        .collect();
    FeatureMatrix::from_rows(rows, lag_labels(d))
}

/// SOCN against the built-in Schneider-Wrede and Grantham matrices.
///
/// Returns the two parallel matrices in that order.
pub fn socn(
    seqs: &[Peptide],
    d: usize,
    span: Span,
) -> Result<(FeatureMatrix, FeatureMatrix)> {
    let sw = socn_matrix(seqs, &DistanceMatrix::schneider_wrede(), d, span)?;
    let g = socn_matrix(seqs, &DistanceMatrix::grantham(), d, span)?;
    Ok((sw, g))
}

/// Quasi-sequence-order against a single distance matrix.
///
/// Output: `20 + d` columns — `count(aa)/(1+w·Σsocn)` for the 20 amino acids
/// followed by `(w·socn_n)/(1+w·Σsocn)` per lag.
pub fn qso_matrix(
    seqs: &[Peptide],
    matrix: &DistanceMatrix,
    d: usize,
    w: f64,
    span: Span,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    check_lag(d, min_len(&views), None)?;
    check_weight(w)?;

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let socn = coupling_numbers(&idx, d, matrix);
            let denom = 1.0 + w * socn.iter().sum::<f64>();
            let mut row: Vec<f64> = counts(view).iter().map(|&c| c / denom).collect();
            row.extend(socn.iter().map(|&s| (w * s) / denom));
            row
        })
        .collect();

    let mut labels = aa_labels();
    labels.extend(lag_labels(d));
    FeatureMatrix::from_rows(rows, labels)
}

/// QSO against the built-in Schneider-Wrede and Grantham matrices.
///
/// With `remove_zero_cols`, the keep-mask is computed on the Schneider-Wrede
/// matrix and applied to both outputs so the two stay column-aligned.
pub fn qso(
    seqs: &[Peptide],
    d: usize,
    w: f64,
    remove_zero_cols: bool,
    span: Span,
) -> Result<(FeatureMatrix, FeatureMatrix)> {
    let mut sw = qso_matrix(seqs, &DistanceMatrix::schneider_wrede(), d, w, span)?;
    let mut g = qso_matrix(seqs, &DistanceMatrix::grantham(), d, w, span)?;
    if remove_zero_cols {
        let keep = non_zero_columns(&sw);
        sw.retain_columns(&keep)?;
        g.retain_columns(&keep)?;
    }
    Ok((sw, g))
}

fn lag_labels(d: usize) -> Vec<String> {
    (1..=d).map(|n| format!("d{}", n)).collect()
}
