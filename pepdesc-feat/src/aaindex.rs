//! AAIndex property aggregation.
//!
//! [`aaindex1`] averages per-residue properties over each sequence;
//! [`aaindex_pairwise`] averages pairwise matrices (AAIndex2 substitution
//! matrices, AAIndex3 contact potentials) over adjacent residue pairs.

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, PepdescError, Result};
use pepdesc_seq::{Peptide, Span};

use crate::input::{indices, min_len, sliced_views};
use crate::standardize::{self, non_nan_columns, non_zero_columns, Standardize};
use crate::tables::{PairwiseSet, PropertyTable};

/// Drop NaN columns, then (when standardizing a multi-row matrix) drop
/// all-zero columns and scale. Single-row matrices skip standardization:
/// a z-score over one sample is undefined.
fn filter_and_standardize(m: &mut FeatureMatrix, mode: Standardize) -> Result<()> {
    m.retain_columns(&non_nan_columns(m))?;
    if mode == Standardize::None || m.n_rows() < 2 {
        return Ok(());
    }
    m.retain_columns(&non_zero_columns(m))?;
    standardize::apply(m, mode)
}

/// Per-sequence mean of every AAIndex1 property.
///
/// Output: one column per surviving property, labeled by its description.
/// Columns containing NaN (undefined table entries observed in the data) are
/// dropped; with `Standardize::Zscore`/`MinMax` and more than one sequence,
/// all-zero columns are additionally dropped before scaling. Column order is
/// preserved across filtering.
pub fn aaindex1(
    seqs: &[Peptide],
    table: &PropertyTable,
    mode: Standardize,
    span: Span,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    let props = table.rows();

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let len = idx.len() as f64;
            props
                .iter()
                .map(|prop| idx.iter().map(|&i| prop[i]).sum::<f64>() / len)
                .collect()
        })
        .collect();

    let mut m = FeatureMatrix::from_rows(rows, table.descriptions().to_vec())?;
    filter_and_standardize(&mut m, mode)?;
    Ok(m)
}

/// Per-sequence mean of every pairwise matrix over adjacent residue pairs.
///
/// Lower-triangular matrices are looked up symmetrically, square matrices in
/// sequence order. Sequences shorter than two residues (after slicing) have
/// no adjacent pairs and are rejected up front rather than yielding a
/// divide-by-zero aggregate.
pub fn aaindex_pairwise(
    seqs: &[Peptide],
    set: &PairwiseSet,
    mode: Standardize,
    span: Span,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    if min_len(&views) < 2 {
        return Err(PepdescError::InvalidInput(
            "pairwise aggregation requires sequences of at least 2 residues".to_string(),
        ));
    }

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let n_pairs = (idx.len() - 1) as f64;
            set.matrices()
                .iter()
                .map(|mat| {
                    idx.windows(2)
                        .map(|w| mat.lookup(w[0], w[1]))
                        .sum::<f64>()
                        / n_pairs
                })
                .collect()
        })
        .collect();

    let labels = set
        .matrices()
        .iter()
        .map(|mat| mat.description().to_string())
        .collect();
    let mut m = FeatureMatrix::from_rows(rows, labels)?;
    filter_and_standardize(&mut m, mode)?;
    Ok(m)
}
