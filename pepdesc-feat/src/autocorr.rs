//! Lag-based autocorrelation descriptors: Moran's I, Geary's C, and the
//! normalized Moreau-Broto autocorrelation.
//!
//! All three map each sequence to one scalar per AAIndex1 property, comparing
//! property values at positions `i` and `i + d`. Property vectors are
//! z-scored over the 20 amino acids before use; this is independent of any
//! output-level standardization.

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, PepdescError, Result};
use pepdesc_seq::{Peptide, Span};

use crate::input::{check_lag, indices, min_len, sliced_views};
use crate::tables::PropertyTable;

/// Maximum lag accepted by the autocorrelation descriptors.
pub const MAX_LAG: usize = 30;

enum Kind {
    Moran,
    Geary,
    MoreauBroto,
}

fn autocorrelation(
    seqs: &[Peptide],
    table: &PropertyTable,
    d: usize,
    span: Span,
    kind: Kind,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    check_lag(d, min_len(&views), Some(MAX_LAG))?;
    let table = table.standardized()?;
    let props = table.rows();

    let rows: Vec<Result<Vec<f64>>> = views
        .par_iter()
        .enumerate()
        .map(|(seq_no, view)| {
            let idx = indices(view);
            let len = idx.len();
            props
                .iter()
                .map(|prop| {
                    let p: Vec<f64> = idx.iter().map(|&i| prop[i]).collect();
                    per_property(&p, len, d, &kind, seq_no)
                })
                .collect()
        })
        .collect();

    let rows = rows.into_iter().collect::<Result<Vec<_>>>()?;
    FeatureMatrix::from_rows(rows, table.descriptions().to_vec())
}

fn per_property(p: &[f64], len: usize, d: usize, kind: &Kind, seq_no: usize) -> Result<f64> {
    let n_pairs = (len - d) as f64;
    match kind {
        Kind::MoreauBroto => {
            let ac: f64 = (0..len - d).map(|i| p[i] * p[i + d]).sum();
            Ok(ac / n_pairs)
        }
        Kind::Moran => {
            let mean = p.iter().sum::<f64>() / len as f64;
            let num: f64 =
                (0..len - d).map(|i| (p[i] - mean) * (p[i + d] - mean)).sum::<f64>() / n_pairs;
            let den: f64 =
                p.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / len as f64;
            finite_ratio(num, den, seq_no)
        }
        Kind::Geary => {
            // len >= d + 1 >= 2 is guaranteed by the lag check
            let mean = p.iter().sum::<f64>() / len as f64;
            let num: f64 = (0..len - d)
                .map(|i| (p[i] - p[i + d]).powi(2))
                .sum::<f64>()
                / (2.0 * n_pairs);
            let den: f64 =
                p.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (len - 1) as f64;
            finite_ratio(num, den, seq_no)
        }
    }
}

/// Centered autocorrelation of a homopolymer divides by zero positional
/// variance; reject it rather than letting NaN flow into the output.
fn finite_ratio(num: f64, den: f64, seq_no: usize) -> Result<f64> {
    if den == 0.0 {
        return Err(PepdescError::InvalidInput(format!(
            "sequence {} has zero positional property variance (homopolymeric region)",
            seq_no
        )));
    }
    Ok(num / den)
}

/// Moran's I autocorrelation, one column per property.
///
/// `I = [(1/(L-d)) Σ (p_i - p̄)(p_{i+d} - p̄)] / [(1/L) Σ (p_i - p̄)²]`
///
/// Preconditions: `1 <= d <= 30` and `d` smaller than the shortest sliced
/// sequence.
pub fn moran(
    seqs: &[Peptide],
    table: &PropertyTable,
    d: usize,
    span: Span,
) -> Result<FeatureMatrix> {
    autocorrelation(seqs, table, d, span, Kind::Moran)
}

/// Geary's C autocorrelation, one column per property.
///
/// `C = [(1/(2(L-d))) Σ (p_i - p_{i+d})²] / [(1/(L-1)) Σ (p_i - p̄)²]`
pub fn geary(
    seqs: &[Peptide],
    table: &PropertyTable,
    d: usize,
    span: Span,
) -> Result<FeatureMatrix> {
    autocorrelation(seqs, table, d, span, Kind::Geary)
}

/// Normalized Moreau-Broto autocorrelation, one column per property.
///
/// `AC = (1/(L-d)) Σ p_i · p_{i+d}` — no mean subtraction, normalized only
/// by the number of pairs.
pub fn moreau_broto(
    seqs: &[Peptide],
    table: &PropertyTable,
    d: usize,
    span: Span,
) -> Result<FeatureMatrix> {
    autocorrelation(seqs, table, d, span, Kind::MoreauBroto)
}
