//! Amino-acid composition and composition entropy.
//!
//! The composition vector is the building block the pseudo-composition and
//! quasi-sequence-order descriptors weight by their correlation factors.

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, Result};
use pepdesc_seq::{Peptide, Span};

use crate::input::{aa_labels, indices, sliced_views};

/// Absolute counts or length-relative fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositionMode {
    /// Raw residue counts; each row sums to the sequence length.
    Absolute,
    /// Counts divided by sequence length; each row sums to 1.
    #[default]
    Relative,
}

/// Residue counts for one sequence view, in alphabet order.
pub(crate) fn counts(view: &[u8]) -> [f64; 20] {
    let mut c = [0.0f64; 20];
    for idx in indices(view) {
        c[idx] += 1.0;
    }
    c
}

/// Amino-acid composition of each sequence (20 columns, labels `A`..`Y`).
pub fn aac(seqs: &[Peptide], mode: CompositionMode, span: Span) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let mut row = counts(view);
            if mode == CompositionMode::Relative {
                let len = view.len() as f64;
                for v in row.iter_mut() {
                    *v /= len;
                }
            }
            row.to_vec()
        })
        .collect();
    FeatureMatrix::from_rows(rows, aa_labels())
}

/// Shannon entropy (bits) of each sequence's residue composition.
///
/// Single column, label `entropy`. A homopolymer scores 0; the maximum for
/// the 20-letter alphabet is `log2(20)`.
pub fn entropy(seqs: &[Peptide], span: Span) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let len = view.len() as f64;
            let h: f64 = counts(view)
                .iter()
                .filter(|&&c| c > 0.0)
                .map(|&c| {
                    let p = c / len;
                    -p * p.log2()
                })
                .sum();
            vec![h]
        })
        .collect();
    FeatureMatrix::from_rows(rows, vec!["entropy".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_row_sums_to_length() {
        let seqs = Peptide::from_strs(["ARKLY", "EERKPGL"]).unwrap();
        let m = aac(&seqs, CompositionMode::Absolute, Span::default()).unwrap();
        assert_eq!(m.shape(), (2, 20));
        assert_eq!(m.row(0).iter().sum::<f64>(), 5.0);
        assert_eq!(m.row(1).iter().sum::<f64>(), 7.0);
    }

    #[test]
    fn relative_row_sums_to_one() {
        let seqs = Peptide::from_strs(["EERKPGL"]).unwrap();
        let m = aac(&seqs, CompositionMode::Relative, Span::default()).unwrap();
        assert!((m.row(0).iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn counts_land_in_alphabet_order() {
        let seqs = Peptide::from_strs(["AAC"]).unwrap();
        let m = aac(&seqs, CompositionMode::Absolute, Span::default()).unwrap();
        assert_eq!(m.get(0, 0), 2.0); // A
        assert_eq!(m.get(0, 1), 1.0); // C
        assert_eq!(m.labels()[0], "A");
    }

    #[test]
    fn span_restricts_counted_region() {
        let seqs = Peptide::from_strs(["ARKLY"]).unwrap();
        let m = aac(&seqs, CompositionMode::Absolute, Span::new(2, Some(4))).unwrap();
        assert_eq!(m.row(0).iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn entropy_of_homopolymer_is_zero() {
        let seqs = Peptide::from_strs(["AAAAAA"]).unwrap();
        let m = entropy(&seqs, Span::default()).unwrap();
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    fn entropy_of_full_alphabet_is_log2_20() {
        let seqs = Peptide::from_strs(["ACDEFGHIKLMNPQRSTVWY"]).unwrap();
        let m = entropy(&seqs, Span::default()).unwrap();
        assert!((m.get(0, 0) - 20.0f64.log2()).abs() < 1e-12);
    }
}
