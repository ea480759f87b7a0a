//! Pseudo amino-acid composition (PAAC) and its amphiphilic variant (APAAC).
//!
//! Both augment the 20-entry composition vector with lag-based
//! sequence-order correlation factors derived from z-scored property data,
//! then normalize everything by `1 + w·Σ(correlation factors)` (Chou, 2001;
//! Chou, 2005).

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, PepdescError, Result};
use pepdesc_seq::{Peptide, Span};

use crate::composition::counts;
use crate::input::{aa_labels, check_lag, check_weight, indices, min_len, sliced_views};
use crate::standardize::non_zero_columns;
use crate::tables::PropertyTable;

/// Pseudo amino-acid composition: 20 composition entries plus `lambda`
/// correlation factors.
///
/// The correlation function averages squared property differences over all
/// `P` properties of `table` (use [`PropertyTable::paac_default`] for the
/// classic hydrophobicity / hydrophilicity / side-chain-mass set).
/// `lambda` must be smaller than the shortest sliced sequence; `w` weighs
/// the sequence-order term. With `remove_zero_cols`, columns that are zero
/// across the whole sample are dropped.
pub fn paac(
    seqs: &[Peptide],
    table: &PropertyTable,
    lambda: usize,
    w: f64,
    remove_zero_cols: bool,
    span: Span,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    check_lag(lambda, min_len(&views), None)?;
    check_weight(w)?;
    let table = table.standardized()?;
    let props = table.rows();
    let n_props = props.len() as f64;

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let len = idx.len();

            // theta_n: mean squared property distance at each lag
            let theta: Vec<f64> = (1..=lambda)
                .map(|n| {
                    (0..len - n)
                        .map(|j| {
                            props
                                .iter()
                                .map(|p| (p[idx[j]] - p[idx[j + n]]).powi(2))
                                .sum::<f64>()
                                / n_props
                        })
                        .sum::<f64>()
                        / (len - n) as f64
                })
                .collect();

            assemble_row(view, &theta, w)
        })
        .collect();

    let mut labels = aa_labels();
    labels.extend((1..=lambda).map(|n| format!("lambda{}", n)));
    let mut m = FeatureMatrix::from_rows(rows, labels)?;
    if remove_zero_cols {
        m.retain_columns(&non_zero_columns(&m))?;
    }
    Ok(m)
}

/// Amphiphilic pseudo amino-acid composition: 20 composition entries plus
/// `2·lambda` correlation factors (hydrophobicity and hydrophilicity
/// alternating per lag).
///
/// Uses the first two properties of `table`; errors if fewer are present.
pub fn apaac(
    seqs: &[Peptide],
    table: &PropertyTable,
    lambda: usize,
    w: f64,
    remove_zero_cols: bool,
    span: Span,
) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    check_lag(lambda, min_len(&views), None)?;
    check_weight(w)?;
    if table.n_properties() < 2 {
        return Err(PepdescError::InvalidInput(
            "APAAC requires a property table with at least 2 properties".to_string(),
        ));
    }
    let table = table.standardized()?;
    let props = &table.rows()[..2];

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let len = idx.len();

            // tau: per lag, one raw cross-product term per property
            let mut tau = Vec::with_capacity(2 * lambda);
            for n in 1..=lambda {
                for p in props {
                    let t = (0..len - n)
                        .map(|j| p[idx[j]] * p[idx[j + n]])
                        .sum::<f64>()
                        / (len - n) as f64;
                    tau.push(t);
                }
            }

            assemble_row(view, &tau, w)
        })
        .collect();

    let mut labels = aa_labels();
    for n in 1..=lambda {
        labels.push(format!("lambda_hphob{}", n));
        labels.push(format!("lambda_hphil{}", n));
    }
    let mut m = FeatureMatrix::from_rows(rows, labels)?;
    if remove_zero_cols {
        m.retain_columns(&non_zero_columns(&m))?;
    }
    Ok(m)
}

/// Composition entries then weighted correlation entries, sharing the
/// `1 + w·Σ` denominator.
fn assemble_row(view: &[u8], factors: &[f64], w: f64) -> Vec<f64> {
    let denom = 1.0 + w * factors.iter().sum::<f64>();
    let mut row: Vec<f64> = counts(view).iter().map(|&c| c / denom).collect();
    row.extend(factors.iter().map(|&f| (w * f) / denom));
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs() -> Vec<Peptide> {
        Peptide::from_strs(["ARKLY", "EERKPGL"]).unwrap()
    }

    fn table() -> PropertyTable {
        PropertyTable::paac_default()
    }

    #[test]
    fn paac_dimensions_and_labels() {
        let m = paac(&seqs(), &table(), 3, 0.05, false, Span::default()).unwrap();
        assert_eq!(m.shape(), (2, 23));
        assert_eq!(m.labels()[0], "A");
        assert_eq!(m.labels()[20], "lambda1");
        assert_eq!(m.labels()[22], "lambda3");
    }

    #[test]
    fn apaac_dimensions_and_labels() {
        let m = apaac(&seqs(), &table(), 3, 0.05, false, Span::default()).unwrap();
        assert_eq!(m.shape(), (2, 26));
        assert_eq!(m.labels()[20], "lambda_hphob1");
        assert_eq!(m.labels()[21], "lambda_hphil1");
        assert_eq!(m.labels()[25], "lambda_hphil3");
    }

    #[test]
    fn paac_theta_is_nonnegative_so_entries_scale_down() {
        // theta sums squared differences, so the denominator is >= 1 and
        // every composition entry is <= its raw count
        let m = paac(&seqs(), &table(), 2, 0.05, false, Span::default()).unwrap();
        let raw = crate::composition::aac(
            &seqs(),
            crate::composition::CompositionMode::Absolute,
            Span::default(),
        )
        .unwrap();
        for i in 0..2 {
            for j in 0..20 {
                assert!(m.get(i, j) <= raw.get(i, j) + 1e-12);
                assert!(m.get(i, j) >= 0.0);
            }
        }
        // correlation entries are nonnegative too
        for i in 0..2 {
            for j in 20..22 {
                assert!(m.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn lambda_bound_is_strict() {
        for f in [paac, apaac] {
            assert!(f(&seqs(), &table(), 5, 0.05, false, Span::default()).is_err());
            assert!(f(&seqs(), &table(), 4, 0.05, false, Span::default()).is_ok());
        }
    }

    #[test]
    fn nonpositive_weight_rejected() {
        assert!(paac(&seqs(), &table(), 2, 0.0, false, Span::default()).is_err());
        assert!(apaac(&seqs(), &table(), 2, -1.0, false, Span::default()).is_err());
    }

    #[test]
    fn remove_zero_cols_drops_unobserved_residues() {
        let m = paac(&seqs(), &table(), 3, 0.05, true, Span::default()).unwrap();
        // ARKLY + EERKPGL cover A,E,G,K,L,P,R,Y = 8 residues; 3 lambdas survive
        assert_eq!(m.shape(), (2, 11));
        assert_eq!(
            m.labels(),
            &["A", "E", "G", "K", "L", "P", "R", "Y", "lambda1", "lambda2", "lambda3"]
                .map(String::from)
        );
    }

    #[test]
    fn apaac_single_property_table_rejected() {
        let mut vals = [0.0f64; 20];
        for (i, v) in vals.iter_mut().enumerate() {
            *v = i as f64;
        }
        let t = PropertyTable::new(vec!["only".to_string()], vec![vals]).unwrap();
        assert!(apaac(&seqs(), &t, 2, 0.05, false, Span::default()).is_err());
    }
}
