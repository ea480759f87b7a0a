//! Composition/Transition/Distribution (CTD) descriptors.
//!
//! Each of the 13 physicochemical categories partitions the 20 amino acids
//! into three groups (Dubchak et al., 1995). Sequences are first translated
//! into group indices per category; the three descriptors then summarize
//! group frequencies, group-to-group transitions, and the positional
//! distribution of each group.

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, PepdescError, Result};
use pepdesc_seq::{aa_index, Peptide, Span};

use crate::data::CTD_GROUPS;
use crate::input::{indices, min_len, sliced_views};

/// Alphabet-index -> group (0, 1, 2) lookup for one category.
fn group_map(groups: (&str, &str, &str)) -> [usize; 20] {
    let mut map = [0usize; 20];
    for (g, members) in [groups.0, groups.1, groups.2].iter().enumerate() {
        for &aa in members.as_bytes() {
            // group strings are built from the natural alphabet
            map[aa_index(aa).unwrap()] = g;
        }
    }
    map
}

fn category_maps() -> Vec<(&'static str, [usize; 20])> {
    CTD_GROUPS
        .iter()
        .map(|&(name, g1, g2, g3)| (name, group_map((g1, g2, g3))))
        .collect()
}

/// Group composition per category: fraction of residues in each of the three
/// groups.
///
/// Output: `13 × 3 = 39` columns labeled `{category}-G{1..3}`; each
/// category's three fractions sum to 1.
pub fn ctd_composition(seqs: &[Peptide], span: Span) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    let cats = category_maps();

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let len = idx.len() as f64;
            let mut row = Vec::with_capacity(cats.len() * 3);
            for (_, map) in &cats {
                let mut counts = [0.0f64; 3];
                for &i in &idx {
                    counts[map[i]] += 1.0;
                }
                row.extend(counts.iter().map(|&c| c / len));
            }
            row
        })
        .collect();

    let labels = cats
        .iter()
        .flat_map(|(name, _)| (1..=3).map(move |g| format!("{}-G{}", name, g)))
        .collect();
    FeatureMatrix::from_rows(rows, labels)
}

/// Group transitions per category: frequency of adjacent residue pairs that
/// cross between two groups, counted in either direction and divided by
/// `L - 1`.
///
/// Output: `13 × 3 = 39` columns labeled `{category}-T{1221,1331,2332}`.
/// Requires sliced sequences of at least 2 residues.
pub fn ctd_transition(seqs: &[Peptide], span: Span) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    if min_len(&views) < 2 {
        return Err(PepdescError::InvalidInput(
            "transition counting requires sequences of at least 2 residues".to_string(),
        ));
    }
    let cats = category_maps();

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let n_pairs = (idx.len() - 1) as f64;
            let mut row = Vec::with_capacity(cats.len() * 3);
            for (_, map) in &cats {
                // transitions[0] = 1<->2, [1] = 1<->3, [2] = 2<->3
                let mut t = [0.0f64; 3];
                for w in idx.windows(2) {
                    let (a, b) = (map[w[0]], map[w[1]]);
                    match (a.min(b), a.max(b)) {
                        (0, 1) => t[0] += 1.0,
                        (0, 2) => t[1] += 1.0,
                        (1, 2) => t[2] += 1.0,
                        _ => {}
                    }
                }
                row.extend(t.iter().map(|&c| c / n_pairs));
            }
            row
        })
        .collect();

    let labels = cats
        .iter()
        .flat_map(|(name, _)| {
            ["1221", "1331", "2332"]
                .iter()
                .map(move |t| format!("{}-T{}", name, t))
        })
        .collect();
    FeatureMatrix::from_rows(rows, labels)
}

const DISTRIBUTION_POINTS: [(&str, f64); 5] = [
    ("0", 0.0),
    ("25", 0.25),
    ("50", 0.5),
    ("75", 0.75),
    ("100", 1.0),
];

/// Group distribution per category: for each group, the relative sequence
/// position (percent of length) of its first occurrence and of the
/// occurrences at 25%, 50%, 75%, and 100% of the group's total count.
///
/// Output: `13 × 3 × 5 = 195` columns labeled
/// `{category}-G{g}D{0,25,50,75,100}`. A group with no occurrences
/// contributes five zeros.
pub fn ctd_distribution(seqs: &[Peptide], span: Span) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    let cats = category_maps();

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let len = idx.len() as f64;
            let mut row = Vec::with_capacity(cats.len() * 15);
            for (_, map) in &cats {
                // 1-based positions of each group's occurrences
                let mut positions: [Vec<usize>; 3] = Default::default();
                for (pos, &i) in idx.iter().enumerate() {
                    positions[map[i]].push(pos + 1);
                }
                for occ in &positions {
                    if occ.is_empty() {
                        row.extend([0.0; 5]);
                        continue;
                    }
                    for (_, frac) in DISTRIBUTION_POINTS {
                        let nth = ((occ.len() as f64 * frac) as usize).max(1);
                        row.push(occ[nth - 1] as f64 / len * 100.0);
                    }
                }
            }
            row
        })
        .collect();

    let labels = cats
        .iter()
        .flat_map(|(name, _)| {
            (1..=3).flat_map(move |g| {
                DISTRIBUTION_POINTS
                    .iter()
                    .map(move |(pct, _)| format!("{}-G{}D{}", name, g, pct))
            })
        })
        .collect();
    FeatureMatrix::from_rows(rows, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs() -> Vec<Peptide> {
        Peptide::from_strs(["ARKLY", "EERKPGL"]).unwrap()
    }

    #[test]
    fn composition_shape_and_row_structure() {
        let m = ctd_composition(&seqs(), Span::default()).unwrap();
        assert_eq!(m.shape(), (2, 39));
        assert_eq!(m.labels()[0], "hydrophobicity_PRAM900101-G1");
        // each category's three fractions sum to 1
        for i in 0..2 {
            for c in 0..13 {
                let s: f64 = (0..3).map(|g| m.get(i, 3 * c + g)).sum();
                assert!((s - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn composition_charge_category_counts_kr_and_de() {
        let m = ctd_composition(&seqs(), Span::default()).unwrap();
        let base = m
            .labels()
            .iter()
            .position(|l| l == "charge-G1")
            .unwrap();
        // ARKLY: one of R/K each -> 2/5 positive, no D/E
        assert!((m.get(0, base) - 0.4).abs() < 1e-12);
        assert!((m.get(0, base + 2) - 0.0).abs() < 1e-12);
        // EERKPGL: R,K positive (2/7), E,E negative (2/7)
        assert!((m.get(1, base) - 2.0 / 7.0).abs() < 1e-12);
        assert!((m.get(1, base + 2) - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn transition_shape_and_bidirectional_counting() {
        let m = ctd_transition(&seqs(), Span::default()).unwrap();
        assert_eq!(m.shape(), (2, 39));
        assert_eq!(m.labels()[1], "hydrophobicity_PRAM900101-T1331");

        // charge groups: K,R -> 1; D,E -> 3; rest -> 2.
        // ARKLY translates to 21212: four pairs, all 1<->2
        let base = m
            .labels()
            .iter()
            .position(|l| l == "charge-T1221")
            .unwrap();
        assert!((m.get(0, base) - 1.0).abs() < 1e-12);
        assert_eq!(m.get(0, base + 1), 0.0);
        assert_eq!(m.get(0, base + 2), 0.0);
    }

    #[test]
    fn transition_requires_two_residues() {
        let one = Peptide::from_strs(["A"]).unwrap();
        assert!(ctd_transition(&one, Span::default()).is_err());
        let longer = Peptide::from_strs(["ARKLY"]).unwrap();
        assert!(ctd_transition(&longer, Span::new(5, None)).is_err());
    }

    #[test]
    fn distribution_shape_and_labels() {
        let m = ctd_distribution(&seqs(), Span::default()).unwrap();
        assert_eq!(m.shape(), (2, 195));
        assert_eq!(m.labels()[0], "hydrophobicity_PRAM900101-G1D0");
        assert_eq!(m.labels()[14], "hydrophobicity_PRAM900101-G3D100");
    }

    #[test]
    fn distribution_positions_for_charge_groups() {
        // ARKLY: charge group 1 (K,R) occurs at positions 2 and 3 of 5
        let one = Peptide::from_strs(["ARKLY"]).unwrap();
        let m = ctd_distribution(&one, Span::default()).unwrap();
        let base = m
            .labels()
            .iter()
            .position(|l| l == "charge-G1D0")
            .unwrap();
        // first occurrence at 2/5, last at 3/5
        assert!((m.get(0, base) - 40.0).abs() < 1e-12);
        assert!((m.get(0, base + 4) - 60.0).abs() < 1e-12);
        // group 3 (D,E) never occurs: five zeros
        for k in 0..5 {
            assert_eq!(m.get(0, base + 10 + k), 0.0);
        }
    }

    #[test]
    fn distribution_values_are_percentages() {
        let m = ctd_distribution(&seqs(), Span::default()).unwrap();
        for &v in m.data() {
            assert!((0.0..=100.0).contains(&v));
        }
    }
}
