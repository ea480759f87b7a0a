//! Conjoint triad descriptor.
//!
//! Residues are collapsed into 7 classes by dipole and side-chain volume
//! (Shen et al., 2007); overlapping length-3 windows are then counted over
//! the full `7³ = 343` class-triad vocabulary.

use rayon::prelude::*;

use pepdesc_core::{FeatureMatrix, PepdescError, Result};
use pepdesc_seq::{aa_index, Peptide, Span};

use crate::data::TRIAD_CLASSES;
use crate::input::{indices, min_len, sliced_views};

/// Alphabet-index -> class (0..6) lookup.
fn class_map() -> [usize; 20] {
    let mut map = [0usize; 20];
    for (class, members) in TRIAD_CLASSES.iter().enumerate() {
        for &aa in members.as_bytes() {
            map[aa_index(aa).unwrap()] = class;
        }
    }
    map
}

/// Conjoint triad counts over all 343 class triads.
///
/// Output: 343 columns in fixed vocabulary order, labeled `111`..`777`
/// (class digits are 1-based). Triads absent from a sequence count 0; each
/// row sums to `L - 2`. Requires sliced sequences of at least 3 residues.
pub fn conjoint_triad(seqs: &[Peptide], span: Span) -> Result<FeatureMatrix> {
    let views = sliced_views(seqs, span)?;
    if min_len(&views) < 3 {
        return Err(PepdescError::InvalidInput(
            "conjoint triad requires sequences of at least 3 residues".to_string(),
        ));
    }
    let map = class_map();

    let rows: Vec<Vec<f64>> = views
        .par_iter()
        .map(|view| {
            let idx = indices(view);
            let mut counts = vec![0.0f64; 343];
            for w in idx.windows(3) {
                let triad = map[w[0]] * 49 + map[w[1]] * 7 + map[w[2]];
                counts[triad] += 1.0;
            }
            counts
        })
        .collect();

    let labels = (0..343)
        .map(|t| format!("{}{}{}", t / 49 + 1, t / 7 % 7 + 1, t % 7 + 1))
        .collect();
    FeatureMatrix::from_rows(rows, labels)
}
