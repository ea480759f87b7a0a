//! Shared input handling for the descriptor engines.
//!
//! Every engine starts the same way: slice each sequence by the caller's
//! [`Span`], then validate the lag/weight parameters against the shortest
//! sliced sequence before any per-sequence work runs. A failed check aborts
//! the whole batch.

use pepdesc_core::{PepdescError, Result};
use pepdesc_seq::{aa_index, Peptide, Span, AMINO_ACIDS};

/// Apply `span` to every sequence, preserving order.
///
/// Errors if the collection is empty or the span selects no residues from
/// any sequence.
pub(crate) fn sliced_views<'a>(seqs: &'a [Peptide], span: Span) -> Result<Vec<&'a [u8]>> {
    if seqs.is_empty() {
        return Err(PepdescError::InvalidInput(
            "sequence collection is empty".to_string(),
        ));
    }
    seqs.iter().map(|p| span.slice(p.as_bytes())).collect()
}

/// Length of the shortest sliced sequence.
pub(crate) fn min_len(views: &[&[u8]]) -> usize {
    views.iter().map(|v| v.len()).min().unwrap_or(0)
}

/// Validate a lag parameter: positive, below the shortest sequence length,
/// and within `cap` when one applies (30 for the autocorrelation family).
pub(crate) fn check_lag(d: usize, shortest: usize, cap: Option<usize>) -> Result<()> {
    if d == 0 {
        return Err(PepdescError::InvalidInput(
            "lag parameter must be >= 1".to_string(),
        ));
    }
    if let Some(cap) = cap {
        if d > cap {
            return Err(PepdescError::InvalidInput(format!(
                "lag parameter {} exceeds the maximum of {}",
                d, cap
            )));
        }
    }
    if d >= shortest {
        return Err(PepdescError::InvalidInput(format!(
            "lag parameter {} must be smaller than the shortest sequence length {}",
            d, shortest
        )));
    }
    Ok(())
}

/// Validate the sequence-order weighting factor.
pub(crate) fn check_weight(w: f64) -> Result<()> {
    if !w.is_finite() || w <= 0.0 {
        return Err(PepdescError::InvalidInput(format!(
            "weight must be a positive finite number, got {}",
            w
        )));
    }
    Ok(())
}

/// Alphabet indices for a validated sequence view.
pub(crate) fn indices(view: &[u8]) -> Vec<usize> {
    // Peptide construction guarantees every byte is natural
    view.iter().map(|&aa| aa_index(aa).unwrap()).collect()
}

/// The 20 single-letter labels in alphabet order.
pub(crate) fn aa_labels() -> Vec<String> {
    AMINO_ACIDS.iter().map(|&aa| (aa as char).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliced_views_empty_collection_errors() {
        assert!(sliced_views(&[], Span::default()).is_err());
    }

    #[test]
    fn min_len_over_sliced_views() {
        let seqs = Peptide::from_strs(["ARKLY", "EERKPGL"]).unwrap();
        let views = sliced_views(&seqs, Span::default()).unwrap();
        assert_eq!(min_len(&views), 5);
        let views = sliced_views(&seqs, Span::new(2, None)).unwrap();
        assert_eq!(min_len(&views), 4);
    }

    #[test]
    fn check_lag_bounds() {
        assert!(check_lag(0, 5, None).is_err());
        assert!(check_lag(5, 5, None).is_err());
        assert!(check_lag(4, 5, None).is_ok());
        assert!(check_lag(31, 100, Some(30)).is_err());
        assert!(check_lag(30, 100, Some(30)).is_ok());
    }

    #[test]
    fn check_weight_rejects_nonpositive() {
        assert!(check_weight(0.0).is_err());
        assert!(check_weight(-0.1).is_err());
        assert!(check_weight(f64::NAN).is_err());
        assert!(check_weight(0.05).is_ok());
    }
}
