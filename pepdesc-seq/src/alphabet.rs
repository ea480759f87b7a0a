//! The 20-letter natural amino-acid alphabet and index lookups.
//!
//! Every descriptor in the workspace addresses its property tables through
//! the fixed IUPAC ordering `ACDEFGHIKLMNPQRSTVWY` (index 0–19).

/// The 20 standard amino acids, in the fixed column order used by every
/// property table and composition vector.
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Map an amino acid byte (uppercase) to its index 0–19.
///
/// Returns `None` for non-standard residues (including ambiguity codes such
/// as `B`, `Z`, `X`).
pub fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// Check whether a byte (assumed uppercase) is one of the 20 natural amino acids.
pub fn is_natural(aa: u8) -> bool {
    aa_index(aa).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_cover_all_twenty() {
        for (i, &aa) in AMINO_ACIDS.iter().enumerate() {
            assert_eq!(aa_index(aa), Some(i));
        }
    }

    #[test]
    fn rejects_ambiguity_codes() {
        for &b in b"BZXJUO*1 " {
            assert_eq!(aa_index(b), None, "{} should not be natural", b as char);
        }
    }

    #[test]
    fn rejects_lowercase() {
        // callers must uppercase first
        assert_eq!(aa_index(b'a'), None);
    }
}
