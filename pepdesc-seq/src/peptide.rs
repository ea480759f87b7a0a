//! Validated peptide sequences and positional slicing.
//!
//! [`Peptide`] is a newtype over `Vec<u8>`: construction uppercases the input
//! and checks every byte against the 20-letter natural alphabet, so the inner
//! data is always valid and downstream descriptor code can index property
//! tables without re-checking. [`Span`] carries the one-based `start`/`end`
//! positional slicing that every descriptor accepts.

use std::fmt;
use std::ops::Deref;

use pepdesc_core::{PepdescError, Result};

use crate::alphabet::aa_index;

/// A validated peptide over the 20 natural amino acids, always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peptide {
    data: Vec<u8>,
}

impl Peptide {
    /// Create a validated peptide from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the natural
    /// amino-acid alphabet. Empty input and any non-natural residue (digits,
    /// whitespace, ambiguity codes like `B`/`Z`/`X`) are rejected.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if data.is_empty() {
            return Err(PepdescError::InvalidInput(
                "empty peptide sequence".to_string(),
            ));
        }
        for (i, &b) in data.iter().enumerate() {
            if aa_index(b).is_none() {
                return Err(PepdescError::InvalidInput(format!(
                    "invalid amino acid '{}' (0x{:02X}) at position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(Self { data })
    }

    /// Validate a whole batch of sequences at once.
    ///
    /// Fails on the first invalid sequence; there is no partial-failure mode.
    /// Input order is preserved.
    pub fn from_strs<I, S>(seqs: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        seqs.into_iter().map(Peptide::new).collect()
    }

    /// The sequence bytes (always uppercase, always valid).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Sequence length in residues.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: empty peptides cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Deref for Peptide {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // data is validated ASCII
        f.write_str(std::str::from_utf8(&self.data).map_err(|_| fmt::Error)?)
    }
}

/// One-based positional slicing applied to each sequence before computation.
///
/// `start` is one-based and inclusive; `end` is one-based and exclusive, or
/// `None` for the full tail. `Span::default()` covers the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// One-based starting position (inclusive).
    pub start: usize,
    /// One-based end position (exclusive), or `None` for the sequence end.
    pub end: Option<usize>,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
        }
    }
}

impl Span {
    /// A span covering positions `start..end` (one-based, end exclusive).
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Apply the span to a sequence, returning the selected region.
    ///
    /// Errors if `start` is 0, the region is reversed, or the region is empty
    /// for this sequence.
    pub fn slice<'a>(&self, seq: &'a [u8]) -> Result<&'a [u8]> {
        if self.start == 0 {
            return Err(PepdescError::InvalidInput(
                "span start is one-based and must be >= 1".to_string(),
            ));
        }
        let lo = self.start - 1;
        let hi = self.end.unwrap_or(seq.len()).min(seq.len());
        if lo >= hi {
            return Err(PepdescError::InvalidInput(format!(
                "span {}..{:?} selects no residues from a sequence of length {}",
                self.start,
                self.end,
                seq.len()
            )));
        }
        Ok(&seq[lo..hi])
    }
}
