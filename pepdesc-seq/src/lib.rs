//! Validated peptide sequences and input handling for pepdesc.
//!
//! - **Alphabet** — the fixed `ACDEFGHIKLMNPQRSTVWY` ordering and
//!   [`aa_index`] lookup every property table is keyed by
//! - **Peptides** — [`Peptide`], an always-uppercase, always-valid sequence
//!   newtype, plus the batch constructor [`Peptide::from_strs`]
//! - **Slicing** — [`Span`], one-based `start`/`end` positional slicing
//! - **FASTA** — [`read_fasta`] for file input via needletail
//!
//! # Example
//!
//! ```
//! use pepdesc_seq::{Peptide, Span};
//!
//! let seqs = Peptide::from_strs(["arkly", "EERKPGL"]).unwrap();
//! assert_eq!(seqs[0].as_bytes(), b"ARKLY");
//!
//! // one-based, end-exclusive slicing
//! let window = Span::new(2, Some(4)).slice(seqs[0].as_bytes()).unwrap();
//! assert_eq!(window, b"RK");
//! ```

pub mod alphabet;
pub mod fasta;
pub mod peptide;

pub use alphabet::{aa_index, is_natural, AMINO_ACIDS};
pub use fasta::read_fasta;
pub use peptide::{Peptide, Span};
