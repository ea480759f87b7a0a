//! Physicochemical and structural feature engineering for peptide sequences.
//!
//! Every descriptor maps a batch of validated [`Peptide`]s to a labeled
//! [`FeatureMatrix`](pepdesc_core::FeatureMatrix) with one row per sequence.
//! Descriptors fall into five families:
//!
//! * composition — [`aac`], [`entropy`]
//! * property aggregation — [`aaindex1`], [`aaindex_pairwise`]
//! * autocorrelation — [`moran`], [`geary`], [`moreau_broto`]
//! * sequence order — [`paac`], [`apaac`], [`socn`], [`qso`]
//! * structural — [`ctd_composition`], [`ctd_transition`],
//!   [`ctd_distribution`], [`conjoint_triad`]
//!
//! Reference data (AAIndex property tables, pairwise matrix sets, distance
//! matrices) is passed in by value through the types in [`tables`]; small
//! published defaults are built in.
//!
//! ```
//! use pepdesc_feat::{aac, CompositionMode};
//! use pepdesc_seq::{Peptide, Span};
//!
//! let seqs = Peptide::from_strs(["ARKLY", "EERKPGL"]).unwrap();
//! let m = aac(&seqs, CompositionMode::Relative, Span::default()).unwrap();
//! assert_eq!(m.shape(), (2, 20));
//! ```

mod aaindex;
mod autocorr;
mod composition;
mod ctd;
mod data;
mod input;
mod pseudo;
mod seqorder;
mod standardize;
pub mod tables;
mod triad;

pub use aaindex::{aaindex1, aaindex_pairwise};
pub use autocorr::{geary, moran, moreau_broto, MAX_LAG};
pub use composition::{aac, entropy, CompositionMode};
pub use ctd::{ctd_composition, ctd_distribution, ctd_transition};
pub use pseudo::{apaac, paac};
pub use seqorder::{qso, qso_matrix, socn, socn_matrix};
pub use standardize::Standardize;
pub use triad::conjoint_triad;

pub use pepdesc_seq::Peptide;
