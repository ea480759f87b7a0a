//! Shared primitives for the pepdesc peptide-descriptor workspace.
//!
//! `pepdesc-core` provides the foundation the other pepdesc crates build on:
//!
//! - **Error types** — [`PepdescError`] and [`Result`] for structured error handling
//! - **Feature matrices** — [`FeatureMatrix`], the labeled samples × descriptors
//!   output type shared by every descriptor function

pub mod error;
pub mod matrix;

pub use error::{PepdescError, Result};
pub use matrix::FeatureMatrix;
