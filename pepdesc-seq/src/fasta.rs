//! FASTA input for peptide datasets.

use std::path::Path;

use needletail::parse_fastx_file;
use pepdesc_core::{PepdescError, Result};

use crate::peptide::Peptide;

/// Read all records of a protein FASTA file as validated peptides.
///
/// Record order is preserved. Any record failing alphabet validation aborts
/// the whole read; there is no best-effort mode.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<Peptide>> {
    let path = path.as_ref();
    let mut reader =
        parse_fastx_file(path).map_err(|e| PepdescError::Parse(e.to_string()))?;

    let mut seqs = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| PepdescError::Parse(e.to_string()))?;
        seqs.push(Peptide::new(record.seq())?);
    }
    if seqs.is_empty() {
        return Err(PepdescError::InvalidInput(format!(
            "{}: no sequences found",
            path.display()
        )));
    }
    Ok(seqs)
}
