//! Reference table types: AAIndex1 property sets, AAIndex2/3 pairwise matrix
//! sets, and amino-acid distance matrices.
//!
//! Tables are plain values passed into the descriptor functions, never hidden
//! module state. Small published tables are built in ([`PropertyTable::autocorrelation_default`],
//! [`PropertyTable::paac_default`], [`DistanceMatrix::grantham`],
//! [`DistanceMatrix::schneider_wrede`]); the full AAIndex databases are
//! loaded from CSV. All tables are keyed by the alphabetical residue order
//! `ACDEFGHIKLMNPQRSTVWY`.

use std::path::Path;

use ::csv::ReaderBuilder;
use log::debug;
use pepdesc_core::{PepdescError, Result};
use pepdesc_seq::{aa_index, AMINO_ACIDS};

use crate::data;

/// Parse one CSV cell as `f64`, mapping empty / `NA` / `NaN` to NaN.
fn parse_cell(s: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    s.parse::<f64>()
        .map_err(|_| PepdescError::Parse(format!("invalid numeric cell '{}'", s)))
}

/// Check that a header carries the 20 residue columns in alphabetical order,
/// starting at `offset`.
fn check_residue_columns(headers: &::csv::StringRecord, offset: usize) -> Result<()> {
    if headers.len() != offset + 20 {
        return Err(PepdescError::Parse(format!(
            "expected {} columns, found {}",
            offset + 20,
            headers.len()
        )));
    }
    for (i, &aa) in AMINO_ACIDS.iter().enumerate() {
        let got = headers.get(offset + i).unwrap_or("");
        if got.as_bytes() != [aa] {
            return Err(PepdescError::Parse(format!(
                "expected residue column '{}' at position {}, found '{}'",
                aa as char,
                offset + i,
                got
            )));
        }
    }
    Ok(())
}

// ── Per-residue property tables (AAIndex1, PAAC) ────────────────

/// A named set of per-amino-acid scalar properties (AAIndex1-style).
///
/// Stored as one 20-vector per property, indexed by `aa_index`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTable {
    descriptions: Vec<String>,
    values: Vec<[f64; 20]>,
}

impl PropertyTable {
    /// Build a table from parallel description and value lists.
    pub fn new(descriptions: Vec<String>, values: Vec<[f64; 20]>) -> Result<Self> {
        if descriptions.len() != values.len() {
            return Err(PepdescError::InvalidInput(format!(
                "{} descriptions for {} property rows",
                descriptions.len(),
                values.len()
            )));
        }
        if descriptions.is_empty() {
            return Err(PepdescError::InvalidInput(
                "property table must contain at least one property".to_string(),
            ));
        }
        Ok(Self {
            descriptions,
            values,
        })
    }

    /// The eight canonical AAIndex1 indices used by the autocorrelation
    /// descriptors (Xiao et al., 2015).
    pub fn autocorrelation_default() -> Self {
        let (descriptions, values) = data::AUTOCORR_PROPERTIES
            .iter()
            .map(|(name, vals)| (name.to_string(), *vals))
            .unzip();
        Self {
            descriptions,
            values,
        }
    }

    /// The three PAAC properties: hydrophobicity, hydrophilicity, and
    /// side-chain mass (Chou, 2001). APAAC uses the first two.
    pub fn paac_default() -> Self {
        let (descriptions, values) = data::PAAC_PROPERTIES
            .iter()
            .map(|(name, vals)| (name.to_string(), *vals))
            .unzip();
        Self {
            descriptions,
            values,
        }
    }

    /// Load a property table from AAIndex1-style CSV text.
    ///
    /// Expected header: `Description,A,C,D,...,Y` (residues alphabetical).
    /// Empty cells, `NA`, and `NaN` parse as NaN.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| PepdescError::Parse(e.to_string()))?
            .clone();
        check_residue_columns(&headers, 1)?;

        let mut descriptions = Vec::new();
        let mut values = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| PepdescError::Parse(e.to_string()))?;
            if record.len() != 21 {
                return Err(PepdescError::Parse(format!(
                    "property row has {} fields, expected 21",
                    record.len()
                )));
            }
            descriptions.push(record.get(0).unwrap_or("").to_string());
            let mut row = [0.0f64; 20];
            for (i, cell) in record.iter().skip(1).enumerate() {
                row[i] = parse_cell(cell)?;
            }
            values.push(row);
        }
        debug!("loaded property table: {} properties", descriptions.len());
        Self::new(descriptions, values)
    }

    /// Load a property table from an AAIndex1-style CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PepdescError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Self::from_csv_str(&text)
    }

    /// Number of properties (rows).
    pub fn n_properties(&self) -> usize {
        self.values.len()
    }

    /// Property descriptions, parallel to [`Self::rows`].
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// The per-property 20-vectors, indexed by `aa_index`.
    pub fn rows(&self) -> &[[f64; 20]] {
        &self.values
    }

    /// Select a subset of properties by description, in the given order.
    pub fn select(&self, ids: &[&str]) -> Result<Self> {
        let mut descriptions = Vec::with_capacity(ids.len());
        let mut values = Vec::with_capacity(ids.len());
        for &id in ids {
            let pos = self
                .descriptions
                .iter()
                .position(|d| d == id)
                .ok_or_else(|| {
                    PepdescError::InvalidInput(format!("unknown property '{}'", id))
                })?;
            descriptions.push(self.descriptions[pos].clone());
            values.push(self.values[pos]);
        }
        Self::new(descriptions, values)
    }

    /// Z-score every property over the 20 amino acids (population standard
    /// deviation), as required before autocorrelation and pseudo-composition.
    ///
    /// Errors if any property is constant or contains NaN.
    pub fn standardized(&self) -> Result<Self> {
        let mut values = Vec::with_capacity(self.values.len());
        for (row, desc) in self.values.iter().zip(&self.descriptions) {
            if row.iter().any(|v| v.is_nan()) {
                return Err(PepdescError::InvalidInput(format!(
                    "property '{}' contains undefined entries",
                    desc
                )));
            }
            let mean = row.iter().sum::<f64>() / 20.0;
            let var = row.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 20.0;
            let std = var.sqrt();
            if std == 0.0 {
                return Err(PepdescError::InvalidInput(format!(
                    "property '{}' is constant and cannot be standardized",
                    desc
                )));
            }
            let mut out = [0.0f64; 20];
            for (o, v) in out.iter_mut().zip(row) {
                *o = (v - mean) / std;
            }
            values.push(out);
        }
        Ok(Self {
            descriptions: self.descriptions.clone(),
            values,
        })
    }
}

// ── Pairwise matrix sets (AAIndex2 / AAIndex3) ──────────────────

/// Storage layout of one pairwise amino-acid matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixKind {
    /// Only the lower triangle (including the diagonal) is defined; lookups
    /// are symmetric.
    LowerTriangular,
    /// All 400 ordered pairs are defined; lookups are ordered.
    Square,
}

/// One named 20×20 pairwise matrix (substitution or contact potential).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairwiseMatrix {
    description: String,
    kind: MatrixKind,
    values: Vec<[f64; 20]>, // always 20 rows
}

impl PairwiseMatrix {
    /// The matrix description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The storage layout.
    pub fn kind(&self) -> MatrixKind {
        self.kind
    }

    /// Look up the value for the residue pair `(a, b)` (alphabet indices).
    ///
    /// Lower-triangular matrices look up the unordered pair (row = larger
    /// index, column = smaller); square matrices look up the ordered pair.
    pub fn lookup(&self, a: usize, b: usize) -> f64 {
        match self.kind {
            MatrixKind::LowerTriangular => self.values[a.max(b)][a.min(b)],
            MatrixKind::Square => self.values[a][b],
        }
    }
}

/// A set of pairwise matrices loaded from an AAIndex2/AAIndex3 CSV dump.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairwiseSet {
    matrices: Vec<PairwiseMatrix>,
}

impl PairwiseSet {
    /// Build a set from already-constructed matrices.
    pub fn new(matrices: Vec<PairwiseMatrix>) -> Result<Self> {
        if matrices.is_empty() {
            return Err(PepdescError::InvalidInput(
                "pairwise set must contain at least one matrix".to_string(),
            ));
        }
        Ok(Self { matrices })
    }

    /// Load a matrix set from AAIndex2/3-style CSV text.
    ///
    /// Expected header: `Description,AminoAcid,A,C,...,Y`. Each matrix is a
    /// block of 20 consecutive rows sharing a description, one row per
    /// residue in alphabetical order. A matrix whose upper triangle is
    /// entirely NaN is classified [`MatrixKind::LowerTriangular`], otherwise
    /// [`MatrixKind::Square`].
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| PepdescError::Parse(e.to_string()))?
            .clone();
        check_residue_columns(&headers, 2)?;

        let mut raw: Vec<(String, u8, [f64; 20])> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| PepdescError::Parse(e.to_string()))?;
            if record.len() != 22 {
                return Err(PepdescError::Parse(format!(
                    "pairwise row has {} fields, expected 22",
                    record.len()
                )));
            }
            let desc = record.get(0).unwrap_or("").to_string();
            let residue = record.get(1).unwrap_or("").trim();
            if residue.len() != 1 || aa_index(residue.as_bytes()[0]).is_none() {
                return Err(PepdescError::Parse(format!(
                    "invalid residue row label '{}'",
                    residue
                )));
            }
            let mut row = [0.0f64; 20];
            for (i, cell) in record.iter().skip(2).enumerate() {
                row[i] = parse_cell(cell)?;
            }
            raw.push((desc, residue.as_bytes()[0], row));
        }
        if raw.is_empty() || raw.len() % 20 != 0 {
            return Err(PepdescError::Parse(format!(
                "pairwise set has {} rows, expected a multiple of 20",
                raw.len()
            )));
        }

        let mut matrices = Vec::with_capacity(raw.len() / 20);
        for block in raw.chunks(20) {
            let description = block[0].0.clone();
            let mut values = vec![[0.0f64; 20]; 20];
            for (desc, residue, row) in block {
                if *desc != description {
                    return Err(PepdescError::Parse(format!(
                        "matrix block mixes descriptions '{}' and '{}'",
                        description, desc
                    )));
                }
                let r = aa_index(*residue).expect("residue validated above");
                values[r] = *row;
            }
            let upper_all_nan = (0..20)
                .all(|r| ((r + 1)..20).all(|c| values[r][c].is_nan()));
            let kind = if upper_all_nan {
                MatrixKind::LowerTriangular
            } else {
                MatrixKind::Square
            };
            matrices.push(PairwiseMatrix {
                description,
                kind,
                values,
            });
        }
        debug!("loaded pairwise set: {} matrices", matrices.len());
        Self::new(matrices)
    }

    /// Load a matrix set from an AAIndex2/3-style CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PepdescError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Self::from_csv_str(&text)
    }

    /// Number of matrices in the set.
    pub fn n_matrices(&self) -> usize {
        self.matrices.len()
    }

    /// The matrices, in file order.
    pub fn matrices(&self) -> &[PairwiseMatrix] {
        &self.matrices
    }
}

// ── Distance matrices (SOCN / QSO) ──────────────────────────────

/// A named 20×20 amino-acid distance matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    name: String,
    values: Vec<[f64; 20]>, // always 20 rows
}

impl DistanceMatrix {
    /// The Grantham (1974) amino-acid difference matrix.
    pub fn grantham() -> Self {
        Self {
            name: "grantham".to_string(),
            values: data::GRANTHAM.to_vec(),
        }
    }

    /// Schneider-Wrede-style physicochemical distance.
    ///
    /// Computed as the root mean squared difference of the three z-scored
    /// PAAC properties (hydrophobicity, hydrophilicity, side-chain mass),
    /// rescaled so the largest distance is 1.
    pub fn schneider_wrede() -> Self {
        let props = PropertyTable::paac_default()
            .standardized()
            .expect("built-in PAAC properties are non-constant");
        let rows = props.rows();
        let p = rows.len() as f64;
        let mut values = vec![[0.0f64; 20]; 20];
        let mut max = 0.0f64;
        for i in 0..20 {
            for j in 0..20 {
                let sq: f64 = rows.iter().map(|r| (r[i] - r[j]).powi(2)).sum();
                let d = (sq / p).sqrt();
                values[i][j] = d;
                if d > max {
                    max = d;
                }
            }
        }
        for row in &mut values {
            for v in row.iter_mut() {
                *v /= max;
            }
        }
        Self {
            name: "schneider-wrede".to_string(),
            values,
        }
    }

    /// Load a distance matrix from CSV text with header `AminoAcid,A,C,...,Y`
    /// and 20 rows in alphabetical residue order.
    pub fn from_csv_str(name: &str, text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| PepdescError::Parse(e.to_string()))?
            .clone();
        check_residue_columns(&headers, 1)?;

        let mut values = vec![[0.0f64; 20]; 20];
        let mut seen = [false; 20];
        for record in reader.records() {
            let record = record.map_err(|e| PepdescError::Parse(e.to_string()))?;
            if record.len() != 21 {
                return Err(PepdescError::Parse(format!(
                    "distance row has {} fields, expected 21",
                    record.len()
                )));
            }
            let residue = record.get(0).unwrap_or("").trim();
            let r = residue
                .as_bytes()
                .first()
                .copied()
                .filter(|_| residue.len() == 1)
                .and_then(aa_index)
                .ok_or_else(|| {
                    PepdescError::Parse(format!("invalid residue row label '{}'", residue))
                })?;
            if seen[r] {
                return Err(PepdescError::Parse(format!(
                    "duplicate residue row '{}'",
                    residue
                )));
            }
            seen[r] = true;
            for (i, cell) in record.iter().skip(1).enumerate() {
                values[r][i] = parse_cell(cell)?;
            }
        }
        if !seen.iter().all(|&s| s) {
            return Err(PepdescError::Parse(
                "distance matrix is missing residue rows".to_string(),
            ));
        }
        debug!("loaded distance matrix '{}'", name);
        Ok(Self {
            name: name.to_string(),
            values,
        })
    }

    /// The matrix name (used in logs and nothing else).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance between residues `a` and `b` (alphabet indices).
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[a][b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocorrelation_default_has_eight_properties() {
        let t = PropertyTable::autocorrelation_default();
        assert_eq!(t.n_properties(), 8);
        assert_eq!(t.descriptions()[0], "CIDH920105");
    }

    #[test]
    fn paac_default_order() {
        let t = PropertyTable::paac_default();
        assert_eq!(
            t.descriptions(),
            &["hydrophobicity", "hydrophilicity", "side_chain_mass"]
        );
    }

    #[test]
    fn standardized_rows_have_zero_mean_unit_std() {
        let t = PropertyTable::autocorrelation_default().standardized().unwrap();
        for row in t.rows() {
            let mean = row.iter().sum::<f64>() / 20.0;
            let var = row.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 20.0;
            assert!(mean.abs() < 1e-9);
            assert!((var - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn select_reorders_and_rejects_unknown() {
        let t = PropertyTable::autocorrelation_default();
        let s = t.select(&["BIGC670101", "CIDH920105"]).unwrap();
        assert_eq!(s.descriptions(), &["BIGC670101", "CIDH920105"]);
        assert!(t.select(&["NOPE"]).is_err());
    }

    #[test]
    fn property_csv_round_trip() {
        let header = "Description,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y";
        let row: Vec<String> = (0..20).map(|i| format!("{}.5", i)).collect();
        let text = format!("{}\nprop1,{}\n", header, row.join(","));
        let t = PropertyTable::from_csv_str(&text).unwrap();
        assert_eq!(t.n_properties(), 1);
        assert_eq!(t.rows()[0][0], 0.5);
        assert_eq!(t.rows()[0][19], 19.5);
    }

    #[test]
    fn property_csv_from_path() {
        use std::io::Write;
        let header = "Description,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y";
        let row = vec!["1.0"; 20].join(",");
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(f, "{}\nprop1,{}", header, row).unwrap();
        let t = PropertyTable::from_csv_path(f.path()).unwrap();
        assert_eq!(t.n_properties(), 1);
        assert_eq!(t.descriptions(), &["prop1"]);
    }

    #[test]
    fn property_csv_na_is_nan() {
        let header = "Description,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y";
        let mut cells = vec!["1.0".to_string(); 20];
        cells[3] = "NA".to_string();
        let text = format!("{}\nprop1,{}\n", header, cells.join(","));
        let t = PropertyTable::from_csv_str(&text).unwrap();
        assert!(t.rows()[0][3].is_nan());
    }

    #[test]
    fn property_csv_bad_header_errors() {
        assert!(PropertyTable::from_csv_str("Description,A,B\nx,1,2\n").is_err());
    }

    fn pairwise_csv(upper_nan: bool) -> String {
        let mut text =
            String::from("Description,AminoAcid,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y\n");
        for (r, &aa) in pepdesc_seq::AMINO_ACIDS.iter().enumerate() {
            let cells: Vec<String> = (0..20)
                .map(|c| {
                    if upper_nan && c > r {
                        "NA".to_string()
                    } else {
                        format!("{}", (r * 20 + c) as f64)
                    }
                })
                .collect();
            text.push_str(&format!("m1,{},{}\n", aa as char, cells.join(",")));
        }
        text
    }

    #[test]
    fn pairwise_lower_triangular_detection_and_lookup() {
        let set = PairwiseSet::from_csv_str(&pairwise_csv(true)).unwrap();
        assert_eq!(set.n_matrices(), 1);
        let m = &set.matrices()[0];
        assert_eq!(m.kind(), MatrixKind::LowerTriangular);
        // symmetric: (1, 4) reads row 4, col 1
        assert_eq!(m.lookup(1, 4), m.lookup(4, 1));
        assert_eq!(m.lookup(1, 4), (4 * 20 + 1) as f64);
    }

    #[test]
    fn pairwise_square_detection_and_ordered_lookup() {
        let set = PairwiseSet::from_csv_str(&pairwise_csv(false)).unwrap();
        let m = &set.matrices()[0];
        assert_eq!(m.kind(), MatrixKind::Square);
        assert_eq!(m.lookup(1, 4), (1 * 20 + 4) as f64);
        assert_eq!(m.lookup(4, 1), (4 * 20 + 1) as f64);
    }

    #[test]
    fn pairwise_partial_block_errors() {
        let text = "Description,AminoAcid,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y\nm1,A,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1\n";
        assert!(PairwiseSet::from_csv_str(text).is_err());
    }

    #[test]
    fn grantham_is_symmetric_with_zero_diagonal() {
        let g = DistanceMatrix::grantham();
        for i in 0..20 {
            assert_eq!(g.get(i, i), 0.0);
            for j in 0..20 {
                assert_eq!(g.get(i, j), g.get(j, i));
            }
        }
        // spot checks against the published table
        let (l, i) = (pepdesc_seq::aa_index(b'L').unwrap(), pepdesc_seq::aa_index(b'I').unwrap());
        assert_eq!(g.get(l, i), 5.0);
        let (c, w) = (pepdesc_seq::aa_index(b'C').unwrap(), pepdesc_seq::aa_index(b'W').unwrap());
        assert_eq!(g.get(c, w), 215.0);
    }

    #[test]
    fn schneider_wrede_is_normalized() {
        let sw = DistanceMatrix::schneider_wrede();
        let mut max = 0.0f64;
        for i in 0..20 {
            assert!(sw.get(i, i).abs() < 1e-12);
            for j in 0..20 {
                assert!(sw.get(i, j) >= 0.0 && sw.get(i, j) <= 1.0 + 1e-12);
                max = max.max(sw.get(i, j));
            }
        }
        assert!((max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_csv_round_trip() {
        let mut text = String::from("AminoAcid,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y\n");
        for &aa in pepdesc_seq::AMINO_ACIDS.iter() {
            let cells: Vec<String> = (0..20).map(|c| format!("{}", c)).collect();
            text.push_str(&format!("{},{}\n", aa as char, cells.join(",")));
        }
        let m = DistanceMatrix::from_csv_str("test", &text).unwrap();
        assert_eq!(m.get(0, 7), 7.0);
    }

    #[test]
    fn distance_csv_missing_row_errors() {
        let text = "AminoAcid,A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y\nA,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n";
        assert!(DistanceMatrix::from_csv_str("test", text).is_err());
    }
}
