//! Allen's composition algebra.
//!
//! Given `A r1 B` and `B r2 C`, the composition table lists every relation
//! `r` such that `A r C` is consistent with r1 and r2. The table is static
//! domain data; the built-in matrix is encoded as const bitmask expressions
//! so it carries no load-time failure mode. A caller-supplied table can be
//! parsed from the tabular text representation with
//! [`TemporalAlgebra::from_table_source`].

use crate::errors::AlgebraError;
use crate::relation::TemporalRelation;
use crate::set::RelationSet;

// Single-relation masks, named by code. Kept local to the matrix literal.
const EQ: u16 = 1 << TemporalRelation::Equals as u16;
const B: u16 = 1 << TemporalRelation::Before as u16;
const BI: u16 = 1 << TemporalRelation::After as u16;
const D: u16 = 1 << TemporalRelation::During as u16;
const DI: u16 = 1 << TemporalRelation::Contains as u16;
const O: u16 = 1 << TemporalRelation::Overlaps as u16;
const OI: u16 = 1 << TemporalRelation::OverlappedBy as u16;
const M: u16 = 1 << TemporalRelation::Meets as u16;
const MI: u16 = 1 << TemporalRelation::MetBy as u16;
const S: u16 = 1 << TemporalRelation::Starts as u16;
const SI: u16 = 1 << TemporalRelation::StartedBy as u16;
const F: u16 = 1 << TemporalRelation::Finishes as u16;
const FI: u16 = 1 << TemporalRelation::FinishedBy as u16;

/// All 13 relations — the "no constraint derivable" wildcard cell.
const FULL: u16 = (1 << 13) - 1;

/// The nine relations compatible with two intervals sharing interior points.
const CONCUR: u16 = EQ | D | DI | O | OI | S | SI | F | FI;

const fn rs(bits: u16) -> RelationSet {
    RelationSet::from_bits(bits)
}

/// Allen's composition table. Rows and columns follow
/// `TemporalRelation::ALL` order: `= < > d D o O m M s S f F`.
#[rustfmt::skip]
const COMPOSITION: [[RelationSet; 13]; 13] = [
    // Equals
    [rs(EQ), rs(B), rs(BI), rs(D), rs(DI), rs(O), rs(OI), rs(M), rs(MI), rs(S), rs(SI), rs(F), rs(FI)],
    // Before
    [rs(B), rs(B), rs(FULL), rs(B | O | M | D | S), rs(B), rs(B), rs(B | O | M | D | S), rs(B), rs(B | O | M | D | S), rs(B), rs(B), rs(B | O | M | D | S), rs(B)],
    // After
    [rs(BI), rs(FULL), rs(BI), rs(BI | OI | MI | D | F), rs(BI), rs(BI | OI | MI | D | F), rs(BI), rs(BI | OI | MI | D | F), rs(BI), rs(BI | OI | MI | D | F), rs(BI), rs(BI), rs(BI)],
    // During
    [rs(D), rs(B), rs(BI), rs(D), rs(FULL), rs(B | O | M | D | S), rs(BI | OI | MI | D | F), rs(B), rs(BI), rs(D), rs(BI | OI | MI | D | F), rs(D), rs(B | O | M | D | S)],
    // Contains
    [rs(DI), rs(B | O | M | DI | FI), rs(BI | OI | MI | DI | SI), rs(CONCUR), rs(DI), rs(O | DI | FI), rs(OI | DI | SI), rs(O | DI | FI), rs(OI | DI | SI), rs(O | DI | FI), rs(DI), rs(OI | DI | SI), rs(DI)],
    // Overlaps
    [rs(O), rs(B), rs(BI | OI | MI | DI | SI), rs(O | D | S), rs(B | O | M | DI | FI), rs(B | O | M), rs(CONCUR), rs(B), rs(OI | DI | SI), rs(O), rs(O | DI | FI), rs(O | D | S), rs(B | O | M)],
    // OverlappedBy
    [rs(OI), rs(B | O | M | DI | FI), rs(BI), rs(OI | D | F), rs(BI | OI | MI | DI | SI), rs(CONCUR), rs(BI | OI | MI), rs(O | DI | FI), rs(BI), rs(OI | D | F), rs(BI | OI | MI), rs(OI), rs(OI | DI | SI)],
    // Meets
    [rs(M), rs(B), rs(BI | OI | MI | DI | SI), rs(O | D | S), rs(B), rs(B), rs(O | D | S), rs(B), rs(EQ | F | FI), rs(M), rs(M), rs(O | D | S), rs(B)],
    // MetBy
    [rs(MI), rs(B | O | M | DI | FI), rs(BI), rs(OI | D | F), rs(BI), rs(OI | D | F), rs(BI), rs(EQ | S | SI), rs(BI), rs(OI | D | F), rs(BI), rs(MI), rs(MI)],
    // Starts
    [rs(S), rs(B), rs(BI), rs(D), rs(B | O | M | DI | FI), rs(B | O | M), rs(OI | D | F), rs(B), rs(MI), rs(S), rs(EQ | S | SI), rs(D), rs(B | O | M)],
    // StartedBy
    [rs(SI), rs(B | O | M | DI | FI), rs(BI), rs(OI | D | F), rs(DI), rs(O | DI | FI), rs(OI), rs(O | DI | FI), rs(MI), rs(EQ | S | SI), rs(SI), rs(OI), rs(DI)],
    // Finishes
    [rs(F), rs(B), rs(BI), rs(D), rs(BI | OI | MI | DI | SI), rs(O | D | S), rs(BI | OI | MI), rs(M), rs(BI), rs(D), rs(BI | OI | MI), rs(F), rs(EQ | F | FI)],
    // FinishedBy
    [rs(FI), rs(B), rs(BI | OI | MI | DI | SI), rs(O | D | S), rs(DI), rs(O), rs(OI | DI | SI), rs(M), rs(OI | DI | SI), rs(O), rs(DI), rs(EQ | F | FI), rs(FI)],
];

static STANDARD: TemporalAlgebra = TemporalAlgebra {
    matrix: COMPOSITION,
};

/// The composition algebra over the 13 relations.
///
/// Owns the full 13x13 matrix of composition outcomes. Pure after
/// construction; composing any two relations always yields a defined
/// (possibly full) set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalAlgebra {
    matrix: [[RelationSet; 13]; 13],
}

impl TemporalAlgebra {
    /// The built-in standard Allen composition table.
    pub fn standard() -> &'static TemporalAlgebra {
        &STANDARD
    }

    /// Compose two relations: the possible relations for `A ? C` given
    /// `A r1 B` and `B r2 C`.
    pub fn compose(&self, r1: TemporalRelation, r2: TemporalRelation) -> RelationSet {
        self.matrix[r1 as usize][r2 as usize]
    }

    /// Compose two relation sets: the union of `compose` over the cross
    /// product. This is the propagation primitive.
    pub fn compose_sets(&self, s1: RelationSet, s2: RelationSet) -> RelationSet {
        let mut out = RelationSet::empty();
        for r1 in s1.iter() {
            for r2 in s2.iter() {
                out = out.union(self.compose(r1, r2));
                if out.is_full() {
                    return out;
                }
            }
        }
        out
    }

    /// Parse an algebra from the tabular text representation.
    ///
    /// The first non-empty line is a whitespace-separated header of column
    /// codes; each following line is a row code followed by one cell per
    /// column. A cell is a space-free string of result codes, with `*`
    /// meaning unconstrained. Lines starting with `#` are ignored. All 13
    /// rows and 13 columns must be present exactly once.
    pub fn from_table_source(source: &str) -> Result<TemporalAlgebra, AlgebraError> {
        let mut lines = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines.next().ok_or(AlgebraError::MissingHeader)?;
        let columns = parse_codes(header)?;
        if columns.len() != 13 {
            return Err(AlgebraError::WrongColumnCount {
                row: "header".to_string(),
                expected: 13,
                found: columns.len(),
            });
        }

        let mut matrix = [[RelationSet::empty(); 13]; 13];
        let mut seen = RelationSet::empty();
        for line in lines {
            let mut cells = line.split_whitespace();
            // First token names the row; lines here are non-empty after trim.
            let row_code = match cells.next() {
                Some(token) => token,
                None => continue,
            };
            let row = parse_code(row_code)?;
            if seen.contains(row) {
                return Err(AlgebraError::DuplicateRow { code: row.code() });
            }
            seen = seen.insert(row);

            let cells: Vec<&str> = cells.collect();
            if cells.len() != columns.len() {
                return Err(AlgebraError::WrongColumnCount {
                    row: row_code.to_string(),
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
            for (column, cell) in columns.iter().zip(cells) {
                matrix[row as usize][*column as usize] = cell.parse()?;
            }
        }

        if !seen.is_full() {
            return Err(AlgebraError::WrongRowCount {
                expected: 13,
                found: seen.len() as usize,
            });
        }

        tracing::debug!("parsed composition table from tabular source");
        Ok(TemporalAlgebra { matrix })
    }
}

fn parse_code(token: &str) -> Result<TemporalRelation, AlgebraError> {
    let mut chars = token.chars();
    let code = chars.next().unwrap_or(' ');
    if chars.next().is_some() {
        return Err(AlgebraError::UnknownCode { code });
    }
    TemporalRelation::from_code(code).ok_or(AlgebraError::UnknownCode { code })
}

fn parse_codes(line: &str) -> Result<Vec<TemporalRelation>, AlgebraError> {
    line.split_whitespace().map(parse_code).collect()
}
