//! Load-time errors for the composition algebra.

/// A malformed or incomplete composition table source.
///
/// These are configuration errors: they surface while parsing the tabular
/// representation, before any propagation can run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgebraError {
    #[error("table source has no header line")]
    MissingHeader,

    #[error("unknown relation code: '{code}'")]
    UnknownCode { code: char },

    #[error("row '{row}' has {found} cells, expected {expected}")]
    WrongColumnCount {
        row: String,
        expected: usize,
        found: usize,
    },

    #[error("table has {found} rows, expected {expected}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("duplicate row for relation '{code}'")]
    DuplicateRow { code: char },
}
