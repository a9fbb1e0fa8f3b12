//! Constraint-network errors.

/// Propagation narrowed a pair's relation set to the empty set: the asserted
/// constraints are mutually contradictory.
///
/// Carries the ids of the offending pair. The network is left with the empty
/// set committed for that pair, so a subsequent query shows where the
/// assertions collapsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contradictory constraints: no temporal relation remains possible between '{left}' and '{right}'")]
pub struct ContradictionError {
    pub left: String,
    pub right: String,
}

impl ContradictionError {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        ContradictionError {
            left: left.into(),
            right: right.into(),
        }
    }
}
