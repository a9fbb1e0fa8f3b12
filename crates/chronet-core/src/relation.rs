//! The fixed vocabulary of qualitative temporal relations.
//!
//! Allen's interval algebra has exactly 13 mutually exclusive relations
//! between two intervals. The set is closed: every relation has an inverse
//! in the same set, and composing any two relations yields a subset of the
//! same 13 (see [`crate::algebra`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 13 Allen relations between two temporal intervals.
///
/// The declaration order is stable and doubles as the bit position in
/// [`crate::set::RelationSet`] and as the row/column index of the
/// composition matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalRelation {
    Equals,
    Before,
    After,
    During,
    Contains,
    Overlaps,
    OverlappedBy,
    Meets,
    MetBy,
    Starts,
    StartedBy,
    Finishes,
    FinishedBy,
}

impl TemporalRelation {
    /// All 13 relations, in bit/matrix order.
    pub const ALL: [TemporalRelation; 13] = [
        TemporalRelation::Equals,
        TemporalRelation::Before,
        TemporalRelation::After,
        TemporalRelation::During,
        TemporalRelation::Contains,
        TemporalRelation::Overlaps,
        TemporalRelation::OverlappedBy,
        TemporalRelation::Meets,
        TemporalRelation::MetBy,
        TemporalRelation::Starts,
        TemporalRelation::StartedBy,
        TemporalRelation::Finishes,
        TemporalRelation::FinishedBy,
    ];

    /// The single-character code used in the tabular algebra representation.
    ///
    /// Upper case marks the converse of the lower-case relation.
    pub const fn code(self) -> char {
        match self {
            TemporalRelation::Equals => '=',
            TemporalRelation::Before => '<',
            TemporalRelation::After => '>',
            TemporalRelation::During => 'd',
            TemporalRelation::Contains => 'D',
            TemporalRelation::Overlaps => 'o',
            TemporalRelation::OverlappedBy => 'O',
            TemporalRelation::Meets => 'm',
            TemporalRelation::MetBy => 'M',
            TemporalRelation::Starts => 's',
            TemporalRelation::StartedBy => 'S',
            TemporalRelation::Finishes => 'f',
            TemporalRelation::FinishedBy => 'F',
        }
    }

    /// The long human-readable form used in reports.
    pub const fn description(self) -> &'static str {
        match self {
            TemporalRelation::Equals => "equals",
            TemporalRelation::Before => "is before",
            TemporalRelation::After => "is after",
            TemporalRelation::During => "is during",
            TemporalRelation::Contains => "contains",
            TemporalRelation::Overlaps => "overlaps",
            TemporalRelation::OverlappedBy => "is overlapped by",
            TemporalRelation::Meets => "meets",
            TemporalRelation::MetBy => "is met by",
            TemporalRelation::Starts => "starts",
            TemporalRelation::StartedBy => "is started by",
            TemporalRelation::Finishes => "finishes",
            TemporalRelation::FinishedBy => "is finished by",
        }
    }

    /// Look up a relation by its single-character code.
    pub const fn from_code(code: char) -> Option<TemporalRelation> {
        Some(match code {
            '=' => TemporalRelation::Equals,
            '<' => TemporalRelation::Before,
            '>' => TemporalRelation::After,
            'd' => TemporalRelation::During,
            'D' => TemporalRelation::Contains,
            'o' => TemporalRelation::Overlaps,
            'O' => TemporalRelation::OverlappedBy,
            'm' => TemporalRelation::Meets,
            'M' => TemporalRelation::MetBy,
            's' => TemporalRelation::Starts,
            'S' => TemporalRelation::StartedBy,
            'f' => TemporalRelation::Finishes,
            'F' => TemporalRelation::FinishedBy,
            _ => return None,
        })
    }

    /// The converse relation: if `A r B` then `B r.inverse() A`.
    ///
    /// Equals is self-inverse, Before/After are mutual, and the remaining
    /// ten form five hard-coded converse pairs.
    pub const fn inverse(self) -> TemporalRelation {
        match self {
            TemporalRelation::Equals => TemporalRelation::Equals,
            TemporalRelation::Before => TemporalRelation::After,
            TemporalRelation::After => TemporalRelation::Before,
            TemporalRelation::During => TemporalRelation::Contains,
            TemporalRelation::Contains => TemporalRelation::During,
            TemporalRelation::Overlaps => TemporalRelation::OverlappedBy,
            TemporalRelation::OverlappedBy => TemporalRelation::Overlaps,
            TemporalRelation::Meets => TemporalRelation::MetBy,
            TemporalRelation::MetBy => TemporalRelation::Meets,
            TemporalRelation::Starts => TemporalRelation::StartedBy,
            TemporalRelation::StartedBy => TemporalRelation::Starts,
            TemporalRelation::Finishes => TemporalRelation::FinishedBy,
            TemporalRelation::FinishedBy => TemporalRelation::Finishes,
        }
    }
}

impl fmt::Display for TemporalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
