//! Sets of temporal relations, packed into a 13-bit mask.
//!
//! A pair of events in the constraint network carries a `RelationSet`: the
//! relations still considered possible between them. Propagation only ever
//! narrows these sets by intersection, so all operations here are cheap,
//! copyable bit arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::errors::AlgebraError;
use crate::relation::TemporalRelation;

const FULL_MASK: u16 = (1 << 13) - 1;

/// A set of [`TemporalRelation`]s.
///
/// Bit `i` corresponds to `TemporalRelation::ALL[i]`. The full set is the
/// "unconstrained" wildcard value used for pairs nothing is known about.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelationSet(u16);

impl RelationSet {
    /// The empty set. A pair narrowed to this is contradictory.
    pub const fn empty() -> Self {
        RelationSet(0)
    }

    /// All 13 relations — the unconstrained wildcard.
    pub const fn full() -> Self {
        RelationSet(FULL_MASK)
    }

    /// A single-relation set.
    pub const fn singleton(relation: TemporalRelation) -> Self {
        RelationSet(1 << relation as u16)
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        RelationSet(bits & FULL_MASK)
    }

    pub const fn contains(self, relation: TemporalRelation) -> bool {
        self.0 & (1 << relation as u16) != 0
    }

    #[must_use]
    pub const fn insert(self, relation: TemporalRelation) -> Self {
        RelationSet(self.0 | (1 << relation as u16))
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        RelationSet(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        RelationSet(self.0 & other.0)
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == FULL_MASK
    }

    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// A proper subset is a subset that isn't equal. This is the re-queue
    /// trigger in the propagation loop: equal-or-larger candidates carry no
    /// new information.
    pub const fn is_proper_subset(self, other: Self) -> bool {
        self.is_subset(other) && self.0 != other.0
    }

    /// The only member, if the set has been narrowed to certain knowledge.
    pub fn as_single(self) -> Option<TemporalRelation> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// The element-wise inverse image: `{ r.inverse() | r in self }`.
    pub fn inverse(self) -> Self {
        self.iter()
            .map(TemporalRelation::inverse)
            .collect()
    }

    /// Iterate members in `TemporalRelation::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = TemporalRelation> {
        TemporalRelation::ALL
            .into_iter()
            .filter(move |r| self.contains(*r))
    }
}

impl FromIterator<TemporalRelation> for RelationSet {
    fn from_iter<I: IntoIterator<Item = TemporalRelation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RelationSet::empty(), RelationSet::insert)
    }
}

/// Renders the cell format of the tabular algebra source: the concatenated
/// single-character codes, or `*` for the full set.
impl fmt::Display for RelationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full() {
            return f.write_str("*");
        }
        for relation in self.iter() {
            write!(f, "{}", relation.code())?;
        }
        Ok(())
    }
}

impl fmt::Debug for RelationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelationSet({})", self)
    }
}

impl FromStr for RelationSet {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(RelationSet::full());
        }
        let mut set = RelationSet::empty();
        for code in s.chars() {
            let relation =
                TemporalRelation::from_code(code).ok_or(AlgebraError::UnknownCode { code })?;
            set = set.insert(relation);
        }
        Ok(set)
    }
}
