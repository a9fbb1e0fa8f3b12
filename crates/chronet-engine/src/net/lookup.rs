//! Default lookup rule for pairwise relation sets.
//!
//! The committed map is sparse: a pair can be absent, present directly, or
//! derivable from its mirror entry. The rule is, in order:
//!
//! 1. a pair of a node with itself is `{equals}`;
//! 2. a stored entry for (a, b) is authoritative;
//! 3. a stored entry for (b, a) yields its inverse image;
//! 4. otherwise the pair is unconstrained — the full set.

use chronet_core::{FxHashMap, RelationSet, TemporalRelation};

pub(crate) type PairMap = FxHashMap<(usize, usize), RelationSet>;

/// Look up (a, b), memoizing a derived inverse entry back into the map.
///
/// The memoization keeps the propagation loop from re-deriving the same
/// inverse image on every visit; it is not observable knowledge of its own.
pub(crate) fn lookup(known: &mut PairMap, a: usize, b: usize) -> RelationSet {
    if a == b {
        return RelationSet::singleton(TemporalRelation::Equals);
    }
    if let Some(&set) = known.get(&(a, b)) {
        return set;
    }
    if let Some(&mirror) = known.get(&(b, a)) {
        let inverse = mirror.inverse();
        known.insert((a, b), inverse);
        return inverse;
    }
    RelationSet::full()
}

/// Read-only variant of [`lookup`] for public queries.
pub(crate) fn peek(known: &PairMap, a: usize, b: usize) -> RelationSet {
    if a == b {
        return RelationSet::singleton(TemporalRelation::Equals);
    }
    if let Some(&set) = known.get(&(a, b)) {
        return set;
    }
    if let Some(&mirror) = known.get(&(b, a)) {
        return mirror.inverse();
    }
    RelationSet::full()
}

/// Commit a relation set for (p, q), intersecting into whatever the pair
/// already settled on: a commit can only narrow, never widen. If the mirror
/// entry is cached, rewrite it with the inverse image so the two directions
/// never disagree. Returns the merged set actually stored.
pub(crate) fn commit(known: &mut PairMap, p: usize, q: usize, set: RelationSet) -> RelationSet {
    let current = match known.get(&(p, q)) {
        Some(&direct) => direct,
        None => match known.get(&(q, p)) {
            Some(&mirror) => mirror.inverse(),
            None => RelationSet::full(),
        },
    };
    let merged = current.intersect(set);
    known.insert((p, q), merged);
    if known.contains_key(&(q, p)) {
        known.insert((q, p), merged.inverse());
    }
    merged
}
