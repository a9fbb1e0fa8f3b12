//! Worklist fixpoint for path consistency.
//!
//! On each assertion the network seeds a FIFO worklist with the asserted
//! pair, then repeatedly narrows third-party pairs through the composition
//! table until no pair can be narrowed further. Re-queuing only on a strict
//! proper subset guarantees termination: each pair's set shrinks through a
//! finite lattice.

use std::collections::VecDeque;

use chronet_core::{ContradictionError, RelationSet, TemporalAlgebra};

use super::lookup::{commit, lookup, PairMap};
use super::Comparability;
use crate::event::Event;

/// Run the fixpoint from a freshly learned set for `seed`.
///
/// `learned` holds the frontier: values proposed but not yet merged; they
/// are committed into `known` as their pair is dequeued. Frontier entries
/// only ever shrink, and chaining uses the merged set returned by the
/// commit, so a pair narrowed twice before its dequeue keeps the narrower
/// value. A candidate that narrows to the empty set is committed and then
/// reported as a contradiction unless `detect_contradictions` is off, in
/// which case propagation continues and spreads the emptiness like any
/// other narrowing.
pub(crate) fn run<C: Comparability>(
    algebra: &TemporalAlgebra,
    known: &mut PairMap,
    nodes: &[Event],
    comparability: &C,
    detect_contradictions: bool,
    seed: (usize, usize),
    seed_set: RelationSet,
) -> Result<(), ContradictionError> {
    let mut learned = PairMap::default();
    let mut todo: VecDeque<(usize, usize)> = VecDeque::new();
    learned.insert(seed, seed_set);
    todo.push_back(seed);

    while let Some(pair) = todo.pop_front() {
        let (p, q) = pair;
        let set = match learned.remove(&pair) {
            Some(pending) => commit(known, p, q, pending),
            None => continue,
        };

        for k in 0..nodes.len() {
            if k == p || k == q {
                continue;
            }

            // Forward chaining through p: narrow (k, q).
            if comparability.comparable(&nodes[k], &nodes[q]) {
                let through = algebra.compose_sets(lookup(known, k, p), set);
                narrow(
                    known, &mut learned, &mut todo, nodes, (k, q), through,
                    detect_contradictions,
                )?;
            }

            // Backward chaining through q: narrow (p, k).
            if comparability.comparable(&nodes[p], &nodes[k]) {
                let through = algebra.compose_sets(set, lookup(known, q, k));
                narrow(
                    known, &mut learned, &mut todo, nodes, (p, k), through,
                    detect_contradictions,
                )?;
            }
        }
    }

    Ok(())
}

/// Intersect a composed constraint into the pair's current set; re-queue the
/// pair iff this strictly narrows it.
fn narrow(
    known: &mut PairMap,
    learned: &mut PairMap,
    todo: &mut VecDeque<(usize, usize)>,
    nodes: &[Event],
    pair: (usize, usize),
    through: RelationSet,
    detect_contradictions: bool,
) -> Result<(), ContradictionError> {
    let (a, b) = pair;
    // A pending frontier entry is narrower than the committed set; it is the
    // value to intersect against, or a later insert would widen it.
    let current = match learned.get(&pair) {
        Some(&pending) => pending,
        None => lookup(known, a, b),
    };
    let candidate = through.intersect(current);

    if candidate.is_empty() && detect_contradictions {
        commit(known, a, b, candidate);
        return Err(ContradictionError::new(nodes[a].id(), nodes[b].id()));
    }

    if candidate.is_proper_subset(current) {
        tracing::trace!(
            left = %nodes[a],
            right = %nodes[b],
            from = %current,
            to = %candidate,
            "narrowed pair"
        );
        if learned.insert(pair, candidate).is_none() {
            todo.push_back(pair);
        }
    }

    Ok(())
}
