//! The temporal constraint network.

mod lookup;
mod propagate;

use chronet_core::{
    ContradictionError, FxHashMap, NetConfig, RelationSet, TemporalAlgebra, TemporalRelation,
};

use crate::event::Event;
use crate::report::KnownFact;

use self::lookup::PairMap;

/// Search-pruning strategy: which third-party pairs the propagation loop may
/// narrow. The default admits every pair; a custom strategy can restrict
/// propagation to a neighborhood when networks grow large.
pub trait Comparability {
    fn comparable(&self, a: &Event, b: &Event) -> bool;
}

/// The default strategy: every pair participates in propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysComparable;

impl Comparability for AlwaysComparable {
    fn comparable(&self, _a: &Event, _b: &Event) -> bool {
        true
    }
}

/// A constraint network over events.
///
/// Holds, for every ordered pair of events, the set of relations still
/// possible between them, narrowed from "all 13" as assertions propagate.
/// Sets only ever shrink; asserting something inconsistent with settled
/// knowledge is a [`ContradictionError`].
pub struct TimeNet<C: Comparability = AlwaysComparable> {
    algebra: TemporalAlgebra,
    config: NetConfig,
    nodes: Vec<Event>,
    index: FxHashMap<String, usize>,
    known: PairMap,
    comparability: C,
}

impl TimeNet<AlwaysComparable> {
    /// An empty network over the standard Allen algebra.
    pub fn new() -> Self {
        Self::with_config(NetConfig::default())
    }

    /// An empty network with explicit configuration.
    pub fn with_config(config: NetConfig) -> Self {
        Self::with_comparability(config, AlwaysComparable)
    }

    /// An empty network over a caller-supplied algebra, e.g. one parsed via
    /// [`TemporalAlgebra::from_table_source`].
    pub fn with_algebra(algebra: TemporalAlgebra) -> Self {
        TimeNet {
            algebra,
            config: NetConfig::default(),
            nodes: Vec::new(),
            index: FxHashMap::default(),
            known: PairMap::default(),
            comparability: AlwaysComparable,
        }
    }
}

impl Default for TimeNet<AlwaysComparable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Comparability> TimeNet<C> {
    /// An empty network with a custom comparability strategy.
    pub fn with_comparability(config: NetConfig, comparability: C) -> Self {
        TimeNet {
            algebra: TemporalAlgebra::standard().clone(),
            config,
            nodes: Vec::new(),
            index: FxHashMap::default(),
            known: PairMap::default(),
            comparability,
        }
    }

    /// Register an event. Idempotent; assertions register their endpoints
    /// automatically, so calling this is only needed for events that should
    /// appear in the network before (or without) any constraint on them.
    pub fn add_node(&mut self, event: &Event) {
        self.intern(event);
    }

    /// The events seen so far, in registration order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Assert that `i rel j` holds — certain knowledge, not merely possible.
    ///
    /// Registers both events, then propagates the consequences through every
    /// known third party to a fixpoint. Returns [`ContradictionError`] if
    /// this assertion (directly or transitively) leaves some pair with no
    /// possible relation; the offending pair's empty set stays committed so
    /// queries show where the constraints collapsed.
    pub fn add_relation(
        &mut self,
        rel: TemporalRelation,
        i: &Event,
        j: &Event,
    ) -> Result<(), ContradictionError> {
        let i_idx = self.intern(i);
        let j_idx = self.intern(j);

        tracing::debug!(subject = %i, relation = rel.description(), object = %j, "asserting");

        // Narrowing, never replacement: an assertion at odds with settled
        // knowledge empties the pair rather than widening it.
        let current = lookup::lookup(&mut self.known, i_idx, j_idx);
        let seed = RelationSet::singleton(rel).intersect(current);
        if seed.is_empty() && self.config.effective_detect_contradictions() {
            lookup::commit(&mut self.known, i_idx, j_idx, seed);
            return Err(ContradictionError::new(i.id(), j.id()));
        }

        propagate::run(
            &self.algebra,
            &mut self.known,
            &self.nodes,
            &self.comparability,
            self.config.effective_detect_contradictions(),
            (i_idx, j_idx),
            seed,
        )
    }

    /// The current belief about the relation between `a` and `b`, possibly
    /// still multi-valued. Unregistered distinct events are unconstrained.
    pub fn relation_between(&self, a: &Event, b: &Event) -> RelationSet {
        if a == b {
            return RelationSet::singleton(TemporalRelation::Equals);
        }
        match (self.index.get(a.id()), self.index.get(b.id())) {
            (Some(&ia), Some(&ib)) => lookup::peek(&self.known, ia, ib),
            _ => RelationSet::full(),
        }
    }

    /// Every pair narrowed to exactly one relation — certain knowledge —
    /// sorted by (subject label, object label, relation) for deterministic
    /// reports.
    pub fn known_facts(&self) -> Vec<KnownFact> {
        let mut facts: Vec<KnownFact> = self
            .known
            .iter()
            .filter_map(|(&(a, b), set)| {
                set.as_single().map(|relation| KnownFact {
                    subject: self.nodes[a].clone(),
                    relation,
                    object: self.nodes[b].clone(),
                })
            })
            .collect();
        facts.sort_by(|x, y| {
            (x.subject.label(), x.object.label(), x.relation)
                .cmp(&(y.subject.label(), y.object.label(), y.relation))
        });
        facts
    }

    fn intern(&mut self, event: &Event) -> usize {
        if let Some(&idx) = self.index.get(event.id()) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(event.clone());
        self.index.insert(event.id().to_string(), idx);
        idx
    }
}
