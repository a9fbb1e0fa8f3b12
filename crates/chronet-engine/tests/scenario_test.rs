//! End-to-end scenarios over the constraint network.

use chronet_core::{RelationSet, TemporalAlgebra, TemporalRelation};
use chronet_engine::{Event, TimeNet};

use TemporalRelation::*;

fn airport_events() -> (Event, Event, Event, Event) {
    (
        Event::new("E1", "Mary went to the airport"),
        Event::new("E2", "Peter bought a car"),
        Event::new("E3", "Peter drove Mary to the airport"),
        Event::new("E4", "Mary flew from Trondheim to Oslo"),
    )
}

#[test]
fn airport_scenario_derives_certain_facts() {
    let (e1, e2, e3, e4) = airport_events();

    let mut net = TimeNet::new();
    net.add_relation(Before, &e1, &e4).unwrap();
    net.add_relation(Before, &e2, &e3).unwrap();
    net.add_relation(Equals, &e1, &e3).unwrap();

    // Asserted knowledge, both directions.
    assert_eq!(net.relation_between(&e1, &e4).as_single(), Some(Before));
    assert_eq!(net.relation_between(&e4, &e1).as_single(), Some(After));

    // Transitively derived: bought before drove, drove equals went,
    // went before flew.
    assert_eq!(net.relation_between(&e2, &e1).as_single(), Some(Before));
    assert_eq!(net.relation_between(&e2, &e4).as_single(), Some(Before));
    assert_eq!(net.relation_between(&e3, &e4).as_single(), Some(Before));
}

#[test]
fn airport_scenario_report_is_sorted_and_rendered() {
    let (e1, e2, e3, e4) = airport_events();

    let mut net = TimeNet::new();
    net.add_relation(Before, &e1, &e4).unwrap();
    net.add_relation(Before, &e2, &e3).unwrap();
    net.add_relation(Equals, &e1, &e3).unwrap();

    let facts = net.known_facts();
    assert!(!facts.is_empty());

    // Deterministic ordering: lexicographic by subject label, then object.
    let keys: Vec<(String, String)> = facts
        .iter()
        .map(|f| (f.subject.label().to_string(), f.object.label().to_string()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let rendered: Vec<String> = facts.iter().map(|f| f.to_string()).collect();
    assert!(rendered.contains(
        &"\"Mary went to the airport\" equals \"Peter drove Mary to the airport\"".to_string()
    ));
    assert!(rendered.contains(
        &"\"Mary flew from Trondheim to Oslo\" is after \"Peter bought a car\"".to_string()
    ));
}

#[test]
fn facts_serialize_to_json() {
    let (e1, _, e3, _) = airport_events();
    let mut net = TimeNet::new();
    net.add_relation(Equals, &e1, &e3).unwrap();

    let facts = net.known_facts();
    let json = serde_json::to_string(&facts).unwrap();
    let back: Vec<chronet_engine::KnownFact> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, facts);
}

#[test]
fn asserted_contradiction_is_detected() {
    let a = Event::new("A", "a");
    let b = Event::new("B", "b");

    let mut net = TimeNet::new();
    net.add_relation(Before, &a, &b).unwrap();
    let err = net.add_relation(Before, &b, &a).unwrap_err();
    assert!(err.to_string().contains('B'));
    assert!(err.to_string().contains('A'));
    assert!(net.relation_between(&b, &a).is_empty());
}

#[test]
fn transitive_contradiction_is_detected() {
    let a = Event::new("A", "a");
    let b = Event::new("B", "b");
    let c = Event::new("C", "c");

    let mut net = TimeNet::new();
    net.add_relation(Before, &a, &b).unwrap();
    net.add_relation(Before, &b, &c).unwrap();
    // a < c is now settled; asserting c < a must fail.
    assert!(net.add_relation(Before, &c, &a).is_err());
}

#[test]
fn unconstrained_pair_is_the_full_set() {
    let x = Event::new("X", "x");
    let y = Event::new("Y", "y");

    let mut net = TimeNet::new();
    net.add_node(&x);
    net.add_node(&y);
    assert!(net.relation_between(&x, &y).is_full());
    assert_eq!(net.relation_between(&x, &y).len(), 13);
}

#[test]
fn self_relation_is_equals() {
    let x = Event::new("X", "x");
    let net = TimeNet::new();
    assert_eq!(
        net.relation_between(&x, &x),
        RelationSet::singleton(Equals)
    );
}

#[test]
fn composition_identities() {
    let algebra = TemporalAlgebra::standard();
    assert_eq!(
        algebra.compose(Before, Before),
        RelationSet::singleton(Before)
    );
    for r in TemporalRelation::ALL {
        assert_eq!(algebra.compose(Equals, r), RelationSet::singleton(r));
    }
}

#[test]
fn redundant_assertion_preserves_all_knowledge() {
    let (e1, e2, e3, e4) = airport_events();

    let mut net = TimeNet::new();
    net.add_relation(Before, &e1, &e4).unwrap();
    net.add_relation(Before, &e2, &e3).unwrap();
    net.add_relation(Equals, &e1, &e3).unwrap();

    let events = [&e1, &e2, &e3, &e4];
    let snapshot: Vec<RelationSet> = events
        .iter()
        .flat_map(|a| events.iter().map(|b| net.relation_between(a, b)))
        .collect();
    let facts = net.known_facts();

    // Already implied by existing knowledge.
    net.add_relation(Before, &e2, &e4).unwrap();
    net.add_relation(Equals, &e1, &e3).unwrap();

    let after: Vec<RelationSet> = events
        .iter()
        .flat_map(|a| events.iter().map(|b| net.relation_between(a, b)))
        .collect();
    assert_eq!(after, snapshot);

    // No previously-known fact is lost (the report may gain mirror entries).
    let rendered: Vec<String> = net.known_facts().iter().map(|f| f.to_string()).collect();
    for fact in facts {
        assert!(rendered.contains(&fact.to_string()));
    }
}

#[test]
fn fanout_from_one_event_converges_in_a_single_call() {
    let hub = Event::new("E0", "hub");
    let x = Event::new("E1", "x");
    let y = Event::new("E2", "y");
    let z = Event::new("E3", "z");

    // Three assertions sharing one endpoint; the third one narrows (y, z)
    // through the hub while (y, z) may already sit on the worklist. Each
    // call must still leave the pair at its fully composed value.
    let mut net = TimeNet::new();
    net.add_relation(Meets, &hub, &x).unwrap();
    net.add_relation(Overlaps, &hub, &y).unwrap();
    net.add_relation(During, &hub, &z).unwrap();

    let expected = TemporalAlgebra::standard().compose(OverlappedBy, During);
    assert_eq!(
        expected,
        RelationSet::singleton(During)
            .insert(OverlappedBy)
            .insert(Finishes)
    );
    assert_eq!(net.relation_between(&y, &z), expected);
    assert_eq!(net.relation_between(&z, &y), expected.inverse());

    // Re-asserting settled knowledge must not uncover further narrowing.
    let events = [&hub, &x, &y, &z];
    let snapshot: Vec<RelationSet> = events
        .iter()
        .flat_map(|a| events.iter().map(|b| net.relation_between(a, b)))
        .collect();
    net.add_relation(During, &hub, &z).unwrap();
    let after: Vec<RelationSet> = events
        .iter()
        .flat_map(|a| events.iter().map(|b| net.relation_between(a, b)))
        .collect();
    assert_eq!(after, snapshot);
}

#[test]
fn partial_knowledge_stays_multivalued() {
    let a = Event::new("A", "a");
    let b = Event::new("B", "b");
    let c = Event::new("C", "c");

    let mut net = TimeNet::new();
    net.add_relation(During, &a, &b).unwrap();
    net.add_relation(During, &c, &b).unwrap();

    // Two intervals inside the same container can relate in any way.
    let set = net.relation_between(&a, &c);
    assert!(set.len() > 1);
    assert!(set.contains(Before));
    assert!(set.contains(Equals));
    assert!(set.contains(After));
    // Certain facts never include the still-ambiguous pair.
    assert!(net
        .known_facts()
        .iter()
        .all(|f| !(f.subject == a && f.object == c)));
}
