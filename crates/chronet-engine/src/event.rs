//! Identity-only nodes for the constraint graph.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An event: an opaque named interval or point in time.
///
/// Carries no temporal data — all knowledge about an event is relational,
/// held by the network. Identity (equality and hashing) is by `id` alone;
/// the label is free text used in reports. Callers own their events and
/// register them per-network, so independent networks never share state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    id: String,
    label: String,
}

impl Event {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Event {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The short unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable description used in reports.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_by_id() {
        let a = Event::new("E1", "one label");
        let b = Event::new("E1", "another label");
        let c = Event::new("E2", "one label");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_prints_the_id() {
        let event = Event::new("E1", "Mary went to the airport");
        assert_eq!(event.to_string(), "E1");
    }

    #[test]
    fn serializes_both_fields() {
        let event = Event::new("E1", "Mary went to the airport");
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), "E1");
        assert_eq!(back.label(), "Mary went to the airport");
    }
}
