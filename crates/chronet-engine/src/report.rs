//! Reporting view over the network's certain knowledge.

use std::fmt;

use chronet_core::TemporalRelation;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A pair narrowed to exactly one possible relation.
///
/// Produced by [`crate::TimeNet::known_facts`]; renders as
/// `"<subject label>" <relation> "<object label>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownFact {
    pub subject: Event,
    pub relation: TemporalRelation,
    pub object: Event,
}

impl fmt::Display for KnownFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {} \"{}\"",
            self.subject.label(),
            self.relation,
            self.object.label()
        )
    }
}
