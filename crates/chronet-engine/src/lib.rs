//! # chronet-engine
//!
//! A temporal constraint network over Allen's interval algebra. Events are
//! identity-only nodes; all temporal knowledge is relational. Each assertion
//! triggers a path-consistency fixpoint that narrows the possible relation
//! sets of every affected pair via the composition table.
//!
//! ```
//! use chronet_core::TemporalRelation;
//! use chronet_engine::{Event, TimeNet};
//!
//! let went = Event::new("E1", "Mary went to the airport");
//! let flew = Event::new("E4", "Mary flew from Trondheim to Oslo");
//!
//! let mut net = TimeNet::new();
//! net.add_relation(TemporalRelation::Before, &went, &flew)?;
//!
//! assert_eq!(
//!     net.relation_between(&flew, &went).as_single(),
//!     Some(TemporalRelation::After)
//! );
//! # Ok::<(), chronet_core::ContradictionError>(())
//! ```

pub mod event;
pub mod net;
pub mod report;

pub use event::Event;
pub use net::{AlwaysComparable, Comparability, TimeNet};
pub use report::KnownFact;
