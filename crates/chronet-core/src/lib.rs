//! # chronet-core
//!
//! Foundation crate for the chronet temporal reasoning engine.
//! Defines the Allen relation vocabulary, relation sets, the composition
//! algebra, errors, config, and tracing setup. The engine crate builds on
//! these types; nothing in here propagates constraints.

pub mod algebra;
pub mod config;
pub mod errors;
pub mod relation;
pub mod set;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use algebra::TemporalAlgebra;
pub use config::NetConfig;
pub use errors::{AlgebraError, ConfigError, ContradictionError};
pub use relation::TemporalRelation;
pub use set::RelationSet;
pub use types::collections::{FxHashMap, FxHashSet};
