//! Hash collections keyed by small values on the propagation hot path.

/// Fx-hashed map; the network's pair keys are tiny and fixed-size.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Fx-hashed set.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
