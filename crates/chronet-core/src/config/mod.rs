//! Configuration structs.

pub mod net_config;

pub use net_config::NetConfig;
