//! Error types, one file per concern.

pub mod algebra_error;
pub mod config_error;
pub mod net_error;

pub use algebra_error::AlgebraError;
pub use config_error::ConfigError;
pub use net_error::ContradictionError;
