//! Constraint-network configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for a constraint network.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetConfig {
    /// Fail an assertion when propagation narrows some pair's relation set
    /// to the empty set. Default: true. When disabled, empty sets are
    /// committed and propagation continues — matching implementations that
    /// never check for contradictions.
    pub detect_contradictions: Option<bool>,
}

impl NetConfig {
    /// Returns whether contradiction detection is enabled, defaulting to true.
    pub fn effective_detect_contradictions(&self) -> bool {
        self.detect_contradictions.unwrap_or(true)
    }

    /// Parse a config from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<NetConfig, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}
