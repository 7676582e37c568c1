//! Container configuration.

use serde::{Deserialize, Serialize};

/// Behavior knobs shared by every container a factory builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Let index-style `set` on a collection append when the index equals the
    /// current size, instead of failing with `IndexNotFound`.
    pub append_on_set: bool,
    /// Capacity reserved up front for new containers.
    pub initial_capacity: usize,
}

impl ContainerConfig {
    /// Sets [`append_on_set`](Self::append_on_set).
    #[must_use]
    pub fn append_on_set(mut self, enabled: bool) -> Self {
        self.append_on_set = enabled;
        self
    }

    /// Sets [`initial_capacity`](Self::initial_capacity).
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Loads a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let config = ContainerConfig::default();
        assert!(!config.append_on_set);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ContainerConfig::from_json(r#"{ "append_on_set": true }"#).unwrap();
        assert_eq!(config, ContainerConfig::default().append_on_set(true));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ContainerConfig::from_json("{ append_on_set").is_err());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = ContainerConfig::default().initial_capacity(16);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ContainerConfig::from_json(&json).unwrap(), config);
    }
}
