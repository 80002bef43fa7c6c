//! Configuration for the denoise layer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Cell connectivity: the rule deciding which neighboring cells belong
/// to the same obstacle group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectivityType {
    /// Neighbors are connected horizontally and vertically.
    Way4 = 4,
    /// Neighbors are connected horizontally, vertically and diagonally.
    Way8 = 8,
}

/// Denoise layer configuration.
///
/// Raw parameter values as the host declares them. Out-of-range values
/// are kept here as-is; [`DenoiseLayer::new`] coerces them to valid
/// runtime parameters and warns once per substitution.
///
/// ## Example TOML
///
/// ```toml
/// enabled = true
/// minimal_group_size = 2      # groups below this size are erased
/// group_connectivity_type = 8 # 4 or 8
/// ```
///
/// [`DenoiseLayer::new`]: crate::denoise::DenoiseLayer::new
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DenoiseConfig {
    /// Enable/disable the layer. A disabled layer is skipped by the host.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Groups of this size and larger are kept; smaller groups are
    /// erased. Values of 1 or less disable filtering.
    #[serde(default = "default_minimal_group_size")]
    pub minimal_group_size: i64,

    /// Connectivity as declared: 4 or 8. Any other value falls back to 8.
    #[serde(default = "default_group_connectivity_type")]
    pub group_connectivity_type: i64,
}

fn default_enabled() -> bool {
    true
}

fn default_minimal_group_size() -> i64 {
    2
}

fn default_group_connectivity_type() -> i64 {
    8
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            minimal_group_size: default_minimal_group_size(),
            group_connectivity_type: default_group_connectivity_type(),
        }
    }
}

impl DenoiseConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DenoiseConfig::default();

        assert!(config.enabled);
        assert_eq!(config.minimal_group_size, 2);
        assert_eq!(config.group_connectivity_type, 8);
    }

    #[test]
    fn test_from_toml() {
        let config = DenoiseConfig::from_toml_str(
            "enabled = false\nminimal_group_size = 5\ngroup_connectivity_type = 4\n",
        )
        .unwrap();

        assert!(!config.enabled);
        assert_eq!(config.minimal_group_size, 5);
        assert_eq!(config.group_connectivity_type, 4);
    }

    #[test]
    fn test_toml_defaults_fill_missing_fields() {
        let config = DenoiseConfig::from_toml_str("minimal_group_size = 3\n").unwrap();

        assert!(config.enabled);
        assert_eq!(config.minimal_group_size, 3);
        assert_eq!(config.group_connectivity_type, 8);
    }

    #[test]
    fn test_bad_toml() {
        assert!(DenoiseConfig::from_toml_str("minimal_group_size = \"many\"").is_err());
    }
}
