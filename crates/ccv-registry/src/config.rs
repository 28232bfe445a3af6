//! # Registry Configuration
//!
//! The only setting is the admin principal, fixed for the life of a
//! registry. Configuration is read from YAML or JSON.
//!
//! ```yaml
//! admin: ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ccv_core::Principal;

/// Errors raised while loading a [`RegistryConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The YAML document did not parse.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document did not parse.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The admin principal is empty.
    #[error("admin principal must not be empty")]
    EmptyAdmin,
}

/// Settings for a new [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// The principal allowed to authorize verifiers.
    pub admin: Principal,
}

impl RegistryConfig {
    /// Build a config in code.
    pub fn new(admin: impl Into<Principal>) -> Self {
        Self {
            admin: admin.into(),
        }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. `.yaml` and `.yml` are read as YAML, anything
    /// else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            Self::from_yaml_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };
        tracing::debug!(path = %path.display(), admin = %config.admin, "registry config loaded");
        Ok(config)
    }

    /// Reject an empty or whitespace-only admin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin.as_str().trim().is_empty() {
            return Err(ConfigError::EmptyAdmin);
        }
        Ok(())
    }
}
