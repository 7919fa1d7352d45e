//! Configuration file support for Stevedore.
//!
//! A single optional file, `stevedore.toml`, read from the current
//! directory. Every field has a default; CLI flags take precedence over
//! file values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::inspect;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "stevedore.toml";

/// Stevedore configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inspection settings
    pub inspector: InspectorConfig,

    /// Install-command settings
    pub install: InstallConfig,
}

/// Which inspector implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the inspection tools as local subprocesses.
    #[default]
    Local,
    /// Run the inspection tools inside an ephemeral container.
    Container,
}

/// Inspection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Inspector backend selection.
    pub backend: Backend,

    /// Container image used by the container backend.
    pub image: String,

    /// Name prefix for ephemeral containers.
    pub container_prefix: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        InspectorConfig {
            backend: Backend::default(),
            image: inspect::DEFAULT_IMAGE.to_string(),
            container_prefix: "stevedore-inspect".to_string(),
        }
    }
}

/// Install-command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Install verb for Debian-family packages.
    pub deb_command: String,

    /// Install verb for RPM-family packages.
    pub rpm_command: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        InstallConfig {
            deb_command: "apt-get install -y".to_string(),
            rpm_command: "dnf install -y".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't
    /// exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }
}
