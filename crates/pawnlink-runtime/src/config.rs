//! Bridge configuration (pawnlink.toml)
//!
//! The host points the bridge at its two managed assemblies and names
//! the game-mode class to instantiate. Parsed from TOML at startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the bridge configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required field is present but unusable
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Bridge configuration (pawnlink.toml)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BridgeConfig {
    /// Path to the base-mode assembly (the fallback lookup scope).
    pub basemode_path: PathBuf,

    /// Path to the game-mode assembly (the primary lookup scope).
    pub gamemode_path: PathBuf,

    /// Namespace of the game-mode class.
    pub gamemode_namespace: String,

    /// Name of the game-mode class to instantiate.
    pub gamemode_class: String,

    /// Emit extra startup diagnostics.
    #[serde(default)]
    pub debug: bool,
}

impl BridgeConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse and validate a configuration from TOML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.basemode_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("basemode_path is empty".to_string()));
        }
        if self.gamemode_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("gamemode_path is empty".to_string()));
        }
        if self.gamemode_namespace.is_empty() {
            return Err(ConfigError::Validation(
                "gamemode_namespace is empty".to_string(),
            ));
        }
        if self.gamemode_class.is_empty() {
            return Err(ConfigError::Validation("gamemode_class is empty".to_string()));
        }
        Ok(())
    }
}
