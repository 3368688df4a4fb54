//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, IngestionSettings, ValidationSettings};

/// The configuration file name inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── engine.yaml   # ingestion and validation settings
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_gap_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Fallback category: {}", loader.ingestion().fallback_category);
/// # Ok::<(), pay_gap_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from `engine.yaml` in the specified directory.
    ///
    /// Returns `ConfigNotFound` if the file is missing and `ConfigParseError`
    /// if it is not valid YAML for [`EngineConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        debug!(path = %config_path.display(), "Loaded engine configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the payroll mapping settings.
    pub fn ingestion(&self) -> &IngestionSettings {
        &self.config.ingestion
    }

    /// Returns the validation settings.
    pub fn validation(&self) -> &ValidationSettings {
        &self.config.validation
    }
}
