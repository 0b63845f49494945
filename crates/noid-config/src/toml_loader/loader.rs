//! Core TOML config loading: read from a path or the platform default.

use crate::schema::NoidConfig;
use crate::validation;
use noid_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation problems are logged here; callers that need a valid config
/// go through [`crate::load_config`], which rejects them.
pub fn load_from_path(path: &Path) -> Result<NoidConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: NoidConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the file at [`default_config_path`], seeding it from the template
/// on first run.
pub fn load_default() -> Result<NoidConfig, ConfigError> {
    let path = default_config_path()?;
    if create_default_config(&path)? {
        return Ok(NoidConfig::default());
    }
    load_from_path(&path)
}
