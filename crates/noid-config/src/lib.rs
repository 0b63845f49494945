//! NOID configuration system.
//!
//! Provides TOML-based configuration shared by the chat front-end and the
//! relay proxy. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use noid_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    EndpointConfig, LogLevel, LoggingConfig, MessagesConfig, NoidConfig, ProxyConfig,
};

use std::path::Path;

use noid_common::ConfigError;

/// Load and validate the config.
///
/// With an explicit `path` the file must exist. Without one, `config.toml`
/// is read from the OS config directory and created with defaults if absent.
pub fn load_config(path: Option<&Path>) -> Result<NoidConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &NoidConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
