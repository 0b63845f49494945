//! Full configuration validation.
//!
//! Validates numeric ranges, URL schemes and socket addresses. Each config
//! section has its own validator; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::NoidConfig;
use noid_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NoidConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_endpoint(&mut errors, config);
    sections::validate_messages(&mut errors, config);
    sections::validate_proxy(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
