//! Logging configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// `EnvFilter` directive for a binary's own crates, e.g. `noid=info`.
    pub fn directive(&self, target: &str) -> String {
        format!("{target}={}", self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_lowercase() {
        let cfg: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(cfg.level, LogLevel::Debug);
    }

    #[test]
    fn directive_formats_target_and_level() {
        let cfg = LoggingConfig {
            level: LogLevel::Warn,
        };
        assert_eq!(cfg.directive("noid_proxy"), "noid_proxy=warn");
    }
}
