//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use noid_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_noid_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[endpoint]
url = "https://noid.example.com/generate"

[messages]
no_reply = "(silence)"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.url, "https://noid.example.com/generate");
    assert_eq!(config.messages.no_reply, "(silence)");
    // Defaults preserved
    assert_eq!(config.endpoint.connect_timeout_secs, 10);
    assert_eq!(config.proxy.bind, "127.0.0.1:8001");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_still_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[proxy]
temperature = 9.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.proxy.temperature, 9.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noid").join("config.toml");

    assert!(create_default_config(&path).unwrap());
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.url, "http://127.0.0.1:8001/generate");
    assert_eq!(config.proxy.model, "gemini-2.5-flash-lite");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::NoidConfig;

    let config: NoidConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_names_noid_file() {
    if std::env::var_os(CONFIG_ENV).is_some() {
        return;
    }
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("noid/config.toml"));
    }
}
