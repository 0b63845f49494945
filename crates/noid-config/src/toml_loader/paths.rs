//! Where the config file lives, and seeding it on first run.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use noid_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that points at a config file outside the
/// platform config directory.
pub const CONFIG_ENV: &str = "NOID_CONFIG";

/// `$NOID_CONFIG` when set and non-empty, else `<config_dir>/noid/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_ENV), dirs::config_dir())
}

fn resolve_config_path(
    override_path: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join("noid").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`.
///
/// Returns `false` without touching anything if the file already exists.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let io_error = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("cannot create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(io_error("cannot create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_error("cannot write", e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let path = resolve_config_path(
            Some("/etc/noid.toml".into()),
            Some(PathBuf::from("/home/me/.config")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/etc/noid.toml"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let path =
            resolve_config_path(Some(OsString::new()), Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(path, PathBuf::from("/cfg/noid/config.toml"));
    }

    #[test]
    fn no_config_dir_is_an_error() {
        assert!(matches!(
            resolve_config_path(None, None),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        assert!(!create_default_config(&path).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[logging]\nlevel = \"debug\"\n"
        );
    }
}
