//! Reading the launcher's `config.toml` and seeding it on first run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::schema::LauncherConfig;
use crate::validation;
use tracing::{info, warn};
use vrhome_common::ConfigError;

use super::template::default_config_toml;

/// `<config dir>/vrhome/config.toml`, or `None` when the OS reports no
/// config directory (headless CI, stripped containers).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vrhome").join("config.toml"))
}

/// Parse a launcher config file.
///
/// Missing keys fall back to serde defaults. Validation problems are
/// logged and the parsed values kept, so one bad field never blanks the
/// whole launcher.
pub fn load_from_path(path: &Path) -> Result<LauncherConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: LauncherConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config validation warning: {e}; keeping parsed values");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Write the commented default config to `path` unless a file is already
/// there. Returns whether a file was written.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let io_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("write", path, e))?;

    info!(path = %path.display(), "created default config");
    Ok(true)
}
