//! Theme file resolution and loading.
//!
//! Resolves theme names to either a built-in [`Theme`] or a YAML file of
//! [`ThemeOverrides`] that is merged onto its base.

use super::apply::apply_theme;
use super::builtin::built_in;
use super::types::{Theme, ThemeOverrides, DEFAULT_THEME};
use std::path::{Path, PathBuf};
use tracing::info;
use vrhome_common::ConfigError;

/// Resolve the filesystem path for a theme by name.
///
/// Theme files are looked up in `resources/themes/` relative to the
/// executable directory, then the working directory, then the user config
/// directory. If the name looks like a file path (contains `/` or ends in
/// `.yaml`/`.yml`), it is used directly.
fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    let file_name = format!("{name}.yaml");

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let theme_path = exe_dir.join("resources").join("themes").join(&file_name);
            if theme_path.exists() {
                return Ok(theme_path);
            }
        }
    }

    let local_path = PathBuf::from("resources").join("themes").join(&file_name);
    if local_path.exists() {
        return Ok(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_theme = config_dir.join("vrhome").join("themes").join(&file_name);
        if config_theme.exists() {
            return Ok(config_theme);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}

/// Load a theme by name.
///
/// Built-in names resolve without touching the filesystem. Anything else
/// is looked up as a YAML overrides file and merged onto its base.
pub fn load_theme(name: &str) -> Result<Theme, ConfigError> {
    if let Some(theme) = built_in(name) {
        return Ok(theme);
    }

    let path = resolve_theme_path(name)?;
    let overrides = load_theme_from_path(&path)?;
    let mut theme = resolve_overrides(&overrides)?;
    if overrides.name.is_none() {
        theme.name = name.to_string();
    }
    crate::validation::validate_theme(&theme)?;
    Ok(theme)
}

/// The YAML file backing a theme, or `None` for built-ins and unknown names.
pub fn theme_source_path(name: &str) -> Option<PathBuf> {
    if built_in(name).is_some() {
        return None;
    }
    resolve_theme_path(name).ok()
}

/// Merge a set of overrides onto the built-in theme it names as `base`.
pub fn resolve_overrides(overrides: &ThemeOverrides) -> Result<Theme, ConfigError> {
    let base_name = overrides.base.as_deref().unwrap_or(DEFAULT_THEME);
    let mut theme = built_in(base_name).ok_or_else(|| {
        ConfigError::ValidationError(format!("unknown base theme '{base_name}'"))
    })?;
    apply_theme(&mut theme, overrides);
    Ok(theme)
}

/// Load theme overrides from a specific filesystem path.
pub fn load_theme_from_path(path: &Path) -> Result<ThemeOverrides, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme: ThemeOverrides = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse theme YAML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded theme from {}", path.display());
    Ok(theme)
}
