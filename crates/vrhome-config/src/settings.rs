//! A config paired with the theme it selects.

use crate::schema::LauncherConfig;
use crate::theme::{self, Theme};
use crate::{toml_loader, validation};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use vrhome_common::ConfigError;

/// Everything the launcher needs to build or rebuild its scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub config: LauncherConfig,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: LauncherConfig::default(),
            theme: theme::forest(),
        }
    }
}

impl Settings {
    /// Pair a config with its resolved theme (falls back to `forest`).
    pub fn from_config(config: LauncherConfig) -> Self {
        let theme = theme::resolve_theme(&config.theme);
        Self { config, theme }
    }

    /// Load and validate a config file, then resolve its theme.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = toml_loader::load_from_path(path)?;
        validation::validate(&config)?;
        Ok(Self::from_config(config))
    }

    /// Like [`Settings::load`], but any failure yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to load config from {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Files whose modification should trigger a reload.
    pub fn watched_files(&self, config_path: &Path) -> Vec<PathBuf> {
        let mut files = vec![config_path.to_path_buf()];
        if let Some(theme_path) = theme::theme_source_path(&self.config.theme.name) {
            files.push(theme_path);
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let settings = Settings::load_or_default(Path::new("/tmp/nonexistent_vrhome_settings.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_config_is_rejected_by_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nfov_degrees = 1.0\n").unwrap();
        assert!(Settings::load(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn theme_follows_config_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"midnight\"\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.theme, theme::midnight());
        assert_eq!(settings.watched_files(&path), vec![path.clone()]);
    }

    #[test]
    fn custom_theme_file_is_watched() {
        let dir = tempfile::tempdir().unwrap();
        let theme_path = dir.path().join("neon.yaml");
        std::fs::write(&theme_path, "colors:\n  highlight: \"#00ff00\"\n").unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            format!("[theme]\nname = \"{}\"\n", theme_path.display()),
        )
        .unwrap();

        let settings = Settings::load(&config_path).unwrap();
        assert_eq!(settings.theme.highlight_color, "#00ff00");
        assert_eq!(
            settings.watched_files(&config_path),
            vec![config_path.clone(), theme_path]
        );
    }
}
