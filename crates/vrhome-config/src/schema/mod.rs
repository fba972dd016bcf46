//! Configuration schema types for the launcher.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Note that a `[[panels]]` table in the file replaces the stock panel
//! list entirely rather than appending to it.

mod display;
mod panels;
mod system;

pub use display::*;
pub use panels::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the launcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub theme: ThemeSelection,
    pub panels: Vec<PanelDefinition>,
    pub display: DisplayConfig,
    pub cache: CacheConfig,
    pub assets: AssetsConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSelection::default(),
            panels: default_panels(),
            display: DisplayConfig::default(),
            cache: CacheConfig::default(),
            assets: AssetsConfig::default(),
            navigation: NavigationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_selects_forest() {
        let config = LauncherConfig::default();
        assert_eq!(config.theme.name, "forest");
    }

    #[test]
    fn default_config_has_stock_panels() {
        let config = LauncherConfig::default();
        let titles: Vec<&str> = config.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Starter Kit", "React VR", "Tech Demos"]);
        assert!(config.panels[0].show_refresh_button);
        assert!(!config.panels[1].show_refresh_button);
        assert!((config.panels[1].initial_rotation - std::f32::consts::PI * 0.4).abs() < 1e-6);
        assert!((config.panels[2].initial_rotation + std::f32::consts::PI * 0.4).abs() < 1e-6);
        assert!(config.panels.iter().all(|p| p.samples.len() == 4));
    }

    #[test]
    fn default_display_is_stereo() {
        let display = DisplayConfig::default();
        assert!(!display.vrmono);
        assert_eq!(display.mono_width, 1024);
        assert_eq!(display.mono_height, 1024);
        assert_eq!(display.fov_degrees, 90.0);
        assert_eq!(display.near, 0.01);
        assert_eq!(display.far, 1000.0);
    }

    #[test]
    fn default_cache_and_assets() {
        let config = LauncherConfig::default();
        assert!(config.cache.enabled);
        assert_eq!(config.assets.refresh_icon, "refresh.png");
        assert!(config.navigation.base_url.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: LauncherConfig = toml::from_str(
            r#"
[display]
vrmono = true
"#,
        )
        .unwrap();
        assert!(config.display.vrmono);
        assert_eq!(config.display.mono_width, 1024);
        assert_eq!(config.panels.len(), 3);
    }

    #[test]
    fn panels_table_replaces_stock_panels() {
        let config: LauncherConfig = toml::from_str(
            r#"
[[panels]]
title = "Mine"
show_refresh_button = true

[[panels.samples]]
text = "Local"
url = "local/index.html"
"#,
        )
        .unwrap();
        assert_eq!(config.panels.len(), 1);
        assert_eq!(config.panels[0].title, "Mine");
        assert_eq!(config.panels[0].initial_rotation, 0.0);
        assert_eq!(config.panels[0].samples[0].description, None);
    }

    #[test]
    fn panel_accepts_camel_case_keys() {
        let panel: PanelDefinition = serde_json::from_str(
            r#"{"title":"T","showRefreshButton":true,"initialRotation":1.5,"samples":[]}"#,
        )
        .unwrap();
        assert!(panel.show_refresh_button);
        assert_eq!(panel.initial_rotation, 1.5);
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Warning.as_directive(), "warn");
        let parsed: LoggingConfig = toml::from_str("level = \"DEBUG\"").unwrap();
        assert_eq!(parsed.level, LogLevel::Debug);
    }
}
