//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use crate::theme::{forest, midnight, EnvironmentDescriptor};

#[test]
fn default_config_validates() {
    let config = LauncherConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn built_in_themes_validate() {
    assert!(validate_theme(&forest()).is_ok());
    assert!(validate_theme(&midnight()).is_ok());
}

#[test]
fn catches_empty_panel_title() {
    let mut config = LauncherConfig::default();
    config.panels[1].title = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panels[1].title"));
}

#[test]
fn catches_empty_sample_text() {
    let mut config = LauncherConfig::default();
    config.panels[0].samples[2].text.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panels[0].samples[2].text"));
}

#[test]
fn relative_sample_urls_are_accepted() {
    let mut config = LauncherConfig::default();
    config.panels[0].samples[0].url = "../Samples/index.html".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_sample_url() {
    let mut config = LauncherConfig::default();
    config.panels[0].samples[0].url = "http://[::1".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panels[0].samples[0].url"));
}

#[test]
fn catches_bad_base_url() {
    let mut config = LauncherConfig::default();
    config.navigation.base_url = Some("not a url".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("navigation.base_url"));
}

#[test]
fn overflowing_panel_is_not_an_error() {
    let mut config = LauncherConfig::default();
    let extra = config.panels[0].samples.clone();
    config.panels[0].samples.extend(extra);
    assert_eq!(config.panels[0].samples.len(), 8);
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = LauncherConfig::default();
    config.display.fov_degrees = 10.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.fov_degrees"));
}

#[test]
fn catches_near_beyond_far() {
    let mut config = LauncherConfig::default();
    config.display.near = 2000.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.near"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = LauncherConfig::default();
    config.display.mono_width = 1;
    config.display.mono_height = 100_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.mono_width"));
    assert!(err.contains("display.mono_height"));
    assert!(err.contains("; "));
}

#[test]
fn catches_bad_theme_color() {
    let mut theme = forest();
    theme.highlight_color = "glowing".into();
    let err = validate_theme(&theme).unwrap_err().to_string();
    assert!(err.contains("colors.highlight"));
}

#[test]
fn catches_text_center_out_of_range() {
    let mut theme = forest();
    theme.url_text.alpha_center = 1.5;
    theme.title_text.text_size = 0.0;
    let err = validate_theme(&theme).unwrap_err().to_string();
    assert!(err.contains("url_text.alpha_center"));
    assert!(err.contains("title_text.text_size"));
}

#[test]
fn catches_empty_cube_face() {
    let mut theme = forest();
    let faces = || ["a", "b", "c", "d", "e", "f"].map(String::from);
    let mut left = faces();
    left[3] = String::new();
    theme.environment = Some(EnvironmentDescriptor::Cube {
        left,
        right: faces(),
        initial_orientation: 0.0,
    });
    let err = validate_theme(&theme).unwrap_err().to_string();
    assert!(err.contains("cube faces"));
}
