//! Full configuration validation.
//!
//! Validates numeric ranges, sample URLs, and theme colors. Each domain has
//! its own submodule; the orchestrators here call them and collect errors
//! into a single `ConfigError`.

mod display;
mod helpers;
mod panels;
mod theme;

#[cfg(test)]
mod tests;

use crate::schema::LauncherConfig;
use crate::theme::Theme;
use vrhome_common::ConfigError;

fn collect(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Run all validations on a config, collecting all errors.
///
/// A panel with more samples than it has slots is not an error; the
/// overflow is logged and ignored at layout time.
pub fn validate(config: &LauncherConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    panels::validate_panels(&mut errors, config);
    display::validate_display(&mut errors, config);
    collect(errors)
}

/// Validate a resolved theme.
pub fn validate_theme(theme: &Theme) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    theme::validate_theme_fields(&mut errors, theme);
    collect(errors)
}
