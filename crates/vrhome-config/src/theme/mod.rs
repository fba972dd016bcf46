//! Theme loading and merging.
//!
//! Two themes are compiled in (`forest`, `midnight`). Custom themes are YAML
//! files of overrides resolved from `resources/themes/` or the user config
//! directory and merged onto a built-in base.

mod apply;
mod builtin;
mod loader;
mod types;

pub use apply::apply_theme;
pub use builtin::{built_in, forest, midnight};
pub use loader::{load_theme, load_theme_from_path, resolve_overrides, theme_source_path};
pub use types::{
    EnvironmentDescriptor, TextStyle, TextStyleOverrides, Theme, ThemeColorOverrides,
    ThemeOverrides, BUILT_IN_THEMES, DEFAULT_THEME,
};

use crate::schema::ThemeSelection;
use tracing::warn;

/// Resolve the configured theme, falling back to the default on any error.
pub fn resolve_theme(selection: &ThemeSelection) -> Theme {
    match load_theme(&selection.name) {
        Ok(theme) => theme,
        Err(e) => {
            warn!("failed to load theme '{}': {e}", selection.name);
            forest()
        }
    }
}
