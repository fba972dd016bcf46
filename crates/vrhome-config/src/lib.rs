//! VR home launcher configuration system.
//!
//! Provides TOML-based configuration with built-in and YAML themes, live
//! reload, and full validation. All config sections use sensible defaults
//! so partial configs work out of the box. [`Settings::load`] reads a file
//! once; [`ReloadManager`] keeps the result current as the files change.

pub mod colors;
pub mod reload;
pub mod schema;
pub mod settings;
pub mod theme;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::LauncherConfig;
pub use settings::Settings;
pub use theme::{EnvironmentDescriptor, TextStyle, Theme, ThemeOverrides, BUILT_IN_THEMES};
pub use watcher::ConfigWatcher;
