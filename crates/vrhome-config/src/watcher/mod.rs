//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file (and a custom theme
//! file, if one is in use) for changes, with a 500ms debounce to avoid
//! rapid reloads.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
