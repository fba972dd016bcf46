//! TOML config file loading and creation.

mod loader;
mod template;


pub use loader::{default_config_path, ensure_default_config, load_from_path};
