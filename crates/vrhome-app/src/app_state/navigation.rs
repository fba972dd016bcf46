//! Executing launcher actions on the desktop.

use tracing::info;

use vrhome_common::PlatformError;
use vrhome_config::Settings;
use vrhome_platform::Navigator;

use super::core::VrHomeApp;

impl Navigator for VrHomeApp {
    fn navigate(&mut self, url: &str) -> Result<(), PlatformError> {
        self.opener.open(url).map(|_| ())
    }

    /// Re-read config and theme from disk and rebuild the scene.
    fn reload(&mut self) -> Result<(), PlatformError> {
        let settings = Settings::load(&self.options.config_path)
            .map_err(|e| PlatformError::NavigationError(format!("reload: {e}")))?;
        info!("reloading launcher");
        self.settings = super::scene_setup::with_overrides(settings, &self.options);
        self.build_scene();
        Ok(())
    }
}
