//! Window title: shows the active theme.

use super::core::VrHomeApp;

impl VrHomeApp {
    /// Format: "VR Home - {theme}"
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&format!("VR Home - {}", self.settings.theme.name));
    }
}
