//! Building the panels and pushing settings changes into the scene.

use tracing::{info, warn};

use vrhome_config::theme::resolve_theme;
use vrhome_config::Settings;
use vrhome_platform::SystemOpener;
use vrhome_renderer::PanelLayoutBuilder;

use super::core::{LaunchOptions, VrHomeApp};
use super::types::SceneUpdate;

/// Apply command-line overrides to freshly loaded settings.
pub(super) fn with_overrides(mut settings: Settings, options: &LaunchOptions) -> Settings {
    if let Some(ref name) = options.theme_override {
        if settings.config.theme.name != *name {
            settings.config.theme.name = name.clone();
            settings.theme = resolve_theme(&settings.config.theme);
        }
    }
    settings
}

/// Decide how much of the scene a settings change invalidates.
pub(super) fn scene_update(old: &Settings, new: &Settings) -> SceneUpdate {
    if old.config.panels != new.config.panels || old.config.assets != new.config.assets {
        SceneUpdate::Rebuild
    } else if old.theme != new.theme {
        SceneUpdate::Theme
    } else {
        SceneUpdate::Nothing
    }
}

impl VrHomeApp {
    /// Lay out every panel from scratch and apply the current theme.
    pub(super) fn build_scene(&mut self) {
        self.registry.borrow_mut().clear();
        self.scene.borrow_mut().clear_panels();
        self.router = Default::default();
        self.hovered = None;

        let builder = PanelLayoutBuilder::new(
            self.registry.clone(),
            self.scene.clone(),
            self.cache.clone(),
            self.settings.config.assets.refresh_icon.clone(),
        );
        let layout = builder.build(&self.settings.config.panels);
        self.highlighter = layout.highlighter;
        self.tasks.spawn(layout.icon_loads);

        self.apply_theme();
        info!(
            "scene built: {} panels, {} views",
            layout.panels.len(),
            self.registry.borrow().len()
        );
    }

    pub(super) fn apply_theme(&mut self) {
        let pending = self.applier.apply(&self.settings.theme);
        self.tasks.spawn(pending);
        self.update_window_title();
        self.needs_redraw = true;
    }

    /// Swap in new settings, doing only the scene work the change needs.
    pub(super) fn apply_settings(&mut self, settings: Settings) {
        let settings = with_overrides(settings, &self.options);
        let update = scene_update(&self.settings, &settings);

        if self.settings.config.navigation != settings.config.navigation {
            match SystemOpener::new(settings.config.navigation.base_url.as_deref()) {
                Ok(opener) => self.opener = opener,
                Err(e) => warn!("keeping previous navigation settings: {e}"),
            }
        }
        if self.settings.config.cache != settings.config.cache {
            warn!("cache settings change on restart");
        }

        self.settings = settings;
        match update {
            SceneUpdate::Rebuild => self.build_scene(),
            SceneUpdate::Theme => self.apply_theme(),
            SceneUpdate::Nothing => {}
        }
    }
}
