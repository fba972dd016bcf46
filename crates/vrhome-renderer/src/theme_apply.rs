//! Pushes a [`Theme`] onto the laid-out views and the scene.

use crate::background::BackgroundLoader;
use crate::cache::{ButtonCache, ButtonStyle, TextureCache};
use crate::scene::SharedScene;
use crate::texture::Texture;
use crate::view::{SharedRegistry, TextStyleState};
use futures_util::future::{join, join_all, LocalBoxFuture};
use futures_util::FutureExt;
use std::rc::Rc;
use tracing::{debug, warn};
use vrhome_common::{Color, ViewId, ViewRole};
use vrhome_config::colors::parse_color;
use vrhome_config::theme::forest;
use vrhome_config::{TextStyle, Theme};

pub const BUTTON_SIZE: (f32, f32) = (2.0, 0.5);
pub const BUTTON_RADIUS: f32 = 15.0;
pub const DETAIL_BUTTON_SIZE: (f32, f32) = (2.0 * 1.8, 0.5 * 0.55);
pub const DETAIL_BUTTON_RADIUS: f32 = 8.0;

/// Resolved colors of a theme, with invalid entries replaced by the
/// default theme's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub button: Color,
    pub border: Color,
    pub highlight: Color,
    pub icon: Color,
    pub clear: Color,
}

impl Palette {
    pub fn resolve(theme: &Theme) -> Self {
        let base = forest();
        Self {
            button: color_or(&theme.button_color, &base.button_color, "button"),
            border: color_or(&theme.border_color, &base.border_color, "border"),
            highlight: color_or(&theme.highlight_color, &base.highlight_color, "highlight"),
            icon: color_or(&theme.icon_color, &base.icon_color, "icon"),
            clear: color_or(&theme.clear_color, &base.clear_color, "clear"),
        }
    }
}

fn color_or(value: &str, fallback: &str, field: &str) -> Color {
    match parse_color(value) {
        Ok(c) => c,
        Err(e) => {
            warn!("theme {field} color: {e}; using {fallback}");
            parse_color(fallback).unwrap_or(Color::TRANSPARENT)
        }
    }
}

fn text_state(style: &TextStyle, fallback: &TextStyle) -> TextStyleState {
    TextStyleState {
        color: color_or(&style.text_color, &fallback.text_color, "text"),
        size: style.text_size,
        color_center: style.color_center,
        alpha_center: style.alpha_center,
    }
}

pub struct ThemeApplier {
    registry: SharedRegistry,
    scene: SharedScene,
    cache: Rc<TextureCache>,
    buttons: Rc<ButtonCache>,
    background: BackgroundLoader,
}

impl ThemeApplier {
    pub fn new(
        registry: SharedRegistry,
        scene: SharedScene,
        cache: Rc<TextureCache>,
        buttons: Rc<ButtonCache>,
    ) -> Self {
        let background = BackgroundLoader::new(scene.clone(), cache.clone());
        Self {
            registry,
            scene,
            cache,
            buttons,
            background,
        }
    }

    pub fn background(&self) -> &BackgroundLoader {
        &self.background
    }

    /// Restyle every registered view and swap the environment.
    ///
    /// Flat colors, generated buttons and text styles change before this
    /// returns. Image buttons and the environment arrive when the returned
    /// future is driven.
    pub fn apply(&self, theme: &Theme) -> LocalBoxFuture<'static, ()> {
        let palette = Palette::resolve(theme);
        self.scene.borrow_mut().set_clear_color(palette.clear);

        let defaults = forest();
        let title_text = text_state(&theme.title_text, &defaults.title_text);
        let sample_text = text_state(&theme.sample_text, &defaults.sample_text);
        let url_text = text_state(&theme.url_text, &defaults.url_text);

        let mut pending = Vec::new();
        let (ui_views, icons) = {
            let registry = self.registry.borrow();
            (registry.ui_views().to_vec(), registry.icons().to_vec())
        };

        for id in ui_views {
            let Some((role, detail)) = self.registry.borrow().get(id).map(|v| (v.role, v.detail)) else {
                continue;
            };

            match theme.button_image.as_deref() {
                None => self.apply_button(id, &palette),
                Some(url) => pending.push(self.apply_button_image(id, url)),
            }

            let text = if role == ViewRole::Title {
                title_text
            } else {
                sample_text
            };
            if let Some(view) = self.registry.borrow_mut().get_mut(id) {
                view.set_text_style(text);
            }

            if let Some(detail) = detail {
                match theme.url_image.as_deref() {
                    None => self.apply_detail_button(detail, &palette),
                    Some(url) => pending.push(self.apply_detail_image(detail, url)),
                }
                if let Some(view) = self.registry.borrow_mut().get_mut(detail) {
                    view.set_text_style(url_text);
                }
            }
        }

        {
            let mut registry = self.registry.borrow_mut();
            for id in icons {
                if let Some(icon) = registry.get_mut(id) {
                    icon.set_image_tint(palette.icon);
                }
            }
        }

        debug!("applied theme \"{}\"", theme.name);
        let environment = self.background.load(theme.environment.as_ref());
        join(join_all(pending), environment).map(|_| ()).boxed_local()
    }

    fn apply_button(&self, id: ViewId, palette: &Palette) {
        let style = ButtonStyle {
            width_m: BUTTON_SIZE.0,
            height_m: BUTTON_SIZE.1,
            fill: palette.button,
            border: palette.border,
            radius_px: BUTTON_RADIUS,
        };
        let base = self.buttons.get_button(&style);
        let highlight = self.buttons.get_button(&ButtonStyle {
            border: palette.highlight,
            ..style
        });

        let mut registry = self.registry.borrow_mut();
        // Supersede any button image still loading from a previous theme.
        registry.begin_image_load(id);
        if let Some(view) = registry.get_mut(id) {
            view.set_background_and_border(palette.button, palette.border);
            view.base_texture = Some(base.clone());
            view.highlight_texture = Some(highlight);
            view.set_image(base);
            view.set_opacity(1.0);
        }
    }

    fn apply_detail_button(&self, id: ViewId, palette: &Palette) {
        let texture = self.buttons.get_button(&ButtonStyle {
            width_m: DETAIL_BUTTON_SIZE.0,
            height_m: DETAIL_BUTTON_SIZE.1,
            fill: palette.button,
            border: palette.border,
            radius_px: DETAIL_BUTTON_RADIUS,
        });
        let mut registry = self.registry.borrow_mut();
        registry.begin_image_load(id);
        if let Some(view) = registry.get_mut(id) {
            view.set_background_and_border(palette.button, palette.border);
            view.set_image(texture);
        }
    }

    /// Hide the view behind a transparent placeholder until `url` arrives.
    fn apply_button_image(&self, id: ViewId, url: &str) -> LocalBoxFuture<'static, ()> {
        let ticket = {
            let mut registry = self.registry.borrow_mut();
            let ticket = registry.begin_image_load(id);
            if let Some(view) = registry.get_mut(id) {
                view.clear_background_and_border();
                view.base_texture = None;
                view.highlight_texture = None;
                view.set_opacity(0.0);
                view.set_image(Texture::placeholder());
            }
            ticket
        };
        let load = self.cache.get_texture(url);
        let registry = self.registry.clone();
        async move {
            let Some(ticket) = ticket else { return };
            match load.await {
                Ok(texture) => {
                    let mut registry = registry.borrow_mut();
                    if registry.finish_image_load(id, ticket, texture.clone()) {
                        if let Some(view) = registry.get_mut(id) {
                            view.base_texture = Some(texture.clone());
                            view.highlight_texture = Some(texture);
                            view.set_opacity(1.0);
                        }
                    }
                }
                Err(e) => warn!("button image for {id} failed: {e}"),
            }
        }
        .boxed_local()
    }

    /// Detail visibility belongs to the highlighter, so only the image is
    /// applied on arrival.
    fn apply_detail_image(&self, id: ViewId, url: &str) -> LocalBoxFuture<'static, ()> {
        let ticket = {
            let mut registry = self.registry.borrow_mut();
            let ticket = registry.begin_image_load(id);
            if let Some(view) = registry.get_mut(id) {
                view.clear_background_and_border();
                view.set_opacity(0.0);
            }
            ticket
        };
        let load = self.cache.get_texture(url);
        let registry = self.registry.clone();
        async move {
            let Some(ticket) = ticket else { return };
            match load.await {
                Ok(texture) => {
                    registry.borrow_mut().finish_image_load(id, ticket, texture);
                }
                Err(e) => warn!("detail image for {id} failed: {e}"),
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Layout, PanelLayoutBuilder};
    use crate::scene::Scene;
    use crate::tasks::FrameTasks;
    use crate::test_support::StubSource;
    use crate::view::ViewRegistry;
    use vrhome_config::schema::{PanelDefinition, SampleDefinition};
    use vrhome_config::theme::midnight;

    struct Harness {
        source: Rc<StubSource>,
        registry: SharedRegistry,
        scene: SharedScene,
        buttons: Rc<ButtonCache>,
        applier: ThemeApplier,
        layout: Layout,
        tasks: FrameTasks,
    }

    fn harness() -> Harness {
        let source = StubSource::new();
        let cache = Rc::new(TextureCache::new(source.clone(), true));
        let buttons = Rc::new(ButtonCache::new(true));
        let registry = ViewRegistry::shared();
        let scene = Scene::shared();
        let builder = PanelLayoutBuilder::new(registry.clone(), scene.clone(), cache.clone(), "refresh.png");
        let layout = builder.build(&[PanelDefinition {
            title: "Kit".into(),
            show_refresh_button: true,
            initial_rotation: 0.0,
            samples: vec![
                SampleDefinition::new("A", "https://a.example/a.html", "a"),
                SampleDefinition::new("B", "https://b.example/b.html", "b"),
            ],
        }]);
        let applier = ThemeApplier::new(registry.clone(), scene.clone(), cache, buttons.clone());
        Harness {
            source,
            registry,
            scene,
            buttons,
            applier,
            layout,
            tasks: FrameTasks::new(),
        }
    }

    fn plain(mut theme: Theme) -> Theme {
        theme.environment = None;
        theme
    }

    #[test]
    fn generated_buttons_are_applied_synchronously() {
        let h = harness();
        let _ = h.applier.apply(&plain(forest()));

        let registry = h.registry.borrow();
        let sample = registry.get(h.layout.highlighter.views()[0]).unwrap();
        let base = sample.base_texture.as_ref().unwrap();
        assert!(sample.shows(base));
        assert_eq!((base.width(), base.height()), (416, 104));
        assert_ne!(sample.highlight_texture.as_ref(), Some(base));

        assert_eq!(sample.background_color, Some(Color::from_rgb_u32(0xF8D5B7)));
        assert_eq!(sample.border_color, Some(Color::from_rgb_u32(0x2D1A10)));

        let detail = registry.get(sample.detail.unwrap()).unwrap();
        assert!(detail.border_color.is_some());
        let detail_image = detail.image.as_ref().unwrap();
        assert_eq!((detail_image.width(), detail_image.height()), (748, 57));
        assert_eq!(detail.text_style.unwrap().size, 0.2);

        // Two sample styles, one detail style; the title reuses the sample button.
        assert_eq!(h.buttons.len(), 3);
        assert_eq!(h.scene.borrow().clear_color, Color::from_rgb_u32(0xF8D5B7));
    }

    #[test]
    fn titles_and_samples_get_their_text_styles() {
        let h = harness();
        let _ = h.applier.apply(&plain(midnight()));
        let registry = h.registry.borrow();
        for view in registry.iter() {
            let Some(style) = view.text_style else { continue };
            let expected = match view.role {
                ViewRole::Title => midnight().title_text,
                ViewRole::Sample => midnight().sample_text,
                ViewRole::Detail => midnight().url_text,
                ViewRole::Refresh => unreachable!("icons carry no text style"),
            };
            assert_eq!(style.size, expected.text_size);
            assert_eq!(style.color, parse_color(&expected.text_color).unwrap());
        }
    }

    #[test]
    fn icons_are_tinted() {
        let h = harness();
        let _ = h.applier.apply(&plain(midnight()));
        let registry = h.registry.borrow();
        let icon = registry.get(registry.icons()[0]).unwrap();
        assert_eq!(icon.image_tint, Some(Color::from_rgb_u32(0xC9D6EA)));
    }

    #[test]
    fn invalid_colors_fall_back() {
        let h = harness();
        let mut theme = plain(forest());
        theme.clear_color = "not-a-color".into();
        let _ = h.applier.apply(&theme);
        assert_eq!(h.scene.borrow().clear_color, Color::from_rgb_u32(0xF8D5B7));
    }

    #[test]
    fn button_image_reveals_on_load() {
        let mut h = harness();
        let id = h.layout.highlighter.views()[0];
        let _ = h.applier.apply(&plain(forest()));
        assert!(h.registry.borrow().get(id).unwrap().background_color.is_some());

        let mut theme = plain(forest());
        theme.button_image = Some("button.png".into());
        h.tasks.spawn(h.applier.apply(&theme));
        {
            let registry = h.registry.borrow();
            let view = registry.get(id).unwrap();
            assert_eq!(view.opacity, 0.0);
            assert!(view.base_texture.is_none());
            assert!(view.background_color.is_none());
            assert!(view.border_color.is_none());
            assert_eq!(view.image.as_ref().unwrap().width(), 1);
        }
        assert_eq!(h.source.calls(), vec!["refresh.png".to_string(), "button.png".to_string()]);

        h.tasks.poll();
        let texture = h.source.resolve("button.png");
        h.tasks.poll();
        let registry = h.registry.borrow();
        let view = registry.get(id).unwrap();
        assert_eq!(view.opacity, 1.0);
        assert!(view.shows(&texture));
        assert_eq!(view.highlight_texture.as_ref(), Some(&texture));
    }

    #[test]
    fn later_theme_wins_over_pending_button_image() {
        let mut h = harness();
        let mut image_theme = plain(forest());
        image_theme.button_image = Some("button.png".into());
        h.tasks.spawn(h.applier.apply(&image_theme));
        h.tasks.poll();

        let _ = h.applier.apply(&plain(midnight()));
        h.source.resolve("button.png");
        h.tasks.poll();

        let registry = h.registry.borrow();
        let view = registry.get(h.layout.highlighter.views()[0]).unwrap();
        assert_eq!(view.image.as_ref().unwrap().width(), 416);
        assert_eq!(view.opacity, 1.0);
    }

    #[test]
    fn url_image_hides_details_until_hovered() {
        let mut h = harness();
        let mut theme = plain(forest());
        theme.url_image = Some("url.png".into());
        h.tasks.spawn(h.applier.apply(&theme));
        h.tasks.poll();
        let texture = h.source.resolve("url.png");
        h.tasks.poll();

        let registry = h.registry.borrow();
        let sample = registry.get(h.layout.highlighter.views()[1]).unwrap();
        let detail = registry.get(sample.detail.unwrap()).unwrap();
        assert!(detail.shows(&texture));
        assert_eq!(detail.opacity, 0.0);
    }

    #[test]
    fn environment_is_loaded_last() {
        let mut h = harness();
        h.tasks.spawn(h.applier.apply(&forest()));
        assert_eq!(h.applier.background().generation(), 1);
        h.tasks.poll();
        h.tasks.poll();
        h.source.resolve("ogp_theme_mono.jpg");
        h.tasks.poll();
        assert!(h.scene.borrow().environment(vrhome_common::Eye::Left).attached);
    }
}
