use super::label::detail_label;
use crate::cache::TextureCache;
use crate::highlight::Highlighter;
use crate::scene::SharedScene;
use crate::view::{SharedRegistry, ViewSpec};
use futures_util::future::{join_all, LocalBoxFuture};
use futures_util::FutureExt;
use glam::{Quat, Vec3};
use std::f32::consts::PI;
use std::rc::Rc;
use tracing::{debug, warn};
use vrhome_common::{Action, Rect, ViewId, ViewRole};
use vrhome_config::schema::{PanelDefinition, PANEL_SLOTS};

pub const X_OFFSETS: [f32; 2] = [-1.25, 1.25];
pub const Y_OFFSETS: [f32; 3] = [0.8, -0.2, -1.2];
pub const Z_OFFSET: f32 = -3.5;

pub const PANEL_WIDTH: f32 = 2.0;
pub const PANEL_HEIGHT: f32 = 0.5;

/// Growth of the detail label frame relative to its sample.
pub const DETAIL_GROWTH: (f32, f32) = (1.8, 0.55);
pub const HIT_SLOP: f32 = 0.05;

const TILT: f32 = PI / 36.0;

/// Frame shared by every sample view, centered on its position.
pub fn sample_frame() -> Rect {
    Rect::new(-PANEL_WIDTH * 0.5, PANEL_HEIGHT * 0.5, PANEL_WIDTH, PANEL_HEIGHT)
}

pub fn detail_frame() -> Rect {
    sample_frame().scaled(DETAIL_GROWTH.0, DETAIL_GROWTH.1)
}

/// Local position and yaw tilt of sample slot `index`.
pub fn slot_placement(index: usize) -> (Vec3, f32) {
    let column = index % 2;
    let row = index / 2;
    let tilt = if column == 0 { TILT } else { -TILT };
    (Vec3::new(X_OFFSETS[column], Y_OFFSETS[row], Z_OFFSET), tilt)
}

/// Result of laying out the panel sets.
pub struct Layout {
    pub highlighter: Highlighter,
    pub panels: Vec<usize>,
    /// Reveals refresh icons once their images arrive.
    pub icon_loads: LocalBoxFuture<'static, ()>,
}

/// Creates the views for a list of panel sets.
pub struct PanelLayoutBuilder {
    registry: SharedRegistry,
    scene: SharedScene,
    cache: Rc<TextureCache>,
    refresh_icon: String,
}

impl PanelLayoutBuilder {
    pub fn new(
        registry: SharedRegistry,
        scene: SharedScene,
        cache: Rc<TextureCache>,
        refresh_icon: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            scene,
            cache,
            refresh_icon: refresh_icon.into(),
        }
    }

    pub fn build(&self, panels: &[PanelDefinition]) -> Layout {
        let mut samples = Vec::new();
        let mut roots = Vec::new();
        let mut icon_loads = Vec::new();

        for definition in panels {
            let root = self
                .scene
                .borrow_mut()
                .add_panel(definition.title.clone(), definition.initial_rotation);
            roots.push(root);

            let title_origin = Vec3::new(-PANEL_WIDTH * 0.5, Y_OFFSETS[0] + 1.0, Z_OFFSET);
            let title = ViewSpec::new(
                ViewRole::Title,
                definition.title.clone(),
                Rect::new(0.0, 0.0, PANEL_WIDTH, PANEL_HEIGHT),
                title_origin,
            );
            let title = self.add_view(root, title);
            self.registry.borrow_mut().register_ui_view(title);

            if definition.samples.len() > PANEL_SLOTS {
                warn!(
                    "panel \"{}\" has {} samples; only the first {PANEL_SLOTS} are shown",
                    definition.title,
                    definition.samples.len()
                );
            }

            for (index, sample) in definition.samples.iter().take(PANEL_SLOTS).enumerate() {
                let (position, tilt) = slot_placement(index);
                let rotation = Quat::from_rotation_y(tilt);

                let mut spec = ViewSpec::new(ViewRole::Sample, sample.text.clone(), sample_frame(), position);
                spec.rotation = rotation;
                spec.interactable = true;
                spec.hit_slop = HIT_SLOP;
                spec.action = Some(Action::Navigate(sample.url.clone()));
                let view = self.add_view(root, spec);

                let mut label = ViewSpec::new(
                    ViewRole::Detail,
                    detail_label(sample),
                    detail_frame(),
                    position - Vec3::new(0.0, 0.5, 0.0),
                );
                label.rotation = rotation;
                label.opacity = 0.0;
                let detail = self.add_view(root, label);

                let mut registry = self.registry.borrow_mut();
                registry.attach_detail(view, detail);
                registry.register_ui_view(view);
                samples.push(view);
            }

            if definition.show_refresh_button {
                let mut spec = ViewSpec::new(
                    ViewRole::Refresh,
                    "",
                    Rect::new(-0.15, -0.15, 0.3, 0.3),
                    Vec3::new(0.0, Y_OFFSETS[0] + 2.0, Z_OFFSET),
                );
                spec.interactable = true;
                spec.opacity = 0.0;
                spec.action = Some(Action::Reload);
                let refresh = self.add_view(root, spec);
                self.registry.borrow_mut().register_icon(refresh);
                icon_loads.push(self.load_icon(refresh));
            }
        }

        debug!("laid out {} panels with {} samples", roots.len(), samples.len());

        Layout {
            highlighter: Highlighter::new(samples),
            panels: roots,
            icon_loads: join_all(icon_loads).map(|_| ()).boxed_local(),
        }
    }

    fn add_view(&self, panel: usize, spec: ViewSpec) -> ViewId {
        let id = self.registry.borrow_mut().insert(panel, spec);
        self.scene.borrow_mut().attach_view(panel, id);
        id
    }

    fn load_icon(&self, id: ViewId) -> LocalBoxFuture<'static, ()> {
        let ticket = self.registry.borrow_mut().begin_image_load(id);
        let load = self.cache.get_texture(&self.refresh_icon);
        let registry = self.registry.clone();
        async move {
            let Some(ticket) = ticket else { return };
            match load.await {
                Ok(texture) => {
                    let mut registry = registry.borrow_mut();
                    if registry.finish_image_load(id, ticket, texture) {
                        if let Some(view) = registry.get_mut(id) {
                            view.set_opacity(1.0);
                        }
                    }
                }
                Err(e) => warn!("refresh icon unavailable: {e}"),
            }
        }
        .boxed_local()
    }
}
