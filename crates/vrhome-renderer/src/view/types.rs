use crate::texture::Texture;
use glam::{Quat, Vec3};
use vrhome_common::{Action, Color, Rect, ViewId, ViewRole};

/// Resolved text parameters for a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyleState {
    pub color: Color,
    pub size: f32,
    pub color_center: f32,
    pub alpha_center: f32,
}

/// Everything the layout decides about a view; fixed once registered.
#[derive(Debug, Clone)]
pub struct ViewSpec {
    pub role: ViewRole,
    pub text: String,
    pub frame: Rect,
    pub position: Vec3,
    pub rotation: Quat,
    pub hit_slop: f32,
    pub interactable: bool,
    pub action: Option<Action>,
    pub opacity: f32,
}

impl ViewSpec {
    pub fn new(role: ViewRole, text: impl Into<String>, frame: Rect, position: Vec3) -> Self {
        Self {
            role,
            text: text.into(),
            frame,
            position,
            rotation: Quat::IDENTITY,
            hit_slop: 0.0,
            interactable: false,
            action: None,
            opacity: 1.0,
        }
    }
}

/// A positioned, themable quad with optional text.
///
/// Identity and geometry are set by the layout. Visual state changes
/// through setters that report whether anything actually changed.
#[derive(Debug, Clone)]
pub struct InteractiveView {
    pub id: ViewId,
    pub role: ViewRole,
    pub text: String,
    pub frame: Rect,
    pub position: Vec3,
    pub rotation: Quat,
    pub hit_slop: f32,
    pub interactable: bool,
    pub action: Option<Action>,
    /// Panel root this view hangs from.
    pub panel: usize,
    pub detail: Option<ViewId>,
    pub text_style: Option<TextStyleState>,
    pub image: Option<Texture>,
    pub base_texture: Option<Texture>,
    pub highlight_texture: Option<Texture>,
    pub opacity: f32,
    pub image_tint: Option<Color>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub(crate) image_generation: u64,
}

impl InteractiveView {
    pub(crate) fn from_spec(id: ViewId, panel: usize, spec: ViewSpec) -> Self {
        Self {
            id,
            role: spec.role,
            text: spec.text,
            frame: spec.frame,
            position: spec.position,
            rotation: spec.rotation,
            hit_slop: spec.hit_slop,
            interactable: spec.interactable,
            action: spec.action,
            panel,
            detail: None,
            text_style: None,
            image: None,
            base_texture: None,
            highlight_texture: None,
            opacity: spec.opacity,
            image_tint: None,
            background_color: None,
            border_color: None,
            image_generation: 0,
        }
    }

    pub fn shows(&self, texture: &Texture) -> bool {
        self.image.as_ref() == Some(texture)
    }

    pub fn set_image(&mut self, texture: Texture) -> bool {
        if self.shows(&texture) {
            return false;
        }
        self.image = Some(texture);
        true
    }

    pub fn set_opacity(&mut self, opacity: f32) -> bool {
        if self.opacity == opacity {
            return false;
        }
        self.opacity = opacity;
        true
    }

    pub fn set_text_style(&mut self, style: TextStyleState) -> bool {
        if self.text_style == Some(style) {
            return false;
        }
        self.text_style = Some(style);
        true
    }

    pub fn set_image_tint(&mut self, tint: Color) -> bool {
        if self.image_tint == Some(tint) {
            return false;
        }
        self.image_tint = Some(tint);
        true
    }

    /// Flat fill and outline drawn behind a generated button.
    pub fn set_background_and_border(&mut self, background: Color, border: Color) {
        self.background_color = Some(background);
        self.border_color = Some(border);
    }

    /// Drop flat colors so an image is drawn unmodified.
    pub fn clear_background_and_border(&mut self) {
        self.background_color = None;
        self.border_color = None;
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
