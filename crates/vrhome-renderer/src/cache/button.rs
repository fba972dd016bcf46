//! Generated rounded-rectangle button textures.

use super::key::{ButtonStyle, CacheKey};
use crate::texture::{Filtering, Texture};
use glam::Vec2;
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::trace;
use vrhome_common::Color;

/// Pixel density of generated buttons at panel viewing distance.
pub const PIXELS_PER_METER: f32 = 208.0;
/// Border stroke width in pixels.
pub const LINE_WIDTH: f32 = 3.0;

/// Transparent border around the shape so the stroke is never clipped.
pub fn margin_px() -> u32 {
    (2.0 + LINE_WIDTH / 2.0).ceil() as u32
}

/// Synchronous cache of generated button textures.
pub struct ButtonCache {
    enabled: bool,
    entries: RefCell<HashMap<CacheKey, Texture>>,
}

impl ButtonCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// The texture for `style`, rasterized on first use.
    ///
    /// With caching disabled every call rasterizes a fresh texture.
    pub fn get_button(&self, style: &ButtonStyle) -> Texture {
        let key = CacheKey::button(style);
        if let Some(texture) = self.entries.borrow().get(&key) {
            return texture.clone();
        }

        trace!("rasterizing {key}");
        let texture = Texture::new(key.as_str(), rasterize_button(style), Filtering::Linear);
        if self.enabled {
            self.entries.borrow_mut().insert(key, texture.clone());
        }
        texture
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Signed distance from `p` to a rounded box centered at the origin.
fn rounded_box_distance(p: Vec2, half: Vec2, radius: f32) -> f32 {
    let q = p.abs() - half + Vec2::splat(radius);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - radius
}

/// Source-over blend of straight-alpha colors; `coverage` scales the source alpha.
fn over(dst: [f32; 4], src: Color, coverage: f32) -> [f32; 4] {
    let [sr, sg, sb, sa] = src.to_f32_array();
    let sa = sa * coverage;
    let da = dst[3];
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0.0; 4];
    }
    let mix = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
    [mix(sr, dst[0]), mix(sg, dst[1]), mix(sb, dst[2]), out_a]
}

/// Draw a filled, stroked rounded rectangle sized `width_m` x `height_m` meters.
pub fn rasterize_button(style: &ButtonStyle) -> RgbaImage {
    let width = (style.width_m * PIXELS_PER_METER).max(0.0) as u32;
    let height = (style.height_m * PIXELS_PER_METER).max(0.0) as u32;
    let mut image = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([0, 0, 0, 0]));

    let margin = margin_px() as f32;
    let half = Vec2::new(
        (width as f32 - margin * 2.0).max(0.0) / 2.0,
        (height as f32 - margin * 2.0).max(0.0) / 2.0,
    );
    let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    let radius = style.radius_px.clamp(0.0, half.x.min(half.y));
    let half_line = LINE_WIDTH / 2.0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
        let d = rounded_box_distance(p, half, radius);

        let fill_coverage = (0.5 - d).clamp(0.0, 1.0);
        let stroke_coverage = (half_line + 0.5 - d.abs()).clamp(0.0, 1.0);
        if fill_coverage <= 0.0 && stroke_coverage <= 0.0 {
            continue;
        }

        let filled = over([0.0; 4], style.fill, fill_coverage);
        let [r, g, b, a] = over(filled, style.border, stroke_coverage);
        let to_u8 = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        *pixel = Rgba([to_u8(r), to_u8(g), to_u8(b), to_u8(a)]);
    }

    image
}
