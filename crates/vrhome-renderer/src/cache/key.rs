//! Deterministic cache keys.

use std::fmt;
use vrhome_common::Color;

/// Geometry and colors of a generated rounded-rectangle button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub width_m: f32,
    pub height_m: f32,
    pub fill: Color,
    pub border: Color,
    /// Corner radius in pixels of the generated image.
    pub radius_px: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

/// `-0.0` and `0.0` must produce the same key.
fn canonical(v: f32) -> f32 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl CacheKey {
    pub fn url(url: &str) -> Self {
        Self(format!("url:{}", url.trim()))
    }

    pub fn button(style: &ButtonStyle) -> Self {
        Self(format!(
            "button:{}:{}:{}:{}:{}",
            canonical(style.width_m),
            canonical(style.height_m),
            style.fill.to_hex(),
            style.border.to_hex(),
            canonical(style.radius_px),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
