//! Resource caches.
//!
//! [`TextureCache`] shares asynchronous image loads; [`ButtonCache`] holds
//! synchronously generated button images. Both are plain objects handed to
//! the components that need them.

mod button;
mod key;
mod texture_cache;

#[cfg(test)]
mod tests;

pub use button::{margin_px, rasterize_button, ButtonCache, LINE_WIDTH, PIXELS_PER_METER};
pub use key::{ButtonStyle, CacheKey};
pub use texture_cache::{SharedTexture, TextureCache};
