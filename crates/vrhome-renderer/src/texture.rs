//! Decoded and generated textures.
//!
//! A [`Texture`] is a cheap handle: clones share the pixel data and compare
//! equal, while two separately created textures never do, even with
//! identical pixels. The highlighter relies on that identity to tell which
//! image a view currently shows.

use image::{Rgba, RgbaImage};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// How the engine should sample a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filtering {
    /// Bilinear, no mipmaps. Used for generated buttons drawn at their display size.
    Linear,
    /// Trilinear with generated mipmaps. Used for fetched images.
    Mipmapped,
}

struct TextureData {
    label: String,
    image: RgbaImage,
    filtering: Filtering,
}

#[derive(Clone)]
pub struct Texture {
    id: u64,
    data: Arc<TextureData>,
}

impl Texture {
    pub fn new(label: impl Into<String>, image: RgbaImage, filtering: Filtering) -> Self {
        Self {
            id: NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed),
            data: Arc::new(TextureData {
                label: label.into(),
                image,
                filtering,
            }),
        }
    }

    /// A 1x1 fully transparent texture, shown while a real image loads.
    pub fn placeholder() -> Self {
        Self::new(
            "placeholder",
            RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])),
            Filtering::Linear,
        )
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn width(&self) -> u32 {
        self.data.image.width()
    }

    pub fn height(&self) -> u32 {
        self.data.image.height()
    }

    pub fn filtering(&self) -> Filtering {
        self.data.filtering
    }

    pub fn image(&self) -> &RgbaImage {
        &self.data.image
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Texture {}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("label", &self.data.label)
            .field("size", &(self.width(), self.height()))
            .finish()
    }
}

/// Six faces in +X, -X, +Y, -Y, +Z, -Z order, plus the yaw the
/// environment shader applies.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeTexture {
    pub faces: [Texture; 6],
    pub initial_orientation: f32,
}
