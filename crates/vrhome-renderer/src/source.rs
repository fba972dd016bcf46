//! Where textures come from.

use crate::texture::Texture;
use futures_util::future::LocalBoxFuture;
use vrhome_common::ResourceError;

/// A load that completes on the frame thread.
pub type LoadFuture<T> = LocalBoxFuture<'static, Result<T, ResourceError>>;

/// Fetches and decodes an image by URL or asset path.
///
/// Implementations may do the work anywhere (a runtime worker, a thread
/// pool); the returned future only has to be pollable from the frame thread.
pub trait TextureSource {
    fn load(&self, url: &str) -> LoadFuture<Texture>;
}
