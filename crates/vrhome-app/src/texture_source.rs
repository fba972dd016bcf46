//! Texture loading over HTTP and from the assets directory.
//!
//! Fetch and decode run on the tokio runtime; the frame thread only awaits
//! the join handle.

use futures_util::FutureExt;
use std::path::PathBuf;
use tokio::runtime::Handle;
use tracing::debug;
use url::Url;
use vrhome_common::ResourceError;
use vrhome_renderer::{Filtering, LoadFuture, Texture, TextureSource};

/// Where a texture reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    File(PathBuf),
}

pub struct HttpTextureSource {
    runtime: Handle,
    client: reqwest::Client,
    assets_root: PathBuf,
}

impl HttpTextureSource {
    pub fn new(runtime: Handle, assets_root: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            client: reqwest::Client::new(),
            assets_root: assets_root.into(),
        }
    }

    /// Absolute http(s) and file URLs are used as-is; anything else is a
    /// path under the assets root.
    pub fn locate(&self, reference: &str) -> Location {
        match Url::parse(reference) {
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Location::File(path),
                Err(()) => Location::Remote(url),
            },
            Ok(url) if matches!(url.scheme(), "http" | "https") => Location::Remote(url),
            _ => Location::File(self.assets_root.join(reference)),
        }
    }
}

impl TextureSource for HttpTextureSource {
    fn load(&self, reference: &str) -> LoadFuture<Texture> {
        let location = self.locate(reference);
        let label = reference.to_string();
        let client = self.client.clone();
        let task = self.runtime.spawn(fetch_and_decode(client, location, label.clone()));
        async move {
            task.await
                .map_err(|e| ResourceError::Abandoned(format!("{label}: {e}")))?
        }
        .boxed_local()
    }
}

async fn fetch_and_decode(
    client: reqwest::Client,
    location: Location,
    label: String,
) -> Result<Texture, ResourceError> {
    let fetch_err = |reason: String| ResourceError::Fetch {
        url: label.clone(),
        reason,
    };

    let bytes = match &location {
        Location::Remote(url) => {
            let response = client
                .get(url.clone())
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| fetch_err(e.to_string()))?;
            response
                .bytes()
                .await
                .map_err(|e| fetch_err(e.to_string()))?
                .to_vec()
        }
        Location::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| fetch_err(format!("{}: {e}", path.display())))?,
    };

    let image = image::load_from_memory(&bytes).map_err(|e| ResourceError::Decode {
        url: label.clone(),
        reason: e.to_string(),
    })?;
    let image = image.to_rgba8();
    debug!("decoded {label} ({}x{})", image.width(), image.height());
    Ok(Texture::new(label, image, Filtering::Mipmapped))
}
