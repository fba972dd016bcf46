//! Controllable texture sources for unit tests.

use crate::source::{LoadFuture, TextureSource};
use crate::texture::{Filtering, Texture};
use futures_util::FutureExt;
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;
use vrhome_common::ResourceError;

type Reply = oneshot::Sender<Result<Texture, ResourceError>>;

/// Records every load; loads stay pending until resolved or failed by hand,
/// unless the source was built with [`StubSource::immediate`].
#[derive(Default)]
pub struct StubSource {
    immediate: bool,
    calls: RefCell<Vec<String>>,
    pending: RefCell<Vec<(String, Reply)>>,
}

pub fn texture(label: &str) -> Texture {
    Texture::new(label, RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255])), Filtering::Mipmapped)
}

impl StubSource {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn immediate() -> Rc<Self> {
        Rc::new(Self {
            immediate: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    fn take(&self, url: &str) -> Reply {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .position(|(u, _)| u == url)
            .unwrap_or_else(|| panic!("no pending load for {url}"));
        pending.remove(index).1
    }

    /// Complete the oldest pending load of `url` with a fresh texture.
    pub fn resolve(&self, url: &str) -> Texture {
        let t = texture(url);
        let _ = self.take(url).send(Ok(t.clone()));
        t
    }

    pub fn fail(&self, url: &str) {
        let _ = self.take(url).send(Err(ResourceError::Fetch {
            url: url.into(),
            reason: "stub failure".into(),
        }));
    }
}

impl TextureSource for StubSource {
    fn load(&self, url: &str) -> LoadFuture<Texture> {
        self.calls.borrow_mut().push(url.to_string());
        if self.immediate {
            let t = texture(url);
            return async move { Ok(t) }.boxed_local();
        }
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((url.to_string(), tx));
        let url = url.to_string();
        async move {
            rx.await
                .unwrap_or_else(|_| Err(ResourceError::Abandoned(url)))
        }
        .boxed_local()
    }
}
