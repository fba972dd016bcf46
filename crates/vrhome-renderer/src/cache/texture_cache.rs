use super::key::CacheKey;
use crate::source::{LoadFuture, TextureSource};
use crate::texture::Texture;
use futures_util::future::Shared;
use futures_util::FutureExt;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// A texture load every requester of the same key awaits together.
pub type SharedTexture = Shared<LoadFuture<Texture>>;

type Entries = Rc<RefCell<HashMap<CacheKey, SharedTexture>>>;

/// Deduplicates asynchronous texture loads by key.
///
/// At most one load per key is in flight. With caching disabled a load is
/// still shared by everyone who asks while it is pending, but the entry is
/// dropped as soon as it resolves, so the next request loads again. An
/// entry that resolved with an error counts as a miss.
pub struct TextureCache {
    source: Rc<dyn TextureSource>,
    enabled: bool,
    entries: Entries,
}

impl TextureCache {
    pub fn new(source: Rc<dyn TextureSource>, enabled: bool) -> Self {
        Self {
            source,
            enabled,
            entries: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn source(&self) -> &Rc<dyn TextureSource> {
        &self.source
    }

    /// Load `url` through the texture source, sharing any existing load.
    pub fn get_texture(&self, url: &str) -> SharedTexture {
        let source = self.source.clone();
        let owned = url.to_string();
        self.get_or_produce(CacheKey::url(url), move || source.load(&owned))
    }

    /// Return the entry for `key`, calling `produce` only on a miss.
    pub fn get_or_produce<F>(&self, key: CacheKey, produce: F) -> SharedTexture
    where
        F: FnOnce() -> LoadFuture<Texture>,
    {
        if let Some(existing) = self.entries.borrow().get(&key) {
            match existing.peek() {
                Some(Err(e)) => debug!("retrying failed load for {key}: {e}"),
                _ => return existing.clone(),
            }
        }

        let load = produce();
        let shared = if self.enabled {
            load.shared()
        } else {
            let entries = Rc::downgrade(&self.entries);
            let evict_key = key.clone();
            async move {
                let result = load.await;
                if let Some(entries) = entries.upgrade() {
                    entries.borrow_mut().remove(&evict_key);
                }
                result
            }
            .boxed_local()
            .shared()
        };

        self.entries.borrow_mut().insert(key, shared.clone());
        shared
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
