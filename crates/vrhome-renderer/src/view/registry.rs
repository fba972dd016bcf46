use super::types::{InteractiveView, ViewSpec};
use crate::texture::Texture;
use std::cell::RefCell;
use std::rc::Rc;
use vrhome_common::ViewId;

/// Arena owning every view. Other components refer to views by [`ViewId`].
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: Vec<InteractiveView>,
    /// Views that take button textures and text styles from the theme.
    ui_views: Vec<ViewId>,
    /// Views tinted with the theme's icon color.
    icons: Vec<ViewId>,
    /// Never reset, so tickets handed out before a rebuild stay stale.
    next_image_load: u64,
}

pub type SharedRegistry = Rc<RefCell<ViewRegistry>>;

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn insert(&mut self, panel: usize, spec: ViewSpec) -> ViewId {
        let id = ViewId(self.views.len() as u32);
        self.views.push(InteractiveView::from_spec(id, panel, spec));
        id
    }

    pub fn get(&self, id: ViewId) -> Option<&InteractiveView> {
        self.views.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut InteractiveView> {
        self.views.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractiveView> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Pair a sample view with the label shown while it is highlighted.
    pub fn attach_detail(&mut self, owner: ViewId, detail: ViewId) {
        if let Some(view) = self.get_mut(owner) {
            view.detail = Some(detail);
        }
    }

    pub fn register_ui_view(&mut self, id: ViewId) {
        self.ui_views.push(id);
    }

    pub fn register_icon(&mut self, id: ViewId) {
        self.icons.push(id);
    }

    pub fn ui_views(&self) -> &[ViewId] {
        &self.ui_views
    }

    pub fn icons(&self) -> &[ViewId] {
        &self.icons
    }

    /// Remove every view ahead of a rebuild. Outstanding image loads become stale.
    pub fn clear(&mut self) {
        self.views.clear();
        self.ui_views.clear();
        self.icons.clear();
    }

    /// Start an image load for `id`, superseding any load already in flight.
    ///
    /// Returns the ticket to hand back to [`ViewRegistry::finish_image_load`].
    pub fn begin_image_load(&mut self, id: ViewId) -> Option<u64> {
        self.next_image_load += 1;
        let ticket = self.next_image_load;
        let view = self.get_mut(id)?;
        view.image_generation = ticket;
        Some(ticket)
    }

    /// Apply a finished load if it is still the newest one for the view.
    pub fn finish_image_load(&mut self, id: ViewId, ticket: u64, texture: Texture) -> bool {
        match self.get_mut(id) {
            Some(view) if view.image_generation == ticket => {
                view.set_image(texture);
                true
            }
            _ => false,
        }
    }

    pub fn image_load_is_current(&self, id: ViewId, ticket: u64) -> bool {
        self.get(id).is_some_and(|v| v.image_generation == ticket)
    }
}
