//! Per-frame gaze highlight.
//!
//! The topmost hovered sample shows its detail label and its highlight
//! texture; every other sample hides its label and returns to its base
//! texture. Run once per frame after hit testing.

use crate::view::ViewRegistry;
use vrhome_common::ViewId;

/// Mutations made by one [`Highlighter::frame`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightOutcome {
    pub texture_swaps: usize,
    pub opacity_changes: usize,
}

impl HighlightOutcome {
    pub fn is_empty(&self) -> bool {
        self.texture_swaps == 0 && self.opacity_changes == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    views: Vec<ViewId>,
}

impl Highlighter {
    pub fn new(views: Vec<ViewId>) -> Self {
        Self { views }
    }

    pub fn views(&self) -> &[ViewId] {
        &self.views
    }

    /// Update highlight state for the current topmost hit.
    pub fn frame(&self, registry: &mut ViewRegistry, topmost: Option<ViewId>) -> HighlightOutcome {
        let mut outcome = HighlightOutcome::default();

        let active = topmost.filter(|id| {
            registry
                .get(*id)
                .is_some_and(|v| v.interactable && v.detail.is_some())
        });

        if let Some(id) = active {
            highlight(registry, id, true, &mut outcome);
        }

        for &id in &self.views {
            if Some(id) != active {
                highlight(registry, id, false, &mut outcome);
            }
        }

        outcome
    }
}

fn highlight(registry: &mut ViewRegistry, id: ViewId, on: bool, outcome: &mut HighlightOutcome) {
    let Some(view) = registry.get_mut(id) else {
        return;
    };
    let Some(detail) = view.detail else {
        return;
    };
    let wanted = if on {
        view.highlight_texture.clone()
    } else {
        view.base_texture.clone()
    };
    if let Some(texture) = wanted {
        if view.set_image(texture) {
            outcome.texture_swaps += 1;
        }
    }

    if let Some(label) = registry.get_mut(detail) {
        if label.set_opacity(if on { 1.0 } else { 0.0 }) {
            outcome.opacity_changes += 1;
        }
    }
}
