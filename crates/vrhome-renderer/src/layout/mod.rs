//! Panel layout: turns panel definitions into positioned views.

mod builder;
mod label;

#[cfg(test)]
mod tests;

pub use builder::{
    detail_frame, sample_frame, slot_placement, Layout, PanelLayoutBuilder, DETAIL_GROWTH, HIT_SLOP,
    PANEL_HEIGHT, PANEL_WIDTH, X_OFFSETS, Y_OFFSETS, Z_OFFSET,
};
pub use label::{detail_label, truncate_label, MAX_LABEL_CHARS};
