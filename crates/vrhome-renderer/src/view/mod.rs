//! Views and the registry that owns them.

mod registry;
mod types;

pub use registry::{SharedRegistry, ViewRegistry};
pub use types::{InteractiveView, TextStyleState, ViewSpec};
