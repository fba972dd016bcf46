//! Scene-side launcher logic: views, layout, caches, theming and gaze
//! highlighting. Drawing is left to the host's engine, which reads the
//! [`Scene`] and [`ViewRegistry`] every frame.

pub mod background;
pub mod cache;
pub mod highlight;
pub mod layout;
pub mod scene;
pub mod source;
pub mod tasks;
pub mod texture;
pub mod theme_apply;
pub mod view;

#[cfg(test)]
mod test_support;

pub use background::BackgroundLoader;
pub use cache::{ButtonCache, ButtonStyle, CacheKey, SharedTexture, TextureCache};
pub use highlight::{HighlightOutcome, Highlighter};
pub use hit_test::{hit_test, GazeRay, Hit, HitTestResult};
pub use layout::{Layout, PanelLayoutBuilder};
pub use scene::{EnvironmentMesh, PanelRoot, Scene, SharedScene};
pub use source::{LoadFuture, TextureSource};
pub use tasks::{idle, FrameTasks};
pub use texture::{CubeTexture, Filtering, Texture};
pub use theme_apply::{Palette, ThemeApplier};
pub use view::{InteractiveView, SharedRegistry, TextStyleState, ViewRegistry, ViewSpec};
