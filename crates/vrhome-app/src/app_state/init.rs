//! Window creation and initial scene setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use vrhome_platform::DisplayMode;

use super::core::VrHomeApp;

/// Window size when no mono camera size applies.
const DEFAULT_SIZE: (u32, u32) = (1280, 800);

impl VrHomeApp {
    /// Create the window and build the scene.
    /// Returns `false` if the window could not be created.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let (width, height) = match self.display {
            DisplayMode::Mono(camera) => (camera.width, camera.height),
            DisplayMode::Stereo => DEFAULT_SIZE,
        };
        let attrs = WindowAttributes::default()
            .with_title("VR Home")
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        self.window_size = (size.width, size.height);
        self.window = Some(window);

        self.build_scene();
        tracing::info!("Window created ({}x{})", size.width, size.height);
        true
    }
}
