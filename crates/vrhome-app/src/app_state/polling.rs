//! Per-frame work: settings changes, pending loads, gaze highlight.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use vrhome_platform::DisplayMode;
use vrhome_renderer::{hit_test, GazeRay};

use super::core::VrHomeApp;
use super::types::POLL_INTERVAL;

/// Field of view used for the cursor ray in stereo mode.
const STEREO_FOV_DEGREES: f32 = 90.0;

impl VrHomeApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_settings();
            self.frame();
        }

        if self.needs_redraw {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
        }
    }

    /// Pick up settings published by the reload manager.
    pub(super) fn poll_settings(&mut self) {
        if !self.settings_rx.has_changed().unwrap_or(false) {
            return;
        }
        let settings = self.settings_rx.borrow_and_update().clone();
        tracing::info!("settings changed on disk");
        self.apply_settings(settings);
    }

    /// Advance loads, then hit-test and highlight.
    /// Handle a redraw: the flag is cleared first so a frame that finishes
    /// a load or moves the highlight asks for the next one.
    pub(super) fn redraw(&mut self) {
        self.needs_redraw = false;
        self.frame();
    }

    pub(super) fn frame(&mut self) {
        if self.tasks.poll() > 0 {
            self.needs_redraw = true;
        }
        self.update_hover();
    }

    /// The gaze ray for this frame: through the cursor if it is in the
    /// window, otherwise straight along the head direction.
    pub(super) fn gaze_ray(&self) -> GazeRay {
        let Some((x, y)) = self.cursor_viewport() else {
            return GazeRay::from_angles(self.yaw, self.pitch);
        };
        let (fov, aspect) = match self.display {
            DisplayMode::Mono(camera) => (camera.fov_degrees, camera.aspect()),
            DisplayMode::Stereo => {
                let (w, h) = self.window_size;
                (STEREO_FOV_DEGREES, w as f32 / h.max(1) as f32)
            }
        };
        GazeRay::from_viewport(x, y, fov, aspect, self.yaw, self.pitch)
    }

    pub(super) fn update_hover(&mut self) {
        let ray = self.gaze_ray();
        let hovered = {
            let scene = self.scene.borrow();
            let registry = self.registry.borrow();
            hit_test(&ray, &scene, &registry).topmost().map(|hit| hit.view)
        };
        self.hovered = hovered;

        let outcome = self
            .highlighter
            .frame(&mut self.registry.borrow_mut(), hovered);
        if !outcome.is_empty() {
            self.needs_redraw = true;
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
