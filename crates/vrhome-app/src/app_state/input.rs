//! Keyboard, mouse and touch handling.
//!
//! Every event is routed against the view under the gaze ray, which
//! follows the cursor when it is inside the window.

use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase};
use winit::keyboard::Key;

use vrhome_common::Action;
use vrhome_platform::{dispatch, key_command, pixel_to_viewport, HitTarget, InputEvent, KeyCommand};

use super::core::VrHomeApp;
use super::types::{MAX_PITCH, ROTATE_STEP};

impl VrHomeApp {
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let key_name = match &event.logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };
        let Some(command) = key_command(&key_name) else {
            return;
        };

        match command {
            KeyCommand::Activate => {
                if let Some(event) = command.as_input_event() {
                    self.route_input(event);
                }
            }
            KeyCommand::RotateLeft => self.turn(ROTATE_STEP, 0.0),
            KeyCommand::RotateRight => self.turn(-ROTATE_STEP, 0.0),
            KeyCommand::LookUp => self.turn(0.0, ROTATE_STEP),
            KeyCommand::LookDown => self.turn(0.0, -ROTATE_STEP),
            KeyCommand::Reload => dispatch(&Action::Reload, self),
        }
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let (x, y) = self.cursor_viewport().unwrap_or((0.0, 0.0));
        let event = match state {
            ElementState::Pressed => InputEvent::PointerDown { x, y },
            ElementState::Released => InputEvent::PointerUp { x, y },
        };
        self.route_input(event);
    }

    pub(super) fn handle_touch(&mut self, touch: Touch) {
        self.cursor = Some((touch.location.x, touch.location.y));
        self.update_hover();
        if touch.phase == TouchPhase::Ended {
            self.route_input(InputEvent::Tap);
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
        self.needs_redraw = true;
    }

    /// Cursor position in normalized viewport coordinates.
    pub(super) fn cursor_viewport(&self) -> Option<(f32, f32)> {
        let (px, py) = self.cursor?;
        let (w, h) = self.window_size;
        Some(pixel_to_viewport(px, py, w, h))
    }

    fn turn(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch = (self.pitch + pitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.needs_redraw = true;
    }

    /// Route one event against the hovered view and run any resulting action.
    pub(super) fn route_input(&mut self, event: InputEvent) {
        let action = {
            let registry = self.registry.borrow();
            let target = self
                .hovered
                .and_then(|id| registry.get(id))
                .map(|view| HitTarget {
                    view: view.id,
                    interactable: view.interactable,
                    action: view.action.as_ref(),
                });
            self.router.route(&event, target)
        };
        if let Some(action) = action {
            tracing::debug!("{} fired", action.label());
            dispatch(&action, self);
        }
    }
}
