//! Input events and routing.
//!
//! The router knows nothing of geometry: callers hit-test first
//! and pass the topmost view as a [`HitTarget`].

mod keys;
mod pointer;
mod router;


pub use keys::{key_command, KeyCommand};
pub use pointer::pixel_to_viewport;
pub use router::{InputRouter, CLICK_TOLERANCE};

use vrhome_common::{Action, ViewId};

/// Gamepad button that activates the gazed view ("A").
pub const ACTIVATE_BUTTON: u32 = 0;

/// Input delivered to the router. Pointer coordinates are normalized viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    GamepadButton { button_id: u32 },
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// A touch-screen tap, treated as an immediate activation.
    Tap,
}

/// The view currently targeted by input.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget<'a> {
    pub view: ViewId,
    pub interactable: bool,
    pub action: Option<&'a Action>,
}
