//! Keyboard emulation of headset controls.
//!
//! Desktop users have no gamepad, so a handful of winit key names are
//! mapped onto launcher commands. Key names arrive as winit prints them:
//! `"ArrowLeft"`, `"Enter"`, `" "` for space, etc.

use super::{InputEvent, ACTIVATE_BUTTON};

/// What a key press means to the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Same as pressing gamepad button 0 on the gazed view.
    Activate,
    RotateLeft,
    RotateRight,
    LookUp,
    LookDown,
    /// Reload config and theme from disk.
    Reload,
}

impl KeyCommand {
    /// The router event this command stands in for, if any.
    pub fn as_input_event(&self) -> Option<InputEvent> {
        match self {
            KeyCommand::Activate => Some(InputEvent::GamepadButton {
                button_id: ACTIVATE_BUTTON,
            }),
            _ => None,
        }
    }
}

/// Map a winit key name to a launcher command.
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        " " | "Space" | "Enter" => Some(KeyCommand::Activate),
        "ArrowLeft" | "a" | "A" => Some(KeyCommand::RotateLeft),
        "ArrowRight" | "d" | "D" => Some(KeyCommand::RotateRight),
        "ArrowUp" | "w" | "W" => Some(KeyCommand::LookUp),
        "ArrowDown" | "s" | "S" => Some(KeyCommand::LookDown),
        "F5" => Some(KeyCommand::Reload),
        _ => None,
    }
}
