pub mod display;
pub mod input;
pub mod navigation;

pub use display::{select_display_mode, DisplayMode, MonoCamera};
pub use input::{
    key_command, pixel_to_viewport, HitTarget, InputEvent, InputRouter, KeyCommand,
    ACTIVATE_BUTTON, CLICK_TOLERANCE,
};
pub use navigation::{dispatch, resolve_url, Navigator, SystemOpener};
