//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the scene-side launcher objects and coordinates
//! settings reloads, gaze hit testing and input.

mod core;
mod event_handler;
mod init;
mod input;
mod navigation;
mod polling;
mod scene_setup;
mod title;
mod types;

pub use core::{LaunchOptions, VrHomeApp};
