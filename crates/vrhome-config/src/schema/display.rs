//! Display mode configuration.

use serde::{Deserialize, Serialize};

/// Stereo vs. mono presentation and the mono camera parameters.
///
/// `vrmono` forces a single 1024x1024 mono view even when a stereo
/// display is available; the other fields only matter in mono mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub vrmono: bool,
    pub mono_width: u32,
    pub mono_height: u32,
    /// Vertical field of view in degrees (valid range: 30-150).
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub antialias: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            vrmono: false,
            mono_width: 1024,
            mono_height: 1024,
            fov_degrees: 90.0,
            near: 0.01,
            far: 1000.0,
            antialias: false,
        }
    }
}
