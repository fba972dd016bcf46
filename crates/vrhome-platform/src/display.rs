//! Stereo vs. mono presentation.

use tracing::info;
use vrhome_common::Eye;
use vrhome_config::schema::DisplayConfig;

/// Parameters of the single desktop camera used in mono mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoCamera {
    pub width: u32,
    pub height: u32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Environment layer the camera renders in addition to layer 0.
    pub eye: Eye,
}

impl MonoCamera {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayMode {
    Stereo,
    Mono(MonoCamera),
}

impl DisplayMode {
    /// Eyes rendered each frame; mono shows the left-eye environment.
    pub fn eyes(&self) -> &'static [Eye] {
        match self {
            DisplayMode::Stereo => &Eye::BOTH,
            DisplayMode::Mono(_) => &[Eye::Left],
        }
    }
}

/// Pick the display mode.
///
/// Mono is used when forced (`vrmono` in config or on the command line)
/// or when no stereo output exists.
pub fn select_display_mode(
    display: &DisplayConfig,
    force_mono: bool,
    stereo_available: bool,
) -> DisplayMode {
    if display.vrmono || force_mono || !stereo_available {
        let camera = MonoCamera {
            width: display.mono_width,
            height: display.mono_height,
            fov_degrees: display.fov_degrees,
            near: display.near,
            far: display.far,
            eye: Eye::Left,
        };
        info!(
            "using mono display {}x{} fov {}",
            camera.width, camera.height, camera.fov_degrees
        );
        DisplayMode::Mono(camera)
    } else {
        info!("using stereo display");
        DisplayMode::Stereo
    }
}
