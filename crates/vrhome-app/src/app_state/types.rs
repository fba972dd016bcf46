//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for settings changes and loads (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Yaw change per rotate key press, in radians.
pub(super) const ROTATE_STEP: f32 = std::f32::consts::PI / 18.0;

/// Pitch is clamped so the view never flips over.
pub(super) const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 * 0.95;

/// What a settings change requires of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SceneUpdate {
    Nothing,
    /// Restyle the existing views.
    Theme,
    /// Tear down and lay out the panels again, then restyle.
    Rebuild,
}
