//! Display settings validation.

use super::helpers::{validate_range, validate_range_f32};
use crate::schema::LauncherConfig;

pub(super) fn validate_display(errors: &mut Vec<String>, config: &LauncherConfig) {
    let display = &config.display;
    validate_range(errors, "display.mono_width", display.mono_width, 64, 8192);
    validate_range(errors, "display.mono_height", display.mono_height, 64, 8192);
    validate_range_f32(errors, "display.fov_degrees", display.fov_degrees, 30.0, 150.0);
    if !(display.near > 0.0 && display.near < display.far) {
        errors.push(format!(
            "display.near = {} must be positive and below display.far = {}",
            display.near, display.far
        ));
    }
}
