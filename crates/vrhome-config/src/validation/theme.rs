//! Resolved theme validation.

use super::helpers::{validate_color_field, validate_range_f32};
use crate::theme::{EnvironmentDescriptor, TextStyle, Theme};

fn validate_text_style(errors: &mut Vec<String>, prefix: &str, style: &TextStyle) {
    validate_color_field(errors, &format!("{prefix}.text_color"), &style.text_color);
    validate_range_f32(errors, &format!("{prefix}.text_size"), style.text_size, 0.05, 2.0);
    validate_range_f32(errors, &format!("{prefix}.color_center"), style.color_center, 0.0, 1.0);
    validate_range_f32(errors, &format!("{prefix}.alpha_center"), style.alpha_center, 0.0, 1.0);
}

pub(super) fn validate_theme_fields(errors: &mut Vec<String>, theme: &Theme) {
    validate_color_field(errors, "colors.button", &theme.button_color);
    validate_color_field(errors, "colors.border", &theme.border_color);
    validate_color_field(errors, "colors.highlight", &theme.highlight_color);
    validate_color_field(errors, "colors.icon", &theme.icon_color);
    validate_color_field(errors, "colors.clear", &theme.clear_color);

    validate_text_style(errors, "title_text", &theme.title_text);
    validate_text_style(errors, "sample_text", &theme.sample_text);
    validate_text_style(errors, "url_text", &theme.url_text);

    for (name, image) in [("button_image", &theme.button_image), ("url_image", &theme.url_image)] {
        if matches!(image, Some(path) if path.trim().is_empty()) {
            errors.push(format!("{name} must not be empty when set"));
        }
    }

    match &theme.environment {
        Some(EnvironmentDescriptor::Equirect { left, right }) => {
            if left.trim().is_empty() || right.trim().is_empty() {
                errors.push("environment textures must not be empty".into());
            }
        }
        Some(EnvironmentDescriptor::Cube {
            left,
            right,
            initial_orientation,
        }) => {
            if left.iter().chain(right.iter()).any(|t| t.trim().is_empty()) {
                errors.push("environment cube faces must not be empty".into());
            }
            if !initial_orientation.is_finite() {
                errors.push("environment.initial_orientation must be finite".into());
            }
        }
        None => {}
    }
}
