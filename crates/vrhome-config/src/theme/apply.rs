//! Theme application and merging.
//!
//! Applies [`ThemeOverrides`] to a [`Theme`], merging only the fields
//! that are present in the overrides.

use super::types::{TextStyle, TextStyleOverrides, Theme, ThemeOverrides};

/// Apply theme overrides to a base theme, merging only the fields that are present.
pub fn apply_theme(theme: &mut Theme, overrides: &ThemeOverrides) {
    if let Some(ref name) = overrides.name {
        theme.name = name.clone();
    }

    if let Some(ref colors) = overrides.colors {
        if let Some(ref c) = colors.button {
            theme.button_color = c.clone();
        }
        if let Some(ref c) = colors.border {
            theme.border_color = c.clone();
        }
        if let Some(ref c) = colors.highlight {
            theme.highlight_color = c.clone();
        }
        if let Some(ref c) = colors.icon {
            theme.icon_color = c.clone();
        }
        if let Some(ref c) = colors.clear {
            theme.clear_color = c.clone();
        }
    }

    if let Some(ref style) = overrides.title_text {
        apply_text_overrides(&mut theme.title_text, style);
    }
    if let Some(ref style) = overrides.sample_text {
        apply_text_overrides(&mut theme.sample_text, style);
    }
    if let Some(ref style) = overrides.url_text {
        apply_text_overrides(&mut theme.url_text, style);
    }

    if let Some(ref image) = overrides.button_image {
        theme.button_image = Some(image.clone());
    }
    if let Some(ref image) = overrides.url_image {
        theme.url_image = Some(image.clone());
    }
    // A theme that names an environment replaces the base one wholesale.
    if let Some(ref env) = overrides.environment {
        theme.environment = Some(env.clone());
    }
}

fn apply_text_overrides(target: &mut TextStyle, source: &TextStyleOverrides) {
    if let Some(ref color) = source.text_color {
        target.text_color = color.clone();
    }
    if let Some(size) = source.text_size {
        target.text_size = size;
    }
    if let Some(center) = source.color_center {
        target.color_center = center;
    }
    if let Some(center) = source.alpha_center {
        target.alpha_center = center;
    }
}
