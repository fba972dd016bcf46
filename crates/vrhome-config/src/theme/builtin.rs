//! Themes compiled into the binary.

use super::types::{EnvironmentDescriptor, TextStyle, Theme};

/// Warm browns over a peach backdrop with a 360 photo environment.
pub fn forest() -> Theme {
    Theme {
        name: "forest".into(),
        button_color: "#F8D5B7".into(),
        border_color: "#2D1A10".into(),
        highlight_color: "yellow".into(),
        icon_color: "#2D1A10".into(),
        clear_color: "#F8D5B7".into(),
        title_text: TextStyle::new("#677C58", 0.32, 0.48),
        sample_text: TextStyle::new("#2D1A10", 0.3, 0.5),
        url_text: TextStyle::new("#2D1A10", 0.2, 0.49),
        button_image: None,
        url_image: None,
        environment: Some(EnvironmentDescriptor::Equirect {
            left: "ogp_theme_mono.jpg".into(),
            right: "ogp_theme_mono.jpg".into(),
        }),
    }
}

/// Dark slate panels on a plain clear color.
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".into(),
        button_color: "#1B2230".into(),
        border_color: "#5C6F8F".into(),
        highlight_color: "#FFD166".into(),
        icon_color: "#C9D6EA".into(),
        clear_color: "#0B0E14".into(),
        title_text: TextStyle::new("#8FB3FF", 0.32, 0.48),
        sample_text: TextStyle::new("#E6ECF5", 0.3, 0.5),
        url_text: TextStyle::new("#AAB7CC", 0.2, 0.49),
        button_image: None,
        url_image: None,
        environment: None,
    }
}

/// Look up a built-in theme by name.
pub fn built_in(name: &str) -> Option<Theme> {
    match name {
        "forest" => Some(forest()),
        "midnight" => Some(midnight()),
        _ => None,
    }
}
