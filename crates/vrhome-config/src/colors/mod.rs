//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)`, `rgba(r,g,b,a)` and a small set
//! of named colors (`yellow`, `white`, ...). Theme files written for the
//! launcher tend to mix hex codes with names, so both are accepted wherever
//! a color is expected.

mod parse;


use vrhome_common::types::Color;
use vrhome_common::ConfigError;

use parse::{parse_functional, parse_hex};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RRGGBB` (e.g. `#00d4ff`)
/// - `#RRGGBBAA` (e.g. `#00d4ff80`)
/// - `rgb(r,g,b)`, opaque (e.g. `rgb(255,0,0)`)
/// - `rgba(r,g,b,a)` where `a` is 0.0-1.0 (e.g. `rgba(0,212,255,0.12)`)
/// - a named color (e.g. `yellow`)
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    // Try hex formats first
    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        if let Some(color) = parse_functional(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgb/rgba color: {s}")));
    }

    if let Some(color) = Color::from_name(s) {
        return Ok(color);
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
