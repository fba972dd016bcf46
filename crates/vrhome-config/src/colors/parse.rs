//! Hex and functional (`rgb()`/`rgba()`) color notations.

use regex::Regex;
use std::sync::LazyLock;
use vrhome_common::types::Color;

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; the alpha group is optional for
/// either spelling.
static FUNCTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(?P<r>\d{1,3})\s*,\s*(?P<g>\d{1,3})\s*,\s*(?P<b>\d{1,3})\s*(?:,\s*(?P<a>\d*\.?\d+)\s*)?\)$",
    )
    .unwrap()
});

/// `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
            Some(Color::from_rgba(nibble(0)?, nibble(1)?, nibble(2)?, 255))
        }
        6 | 8 => Color::from_hex(s),
        _ => None,
    }
}

/// `rgb()`/`rgba()` notation. Alpha is a 0-1 fraction and defaults to
/// opaque when omitted.
pub(super) fn parse_functional(s: &str) -> Option<Color> {
    let caps = FUNCTIONAL_RE.captures(s)?;
    let channel = |name: &str| caps[name].parse::<u8>().ok();
    let alpha = match caps.name("a") {
        None => 255,
        Some(a) => {
            let fraction: f32 = a.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&fraction) {
                return None;
            }
            (fraction * 255.0).round() as u8
        }
    };
    Some(Color::from_rgba(channel("r")?, channel("g")?, channel("b")?, alpha))
}
