//! Pointer coordinate translation utilities.
//!
//! Translates pixel coordinates from windowing events into normalized
//! viewport coordinates: `x` and `y` in `[-1, 1]`, `y` pointing up.

/// Translate a pixel position inside a `width` x `height` surface to viewport coordinates.
///
/// A zero-sized surface maps everything to the center.
pub fn pixel_to_viewport(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> (f32, f32) {
    if width == 0 || height == 0 {
        return (0.0, 0.0);
    }
    let x = (pixel_x / width as f64) * 2.0 - 1.0;
    let y = 1.0 - (pixel_y / height as f64) * 2.0;
    (x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        assert_eq!(pixel_to_viewport(512.0, 512.0, 1024, 1024), (0.0, 0.0));
    }

    #[test]
    fn corners() {
        assert_eq!(pixel_to_viewport(0.0, 0.0, 800, 600), (-1.0, 1.0));
        assert_eq!(pixel_to_viewport(800.0, 600.0, 800, 600), (1.0, -1.0));
    }

    #[test]
    fn zero_sized_surface() {
        assert_eq!(pixel_to_viewport(10.0, 10.0, 0, 600), (0.0, 0.0));
    }
}
