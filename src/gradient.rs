//! Vertical gradient rendering.

use image::{Rgba, RgbaImage};

use crate::color::Rgb;

/// Renders a `width x height` buffer whose rows interpolate linearly from
/// `start` (row 0) to `finish` (bottom row).
///
/// Each row is a single solid color; channel `c` of row `i` is
/// `floor(i * (finish[c] - start[c]) / height) + start[c]`, computed per
/// channel with floor toward negative infinity so descending gradients
/// step the same way ascending ones do. Every pixel is fully opaque.
///
/// Deterministic: identical inputs produce byte-identical buffers.
pub fn render(width: u32, height: u32, start: Rgb, finish: Rgb) -> RgbaImage {
    let mut buffer = RgbaImage::new(width, height);
    let from = start.channels();
    let to = finish.channels();

    for row in 0..height {
        let mut pixel = [0u8, 0, 0, 255];
        for c in 0..3 {
            let delta = f64::from(to[c]) - f64::from(from[c]);
            let step = (f64::from(row) * delta / f64::from(height)).floor();
            pixel[c] = (step + f64::from(from[c])).clamp(0.0, 255.0) as u8;
        }
        for x in 0..width {
            buffer.put_pixel(x, row, Rgba(pixel));
        }
    }

    buffer
}
