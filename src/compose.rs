//! Glyph decoding and composition onto the gradient base.
//!
//! Alpha handling is a two-phase contract: [`decode_glyph`] carries the
//! source alpha values through verbatim (no blending during decode), and
//! [`overlay_centered`] is the only place blending happens (source-over
//! during composite). Keeping the phases as separate operations means the
//! contract cannot be violated by flipping shared state.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::gradient;

/// Decodes fetched glyph bytes into an RGBA buffer, preserving the source
/// alpha channel untouched.
///
/// Fails with [`Error::Decode`] on empty or corrupt input.
pub fn decode_glyph(bytes: &[u8]) -> Result<RgbaImage> {
    if bytes.is_empty() {
        return Err(Error::Decode("glyph payload is empty".into()));
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| Error::Decode(format!("glyph image is not decodable: {e}")))?;
    Ok(decoded.to_rgba8())
}

/// Builds the master composite: gradient base at `icon_px` square with the
/// glyph resampled to `floor(icon_px / emoji_ratio)` and overlaid centered.
///
/// The output edge length is always `icon_px`, regardless of the glyph's
/// native resolution. The glyph is resized directly from its decoded
/// resolution to the target edge.
pub fn compose(
    glyph_bytes: &[u8],
    start: Rgb,
    finish: Rgb,
    icon_px: u32,
    emoji_ratio: f64,
) -> Result<RgbaImage> {
    let glyph = decode_glyph(glyph_bytes)?;
    let emoji_px = (f64::from(icon_px) / emoji_ratio).floor() as u32;

    let scaled = if glyph.width() == emoji_px && glyph.height() == emoji_px {
        glyph
    } else {
        imageops::resize(&glyph, emoji_px, emoji_px, FilterType::Triangle)
    };

    let mut base = gradient::render(icon_px, icon_px, start, finish);
    overlay_centered(&mut base, &scaled);
    Ok(base)
}

/// Overlays `glyph` onto `base`, centered, with source-over alpha blending.
///
/// Transparent glyph pixels leave the base untouched; partially transparent
/// pixels blend.
pub fn overlay_centered(base: &mut RgbaImage, glyph: &RgbaImage) {
    let x = (i64::from(base.width()) - i64::from(glyph.width())) / 2;
    let y = (i64::from(base.height()) - i64::from(glyph.height())) / 2;
    blend_over(base, glyph, x, y);
}

/// Blends `src` over `dest` at the given offset, clipping to `dest` bounds.
fn blend_over(dest: &mut RgbaImage, src: &RgbaImage, offset_x: i64, offset_y: i64) {
    let (dest_w, dest_h) = (i64::from(dest.width()), i64::from(dest.height()));

    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dx = offset_x + i64::from(sx);
        let dy = offset_y + i64::from(sy);
        if dx < 0 || dy < 0 || dx >= dest_w || dy >= dest_h {
            continue;
        }

        let (dx, dy) = (dx as u32, dy as u32);
        let blended = source_over(*src_pixel, *dest.get_pixel(dx, dy));
        dest.put_pixel(dx, dy, blended);
    }
}

/// Porter-Duff source-over for two straight-alpha RGBA pixels.
fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let src_a = f32::from(src[3]) / 255.0;
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = f32::from(src[c]) / 255.0;
        let d = f32::from(dst[c]) / 255.0;
        let v = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        out[c] = (v * 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encodes a square test glyph: opaque yellow inner half, transparent
    /// border.
    fn glyph_png(px: u32) -> Vec<u8> {
        let mut img = RgbaImage::new(px, px);
        let lo = px / 4;
        let hi = px - px / 4;
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
                Rgba([255, 200, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            };
        }

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_keeps_alpha_verbatim() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        img.put_pixel(1, 0, Rgba([40, 50, 60, 128]));
        img.put_pixel(0, 1, Rgba([70, 80, 90, 255]));

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_glyph(&bytes).unwrap();
        assert_eq!(decoded.get_pixel(1, 0).0[3], 128);
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
        assert_eq!(decoded.get_pixel(0, 1).0[3], 255);
    }

    #[test]
    fn decode_rejects_empty_and_corrupt_bytes() {
        assert!(matches!(decode_glyph(&[]), Err(Error::Decode(_))));
        assert!(matches!(
            decode_glyph(b"definitely not a png"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn composite_edge_length_is_icon_px_for_any_glyph_resolution() {
        let start = Rgb::new(255, 0, 0);
        let finish = Rgb::new(0, 0, 255);
        for glyph_px in [16, 64, 160] {
            let out = compose(&glyph_png(glyph_px), start, finish, 64, 1.6180).unwrap();
            assert_eq!(out.dimensions(), (64, 64), "glyph {glyph_px}px");
        }
    }

    #[test]
    fn transparent_glyph_pixels_preserve_the_gradient() {
        let start = Rgb::new(255, 0, 0);
        let out = compose(&glyph_png(64), start, start, 64, 1.6180).unwrap();

        // Corners are outside the centered glyph: pure gradient.
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(63, 63).0, [255, 0, 0, 255]);
    }

    #[test]
    fn opaque_glyph_center_wins_over_the_gradient() {
        let start = Rgb::new(0, 0, 255);
        let out = compose(&glyph_png(64), start, start, 64, 1.6180).unwrap();

        let center = out.get_pixel(32, 32).0;
        assert_eq!(center, [255, 200, 0, 255]);
    }

    #[test]
    fn overlay_is_centered() {
        let mut base = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let glyph = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        overlay_centered(&mut base, &glyph);

        // Offset is (10 - 4) / 2 = 3 in both axes.
        assert_eq!(base.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(base.get_pixel(3, 3).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(6, 6).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(7, 7).0, [0, 0, 0, 255]);
    }

    #[test]
    fn oversized_overlay_is_clipped_not_panicking() {
        let mut base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let glyph = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        overlay_centered(&mut base, &glyph);
        assert_eq!(base.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn semi_transparent_pixels_blend() {
        let dst = Rgba([255, 0, 0, 255]);
        let src = Rgba([0, 0, 255, 128]);
        let out = source_over(src, dst);

        assert!(out[0] > 0, "some red should remain");
        assert!(out[2] > 0, "some blue should arrive");
        assert_eq!(out[3], 255);
    }
}
