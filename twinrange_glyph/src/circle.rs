// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default thumb glyph: an anti-aliased filled circle.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::Size;

use crate::image::{RenderingMode, ThumbImage, sanitize_scale};

/// Samples per pixel along each axis.
const SUPERSAMPLE: u32 = 4;

/// Upper bound on the generated bitmap edge, in pixels.
const MAX_EDGE: f64 = 4096.0;

/// Generates a white filled circle of the given logical `diameter`.
///
/// The bitmap is `ceil(diameter * scale)` pixels square, edges are
/// anti-aliased with 4x4 supersampling, and the result is a
/// [`RenderingMode::Template`] image so the caller can tint it. The logical
/// size is exactly `diameter x diameter`.
///
/// Non-finite or negative diameters produce an empty image; a non-positive
/// scale is treated as `1.0`.
#[must_use]
pub fn circle_mask(diameter: f64, scale: f64) -> ThumbImage {
    let scale = sanitize_scale(scale);
    let diameter = if diameter.is_finite() {
        diameter.max(0.0)
    } else {
        0.0
    };
    let (edge_f, radius) = bitmap_extent(diameter, scale);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "edge_f is a non-negative integer no larger than MAX_EDGE"
    )]
    let edge = edge_f as u32;

    let r_sq = radius * radius;
    let center = edge_f / 2.0;
    let step = 1.0 / f64::from(SUPERSAMPLE);
    let full = SUPERSAMPLE * SUPERSAMPLE;

    let mut pixels = Vec::with_capacity(edge as usize * edge as usize * 4);
    for py in 0..edge {
        for px in 0..edge {
            let mut covered = 0_u32;
            for sy in 0..SUPERSAMPLE {
                let y = f64::from(py) + (f64::from(sy) + 0.5) * step - center;
                for sx in 0..SUPERSAMPLE {
                    let x = f64::from(px) + (f64::from(sx) + 0.5) * step - center;
                    if x * x + y * y <= r_sq {
                        covered += 1;
                    }
                }
            }
            let alpha = u8::try_from((covered * 255 + full / 2) / full).unwrap_or(u8::MAX);
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }

    ThumbImage::from_parts(
        edge,
        edge,
        Size::new(diameter, diameter),
        scale,
        RenderingMode::Template,
        pixels,
    )
}

/// Bitmap edge and circle radius in pixels.
///
/// The radius shrinks with the edge when the edge hits [`MAX_EDGE`], so an
/// oversized glyph is still a circle inscribed in its bitmap.
fn bitmap_extent(diameter: f64, scale: f64) -> (f64, f64) {
    let exact = diameter * scale;
    let edge = exact.ceil().min(MAX_EDGE);
    (edge, exact.min(edge) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(image: &ThumbImage, x: u32, y: u32) -> u8 {
        image.pixel(x, y).unwrap()[3]
    }

    #[test]
    fn size_follows_diameter_and_scale() {
        let glyph = circle_mask(6.0, 1.0);
        assert_eq!(glyph.pixel_size(), (6, 6));
        assert_eq!(glyph.logical_size(), Size::new(6.0, 6.0));

        let glyph = circle_mask(6.0, 3.0);
        assert_eq!(glyph.pixel_size(), (18, 18));
        assert_eq!(glyph.logical_size(), Size::new(6.0, 6.0));
        assert_eq!(glyph.scale(), 3.0);
    }

    #[test]
    fn fractional_diameter_rounds_bitmap_up_but_keeps_logical_size() {
        let glyph = circle_mask(4.5, 1.0);
        assert_eq!(glyph.pixel_size(), (5, 5));
        assert_eq!(glyph.logical_size(), Size::new(4.5, 4.5));
    }

    #[test]
    fn center_is_opaque_and_corners_clear() {
        let glyph = circle_mask(12.0, 1.0);
        assert_eq!(alpha(&glyph, 6, 6), 255);
        assert_eq!(alpha(&glyph, 0, 0), 0);
        assert_eq!(alpha(&glyph, 11, 11), 0);
        assert!(glyph.is_template());
    }

    #[test]
    fn edge_pixels_are_antialiased() {
        let glyph = circle_mask(12.0, 1.0);
        let (w, h) = glyph.pixel_size();
        let partial = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .any(|(x, y)| {
                let a = alpha(&glyph, x, y);
                a > 0 && a < 255
            });
        assert!(partial, "expected partially covered edge pixels");
    }

    #[test]
    fn mask_is_mirror_symmetric() {
        let glyph = circle_mask(9.0, 2.0);
        let (w, h) = glyph.pixel_size();
        for y in 0..h {
            for x in 0..w {
                assert_eq!(alpha(&glyph, x, y), alpha(&glyph, w - 1 - x, y));
                assert_eq!(alpha(&glyph, x, y), alpha(&glyph, x, h - 1 - y));
            }
        }
    }

    #[test]
    fn color_channels_are_white() {
        let glyph = circle_mask(5.0, 1.0);
        assert!(glyph.pixels().chunks_exact(4).all(|px| px[..3] == [255; 3]));
    }

    #[test]
    fn oversized_glyph_stays_inscribed_in_capped_bitmap() {
        assert_eq!(bitmap_extent(5000.0, 1.0), (MAX_EDGE, MAX_EDGE / 2.0));
        assert_eq!(bitmap_extent(3000.0, 2.0), (MAX_EDGE, MAX_EDGE / 2.0));
        assert_eq!(bitmap_extent(4.5, 1.0), (5.0, 2.25));
    }

    #[test]
    fn degenerate_diameter_yields_empty_image() {
        for d in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let glyph = circle_mask(d, 2.0);
            assert_eq!(glyph.pixel_size(), (0, 0));
            assert_eq!(glyph.logical_size(), Size::ZERO);
        }
    }
}
