// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track painting contract.
//!
//! The control never calls a rendering API directly. Instead it describes what
//! to paint through a [`DrawContext`] supplied by the host, which maps each
//! call onto whatever backend it uses. Painting is idempotent: the same
//! inputs always produce the same calls.

use kurbo::{Rect, RoundedRect};
use peniko::Color;
use twinrange_glyph::ThumbImage;
use twinrange_track::clamp_unit;

/// Sink for the primitive fills the control paints.
///
/// Coordinates are in control space.
pub trait DrawContext {
    /// Fills a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `image` stretched to `frame`.
    ///
    /// `tint` is `Some` for template images: the image alpha is used as a
    /// mask filled with the tint color.
    fn draw_image(&mut self, image: &ThumbImage, frame: Rect, tint: Option<Color>);
}

/// Everything the track paint depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPaint {
    /// Track rectangle in control coordinates.
    pub bounds: Rect,
    /// Corner radius of the track.
    pub radius: f64,
    /// Lower bound, normalized.
    pub lower: f64,
    /// Upper bound, normalized.
    pub upper: f64,
    /// Fill of the whole track.
    pub track_color: Color,
    /// Fill of the selected segment.
    pub highlight_color: Color,
}

impl TrackPaint {
    /// The highlighted segment.
    ///
    /// Relative to the track origin it spans `width * lower` to
    /// `width * upper`; values are clamped to `[0, 1]` and the width is never
    /// negative.
    #[must_use]
    pub fn highlight_rect(&self) -> Rect {
        let width = self.bounds.width();
        let x = width * clamp_unit(self.lower);
        let w = (width * clamp_unit(self.upper) - x).max(0.0);
        let x0 = self.bounds.x0 + x;
        Rect::new(x0, self.bounds.y0, x0 + w, self.bounds.y1)
    }
}

/// Paints the full rounded track, then the highlighted segment over it.
pub fn paint_track<C: DrawContext + ?Sized>(ctx: &mut C, paint: &TrackPaint) {
    ctx.fill_rounded_rect(
        RoundedRect::from_rect(paint.bounds, paint.radius),
        paint.track_color,
    );
    ctx.fill_rect(paint.highlight_rect(), paint.highlight_color);
}
