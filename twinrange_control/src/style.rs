// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance and interaction parameters.

use peniko::Color;
use peniko::color::palette;

/// Appearance and interaction parameters for a [`RangeSlider`](crate::RangeSlider).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderStyle {
    /// Thickness of the track in logical units.
    ///
    /// Default: `4.0`.
    pub track_height: f64,
    /// Corner radius of the track.
    ///
    /// Default: `0.0`.
    pub track_radius: f64,
    /// Fill color of the whole track.
    ///
    /// Default: light gray.
    pub track_color: Color,
    /// Fill color of the selected segment; also tints template thumbs.
    ///
    /// Default: blue.
    pub highlight_color: Color,
    /// Minimum width and height of a thumb's touch target.
    ///
    /// Thumbs smaller than this get a hit region grown outward to this size.
    /// Default: `20.0`.
    pub min_touch_area: f64,
    /// Pixels per logical unit, used when generating default thumb glyphs.
    ///
    /// Default: `1.0`.
    pub display_scale: f64,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_height: 4.0,
            track_radius: 0.0,
            track_color: palette::css::LIGHT_GRAY,
            highlight_color: palette::css::BLUE,
            min_touch_area: 20.0,
            display_scale: 1.0,
        }
    }
}

/// Replaces non-finite and negative lengths with zero.
pub(crate) fn sanitize_length(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Replaces non-finite and non-positive display scales with `1.0`.
pub(crate) fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Replaces non-finite and negative dimensions with zero.
pub(crate) fn sanitize_size(size: kurbo::Size) -> kurbo::Size {
    kurbo::Size::new(sanitize_length(size.width), sanitize_length(size.height))
}
