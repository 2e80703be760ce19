// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between normalized values and pixel positions along the track.

use kurbo::{Rect, Size};

/// Clamps `value` into `[0, 1]`.
///
/// `NaN` maps to `0.0` so that a degenerate computation upstream can never leak
/// into layout.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Computes the track rectangle for a control of the given `size`.
///
/// The track is `track_height` tall and vertically centered. Horizontally it
/// starts at half the lower thumb's width and is shortened by half of each
/// thumb's width, so the thumb centers range over the whole track.
///
/// Non-finite inputs are treated as zero and the width never goes negative: a
/// control narrower than its thumbs yields a zero-width track.
#[must_use]
pub fn track_bounds(
    size: Size,
    track_height: f64,
    lower_thumb_width: f64,
    upper_thumb_width: f64,
) -> Rect {
    let width = finite_or_zero(size.width);
    let height = finite_or_zero(size.height);
    let track_height = finite_or_zero(track_height).max(0.0);
    let lower_w = finite_or_zero(lower_thumb_width).max(0.0);
    let upper_w = finite_or_zero(upper_thumb_width).max(0.0);

    let x0 = lower_w / 2.0;
    let y0 = (height - track_height) / 2.0;
    let track_width = (width - (lower_w + upper_w) / 2.0).max(0.0);
    Rect::new(x0, y0, x0 + track_width, y0 + track_height)
}

/// Returns the x origin of a thumb of width `thumb_width` whose center sits at
/// `value` along `track`.
#[must_use]
pub fn value_to_x(value: f64, track: Rect, thumb_width: f64) -> f64 {
    track.x0 + value * track.width() - thumb_width / 2.0
}

/// Converts a control-space x coordinate into a normalized value along `track`.
///
/// The result is clamped into `[0, 1]`. A track without a positive, finite
/// width maps every coordinate to `0.0`.
#[must_use]
pub fn x_to_value(x: f64, track: Rect) -> f64 {
    let width = track.width();
    if width <= 0.0 || !width.is_finite() {
        return 0.0;
    }
    clamp_unit((x - track.x0) / width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamp_unit_handles_out_of_range_and_nan() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    }

    #[test]
    fn track_is_inset_by_half_thumb_widths() {
        let track = track_bounds(Size::new(300.0, 40.0), 4.0, 20.0, 40.0);
        assert_eq!(track.x0, 10.0);
        assert_eq!(track.y0, 18.0);
        assert_eq!(track.width(), 270.0);
        assert_eq!(track.height(), 4.0);
    }

    #[test]
    fn track_width_never_negative() {
        let track = track_bounds(Size::new(10.0, 10.0), 4.0, 30.0, 30.0);
        assert_eq!(track.width(), 0.0);
        assert_eq!(track.x0, 15.0);
    }

    #[test]
    fn unsized_control_yields_zero_width_track() {
        let track = track_bounds(Size::ZERO, 4.0, 0.0, 0.0);
        assert_eq!(track.width(), 0.0);
        assert_eq!(track.y0, -2.0);
    }

    #[test]
    fn non_finite_sizes_are_treated_as_zero() {
        let track = track_bounds(Size::new(f64::NAN, f64::INFINITY), f64::NAN, 10.0, 10.0);
        assert_eq!(track.width(), 0.0);
        assert_eq!(track.height(), 0.0);
        assert!(track.x0.is_finite() && track.y0.is_finite());
    }

    #[test]
    fn thumb_centers_align_with_track_ends() {
        let track = track_bounds(Size::new(200.0, 20.0), 4.0, 16.0, 24.0);
        // Lower thumb at 0: its center is at the track start.
        assert!(approx_eq(value_to_x(0.0, track, 16.0) + 8.0, track.x0));
        // Upper thumb at 1: its center is at the track end.
        assert!(approx_eq(value_to_x(1.0, track, 24.0) + 12.0, track.x1));
    }

    #[test]
    fn round_trip_through_thumb_center() {
        let track = track_bounds(Size::new(317.0, 31.0), 4.0, 18.0, 26.0);
        for v in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let origin = value_to_x(v, track, 18.0);
            let center = origin + 9.0;
            assert!(approx_eq(x_to_value(center, track), v), "value {v}");
        }
    }

    #[test]
    fn x_to_value_clamps_outside_track() {
        let track = Rect::new(10.0, 0.0, 110.0, 4.0);
        assert_eq!(x_to_value(-50.0, track), 0.0);
        assert_eq!(x_to_value(500.0, track), 1.0);
        assert_eq!(x_to_value(60.0, track), 0.5);
    }

    #[test]
    fn zero_width_track_maps_to_zero() {
        let track = Rect::new(10.0, 0.0, 10.0, 4.0);
        for x in [-100.0, 0.0, 10.0, 1e9, f64::NAN] {
            let v = x_to_value(x, track);
            assert_eq!(v, 0.0);
        }
    }
}
