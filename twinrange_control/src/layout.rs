// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-pass layout of the track and both thumbs.

use kurbo::{Rect, Size};
use twinrange_track::{Bound, RangeValues, clamp_unit, track_bounds, value_to_x};

use crate::style::sanitize_size;

bitflags::bitflags! {
    /// What a property change invalidates.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub(crate) struct Invalidation: u8 {
        /// The surface must repaint.
        const PAINT  = 0b0000_0001;
        /// Track and thumb frames must be recomputed (implies a repaint).
        const LAYOUT = 0b0000_0010;
    }
}

/// Frames of every part of the control, in control coordinates.
///
/// Produced in a single pass by [`SliderLayout::compute`] so the track and
/// both thumbs are always mutually consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderLayout {
    /// Track rectangle; thumb centers range over its full width.
    pub track: Rect,
    /// Frame of the lower thumb.
    pub lower_thumb: Rect,
    /// Frame of the upper thumb.
    pub upper_thumb: Rect,
}

impl SliderLayout {
    /// Lays out a control of `size`.
    ///
    /// Thumbs are vertically centered and placed horizontally with
    /// [`value_to_x`]. Values outside `[0, 1]` pin their thumb to the nearest
    /// track end. Non-finite or negative sizes are read as zero, so every
    /// frame is finite.
    #[must_use]
    pub fn compute(
        size: Size,
        track_height: f64,
        lower_thumb: Size,
        upper_thumb: Size,
        values: RangeValues,
    ) -> Self {
        let size = sanitize_size(size);
        let lower_thumb = sanitize_size(lower_thumb);
        let upper_thumb = sanitize_size(upper_thumb);
        let track = track_bounds(size, track_height, lower_thumb.width, upper_thumb.width);
        let place = |thumb: Size, value: f64| {
            let x = value_to_x(clamp_unit(value), track, thumb.width);
            let y = (size.height - thumb.height) / 2.0;
            Rect::new(x, y, x + thumb.width, y + thumb.height)
        };
        Self {
            track,
            lower_thumb: place(lower_thumb, values.lower()),
            upper_thumb: place(upper_thumb, values.upper()),
        }
    }

    /// Frame of the thumb for `bound`.
    #[must_use]
    pub fn thumb(&self, bound: Bound) -> Rect {
        match bound {
            Bound::Lower => self.lower_thumb,
            Bound::Upper => self.upper_thumb,
        }
    }
}
