// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability the control pushes layout and redraw requests into.

use kurbo::Rect;
use twinrange_track::Bound;

/// A visual part of the control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfacePart {
    /// The track, including its highlighted segment.
    Track,
    /// One of the thumbs.
    Thumb(Bound),
}

/// Host-provided layered surface.
///
/// A layout pass is always bracketed by [`begin_update`](Self::begin_update)
/// and [`end_update`](Self::end_update); hosts that batch display updates
/// should apply everything in between as one frame. The host draws by calling
/// [`RangeSlider::draw`](crate::RangeSlider::draw) when convenient after a
/// [`request_redraw`](Self::request_redraw).
pub trait Surface {
    /// Places `part` at `bounds`, in control coordinates.
    fn set_region(&mut self, part: SurfacePart, bounds: Rect);

    /// Asks the host to call [`RangeSlider::draw`](crate::RangeSlider::draw).
    fn request_redraw(&mut self);

    /// Moves `part` to the top of the visual stack.
    fn raise(&mut self, part: SurfacePart) {
        let _ = part;
    }

    /// Starts a batch of updates that should become visible together.
    fn begin_update(&mut self) {}

    /// Ends the batch started by [`begin_update`](Self::begin_update).
    fn end_update(&mut self) {}
}

/// A surface that ignores everything, for headless use.
impl Surface for () {
    fn set_region(&mut self, _: SurfacePart, _: Rect) {}

    fn request_redraw(&mut self) {}
}
