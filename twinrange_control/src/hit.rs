// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb hit regions and the front-to-back order used to resolve overlaps.
//!
//! The two thumbs may overlap (for example when both values are equal). The
//! [`HandleStack`] keeps them in back-to-front visual order; hit testing walks
//! it front to back and the first thumb whose [`touch_region`] contains the
//! point wins. Grabbing a thumb raises it, so the most recently dragged thumb
//! stays on top for the next gesture.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use twinrange_track::Bound;

/// Returns the touch target for a thumb occupying `frame`.
///
/// When the frame is narrower than `min_touch_area`, the region grows outward
/// on all four sides by half the shortfall, staying centered on the thumb.
/// The shortfall is measured on the width only. A frame that is already wide
/// enough is returned unchanged; the region never shrinks.
#[must_use]
pub fn touch_region(frame: Rect, min_touch_area: f64) -> Rect {
    let grow = ((min_touch_area - frame.width()) / 2.0).max(0.0);
    frame.inflate(grow, grow)
}

/// Thumbs in back-to-front visual order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandleStack {
    order: SmallVec<[Bound; 2]>,
}

impl Default for HandleStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleStack {
    /// Creates a stack with the upper thumb in front.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: SmallVec::from_buf(Bound::ALL),
        }
    }

    /// Thumbs from back to front.
    #[must_use]
    pub fn order(&self) -> &[Bound] {
        &self.order
    }

    /// The thumb drawn on top.
    #[must_use]
    pub fn front(&self) -> Bound {
        self.order.last().copied().unwrap_or(Bound::Upper)
    }

    /// Moves `bound` to the front. Returns `true` if the order changed.
    pub fn bring_to_front(&mut self, bound: Bound) -> bool {
        if self.front() == bound {
            return false;
        }
        self.order.retain(|b| *b != bound);
        self.order.push(bound);
        true
    }

    /// Finds the front-most thumb whose touch region contains `pt`.
    ///
    /// `frame_of` supplies each thumb's current frame.
    pub fn hit_test(
        &self,
        pt: Point,
        min_touch_area: f64,
        frame_of: impl Fn(Bound) -> Rect,
    ) -> Option<Bound> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|b| touch_region(frame_of(*b), min_touch_area).contains(pt))
    }
}
