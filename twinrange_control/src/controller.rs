// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The touch state machine.
//!
//! [`InteractionController`] is purely reactive: it owns the [`DragSession`]
//! and the thumb [`HandleStack`], and turns touch positions into
//! `(thumb, normalized value)` pairs. It does not store values or talk to a
//! surface; [`RangeSlider`](crate::RangeSlider) applies its output.
//!
//! ```text
//!          begin (hit)             move
//!   Idle ───────────────▶ Dragging ────┐
//!    ▲  ◀─────────────────    │   ◀────┘
//!    │      end / cancel      │
//!    └── begin (miss) ◀───────┘ (a miss also clears the session)
//! ```

use kurbo::{Point, Rect};
use twinrange_track::{Bound, x_to_value};

use crate::drag::DragSession;
use crate::hit::HandleStack;

/// Observable state of an [`InteractionController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// No gesture in progress.
    Idle,
    /// A gesture holds the given thumb.
    Dragging(Bound),
}

/// Hit testing and drag tracking for the two thumbs.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    session: DragSession,
    stack: HandleStack,
}

impl InteractionController {
    /// Creates an idle controller with the upper thumb in front.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        match self.session.active() {
            Some(bound) => ControllerState::Dragging(bound),
            None => ControllerState::Idle,
        }
    }

    /// The current drag session.
    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Thumb visual order.
    #[must_use]
    pub fn stack(&self) -> &HandleStack {
        &self.stack
    }

    /// Handles touch-begin at `touch`.
    ///
    /// Hit tests the thumbs front to back. On a hit, records the grab offset
    /// relative to the thumb's center, raises the thumb, and returns it along
    /// with whether the raise changed the visual order. On a miss, any
    /// previous session is cleared and `None` is returned: the gesture is
    /// rejected.
    pub fn begin(
        &mut self,
        touch: Point,
        min_touch_area: f64,
        frame_of: impl Fn(Bound) -> Rect,
    ) -> Option<(Bound, bool)> {
        self.session.end();
        let bound = self.stack.hit_test(touch, min_touch_area, &frame_of)?;
        let grab_offset_x = touch.x - frame_of(bound).center().x;
        self.session.begin(bound, grab_offset_x);
        let raised = self.stack.bring_to_front(bound);
        Some((bound, raised))
    }

    /// Handles touch-move at `touch` along `track`.
    ///
    /// Returns the held thumb and its new normalized value, clamped to
    /// `[0, 1]`, or `None` when idle.
    #[must_use]
    pub fn drag(&self, touch: Point, track: Rect) -> Option<(Bound, f64)> {
        let bound = self.session.active()?;
        let value = x_to_value(touch.x - self.session.grab_offset_x(), track);
        Some((bound, value))
    }

    /// Handles touch-end. The session is cleared wherever the touch lifted.
    pub fn end(&mut self) -> Option<Bound> {
        let was = self.session.active();
        self.session.end();
        was
    }

    /// Handles touch-cancel. Identical to [`end`](Self::end).
    pub fn cancel(&mut self) -> Option<Bound> {
        self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(b: Bound) -> Rect {
        match b {
            Bound::Lower => Rect::new(20.0, 0.0, 30.0, 10.0),
            Bound::Upper => Rect::new(80.0, 0.0, 90.0, 10.0),
        }
    }

    const TRACK: Rect = Rect::new(5.0, 3.0, 105.0, 7.0);

    #[test]
    fn begin_on_thumb_starts_dragging() {
        let mut ctl = InteractionController::new();
        let hit = ctl.begin(Point::new(27.0, 5.0), 20.0, frames);
        assert_eq!(hit, Some((Bound::Lower, true)));
        assert_eq!(ctl.state(), ControllerState::Dragging(Bound::Lower));
        assert_eq!(ctl.session().grab_offset_x(), 2.0);
        assert_eq!(ctl.stack().front(), Bound::Lower);
    }

    #[test]
    fn begin_on_front_thumb_does_not_reorder() {
        let mut ctl = InteractionController::new();
        let hit = ctl.begin(Point::new(85.0, 5.0), 20.0, frames);
        assert_eq!(hit, Some((Bound::Upper, false)));
    }

    #[test]
    fn begin_off_thumb_is_rejected() {
        let mut ctl = InteractionController::new();
        assert_eq!(ctl.begin(Point::new(55.0, 5.0), 20.0, frames), None);
        assert_eq!(ctl.state(), ControllerState::Idle);
    }

    #[test]
    fn rejected_begin_clears_previous_session() {
        let mut ctl = InteractionController::new();
        ctl.begin(Point::new(25.0, 5.0), 20.0, frames);
        ctl.begin(Point::new(55.0, 5.0), 20.0, frames);
        assert_eq!(ctl.state(), ControllerState::Idle);
    }

    #[test]
    fn drag_subtracts_grab_offset() {
        let mut ctl = InteractionController::new();
        // Grab 2px right of the lower thumb's center.
        ctl.begin(Point::new(27.0, 5.0), 20.0, frames);
        // Touch at 57 puts the thumb center at 55, halfway along the track.
        let (bound, value) = ctl.drag(Point::new(57.0, 40.0), TRACK).unwrap();
        assert_eq!(bound, Bound::Lower);
        assert!((value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn drag_clamps_to_unit_range() {
        let mut ctl = InteractionController::new();
        ctl.begin(Point::new(85.0, 5.0), 20.0, frames);
        assert_eq!(ctl.drag(Point::new(-500.0, 5.0), TRACK), Some((Bound::Upper, 0.0)));
        assert_eq!(ctl.drag(Point::new(500.0, 5.0), TRACK), Some((Bound::Upper, 1.0)));
    }

    #[test]
    fn drag_on_zero_width_track_yields_zero() {
        let mut ctl = InteractionController::new();
        ctl.begin(Point::new(85.0, 5.0), 20.0, frames);
        let track = Rect::new(5.0, 3.0, 5.0, 7.0);
        assert_eq!(ctl.drag(Point::new(60.0, 5.0), track), Some((Bound::Upper, 0.0)));
    }

    #[test]
    fn end_and_cancel_return_to_idle() {
        let mut ctl = InteractionController::new();
        ctl.begin(Point::new(25.0, 5.0), 20.0, frames);
        assert_eq!(ctl.end(), Some(Bound::Lower));
        assert_eq!(ctl.drag(Point::new(60.0, 5.0), TRACK), None);

        ctl.begin(Point::new(85.0, 5.0), 20.0, frames);
        assert_eq!(ctl.cancel(), Some(Bound::Upper));
        assert_eq!(ctl.state(), ControllerState::Idle);
        assert_eq!(ctl.session().grab_offset_x(), 0.0);
    }
}
