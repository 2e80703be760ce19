// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: which thumb a gesture holds and where it was grabbed.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::begin`] once a touch lands on a thumb,
//!    passing the horizontal distance from the thumb's center to the touch.
//! 2) While the session is active, subtract [`DragSession::grab_offset_x`] from
//!    each touch position so the thumb keeps its position under the finger
//!    instead of jumping to center on it.
//! 3) End the session with [`DragSession::end`] on touch-up or cancel.
//!
//! ## Minimal example
//!
//! ```
//! use twinrange_control::DragSession;
//! use twinrange_track::Bound;
//!
//! let mut session = DragSession::default();
//! session.begin(Bound::Lower, -2.5);
//! assert_eq!(session.active(), Some(Bound::Lower));
//! assert_eq!(session.grab_offset_x(), -2.5);
//!
//! session.end();
//! assert!(!session.is_dragging());
//! assert_eq!(session.grab_offset_x(), 0.0);
//! ```

use twinrange_track::Bound;

/// Transient state for one touch gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    active: Option<Bound>,
    grab_offset_x: f64,
}

impl DragSession {
    /// Starts tracking `bound`, replacing any session already in progress.
    pub fn begin(&mut self, bound: Bound, grab_offset_x: f64) {
        self.active = Some(bound);
        self.grab_offset_x = if grab_offset_x.is_finite() {
            grab_offset_x
        } else {
            0.0
        };
    }

    /// The thumb being dragged, if any.
    pub fn active(&self) -> Option<Bound> {
        self.active
    }

    /// Horizontal offset of the touch from the thumb center at grab time.
    ///
    /// Zero when no session is active.
    pub fn grab_offset_x(&self) -> f64 {
        self.grab_offset_x
    }

    /// Clears the session.
    pub fn end(&mut self) {
        self.active = None;
        self.grab_offset_x = 0.0;
    }

    /// Returns `true` while a thumb is held.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}
