// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=twinrange_control --heading-base-level=0

//! Twinrange Control: a headless dual-thumb range slider.
//!
//! [`RangeSlider`] is a horizontal track with two draggable thumbs selecting a
//! lower and an upper bound in `[0, 1]`. It owns the interaction and layout
//! logic and leaves everything visual to the host:
//!
//! - The host feeds it a size ([`RangeSlider::set_size`]) and touches
//!   ([`RangeSlider::touch_begin`], [`touch_move`](RangeSlider::touch_move),
//!   [`touch_end`](RangeSlider::touch_end),
//!   [`touch_cancel`](RangeSlider::touch_cancel)) in control coordinates.
//! - The slider pushes part frames and redraw requests into a host
//!   [`Surface`], and paints through a host [`DrawContext`] when the host calls
//!   [`RangeSlider::draw`].
//! - Observers registered with [`RangeSlider::add_observer`] hear about every
//!   write to either bound.
//!
//! The pieces are usable on their own: [`InteractionController`] is the touch
//! state machine, [`HandleStack`] and [`touch_region`] do hit testing,
//! [`SliderLayout`] is the one-pass layout, and [`paint_track`] is the track
//! paint.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use twinrange_control::RangeSlider;
//! use twinrange_track::Bound;
//!
//! // `()` is a surface that ignores layout and redraw requests.
//! let mut slider = RangeSlider::new(());
//! slider.set_size(Size::new(220.0, 30.0));
//!
//! let changes = Rc::new(Cell::new(0));
//! let seen = changes.clone();
//! slider.add_observer(move |_| seen.set(seen.get() + 1));
//!
//! // Grab the upper thumb at its center and drag it to the end of the track.
//! let center = slider.thumb_frame(Bound::Upper).center();
//! assert!(slider.touch_begin(center));
//! slider.touch_move(Point::new(500.0, center.y));
//! slider.touch_end();
//!
//! assert_eq!(slider.upper_value(), 1.0);
//! assert_eq!(changes.get(), 1);
//! ```
//!
//! ## Threading
//!
//! Everything runs synchronously on the thread delivering input. There are
//! no background tasks and no locks; a single pointer is assumed, and a new
//! touch-begin during a drag simply replaces the drag.
//!
//! ## Logging
//!
//! Gesture transitions are logged at `debug` level and every drag move and
//! layout pass at `trace` level through [`tracing`]. The crate never installs
//! a subscriber.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod drag;
mod hit;
mod layout;
mod observer;
mod render;
mod slider;
mod style;
mod surface;
mod thumb;

pub use controller::{ControllerState, InteractionController};
pub use drag::DragSession;
pub use hit::{HandleStack, touch_region};
pub use layout::SliderLayout;
pub use observer::ObserverId;
pub use render::{DrawContext, TrackPaint, paint_track};
pub use slider::{INTRINSIC_WIDTH, RangeSlider};
pub use style::SliderStyle;
pub use surface::{Surface, SurfacePart};
pub use thumb::{DEFAULT_GLYPH_RATIO, Thumb};

pub use twinrange_glyph::{RenderingMode, ThumbImage};
pub use twinrange_track::{Bound, RangeValues};
