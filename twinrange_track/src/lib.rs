// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=twinrange_track --heading-base-level=0

//! Twinrange Track: the value model and track geometry of a dual-thumb range slider.
//!
//! This crate is the headless core shared by the rest of the Twinrange crates.
//! It owns two small pieces of logic:
//!
//! - [`RangeValues`]: a lower and an upper bound in normalized space with the
//!   ordering invariant `lower <= upper` enforced on every write.
//! - Geometry helpers ([`track_bounds`], [`value_to_x`], [`x_to_value`]) that
//!   map normalized values to pixel positions along a horizontal track whose
//!   ends are inset by half of each thumb's width, so that thumb *centers* line
//!   up with the track endpoints at values `0` and `1`.
//!
//! It does **not** know about touches, images, or rendering. Those live in
//! `twinrange_control` and `twinrange_glyph`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use twinrange_track::{RangeValues, track_bounds, value_to_x, x_to_value};
//!
//! let mut values = RangeValues::default();
//! assert_eq!((values.lower(), values.upper()), (0.0, 0.5));
//!
//! // Writes never break ordering: lower is clamped down to upper.
//! values.set_lower(0.9);
//! assert_eq!(values.lower(), 0.5);
//!
//! // A 220px wide control with 20px thumbs has a 200px track starting at x = 10.
//! let track = track_bounds(Size::new(220.0, 30.0), 4.0, 20.0, 20.0);
//! assert_eq!(track.x0, 10.0);
//! assert_eq!(track.width(), 200.0);
//!
//! // The thumb origin for value 0.5 sits half a thumb left of the track midpoint.
//! let x = value_to_x(0.5, track, 20.0);
//! assert_eq!(x, 100.0);
//! assert_eq!(x_to_value(x + 10.0, track), 0.5);
//! ```
//!
//! ## Degenerate layouts
//!
//! A control that has not been sized yet produces a zero-width track. The
//! mapping functions never divide by zero in that case: [`x_to_value`] returns
//! `0.0`, and [`track_bounds`] never reports a negative width.
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod value;

pub use geometry::{clamp_unit, track_bounds, value_to_x, x_to_value};
pub use value::{Bound, RangeValues};
