// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=twinrange_glyph --heading-base-level=0

//! Twinrange Glyph: bitmaps for slider thumbs.
//!
//! A [`ThumbImage`] is a small RGBA8 bitmap plus the display scale it was
//! produced for. Its *logical* size (what layout sees) is independent of the
//! pixel size, so a 2x image of a 6pt circle is 12x12 pixels but lays out as
//! 6x6.
//!
//! Images come from two places:
//!
//! - [`circle_mask`] generates the default thumb: an anti-aliased filled
//!   circle in white, marked [`RenderingMode::Template`] so renderers use its
//!   alpha as a mask and apply their own tint.
//! - [`ThumbImage::from_rgba8`] wraps caller-supplied pixels. These default to
//!   [`RenderingMode::Original`] and are drawn as-is.
//!
//! The display scale is always an explicit argument; nothing here reads
//! ambient screen state.
//!
//! ## Minimal example
//!
//! ```rust
//! use twinrange_glyph::{RenderingMode, circle_mask};
//!
//! let glyph = circle_mask(6.0, 2.0);
//! assert_eq!(glyph.pixel_size(), (12, 12));
//! assert_eq!(glyph.logical_size().width, 6.0);
//! assert_eq!(glyph.rendering(), RenderingMode::Template);
//!
//! // The center is fully covered, the corner is not covered at all.
//! assert_eq!(glyph.pixel(6, 6), Some([255, 255, 255, 255]));
//! assert_eq!(glyph.pixel(0, 0), Some([255, 255, 255, 0]));
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod circle;
mod image;

pub use circle::circle_mask;
pub use image::{ImageDataError, RenderingMode, ThumbImage};
