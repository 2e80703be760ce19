// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Twinrange demos.
//!
//! [`PrintSurface`] and [`PrintContext`] stand in for a real host: they print
//! every layout, raise, and paint call so a headless run shows exactly what a
//! renderer would be asked to do.

use kurbo::{Rect, RoundedRect};
use peniko::Color;
use twinrange_control::{DrawContext, RangeSlider, Surface, SurfacePart, ThumbImage};

/// A surface that prints what it receives and remembers pending redraws.
#[derive(Debug, Default)]
pub struct PrintSurface {
    redraw_requested: bool,
}

impl Surface for PrintSurface {
    fn set_region(&mut self, part: SurfacePart, bounds: Rect) {
        println!("  region {part:?}: {bounds:?}");
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn raise(&mut self, part: SurfacePart) {
        println!("  raise {part:?}");
    }

    fn begin_update(&mut self) {
        println!("  begin update");
    }

    fn end_update(&mut self) {
        println!("  end update");
    }
}

/// A draw context that prints each fill.
#[derive(Debug, Default)]
pub struct PrintContext;

impl DrawContext for PrintContext {
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        println!("  fill track {:?} with {color:?}", rect.rect());
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        println!("  fill highlight {rect:?} with {color:?}");
    }

    fn draw_image(&mut self, image: &ThumbImage, frame: Rect, tint: Option<Color>) {
        let (w, h) = image.pixel_size();
        println!("  draw {w}x{h} thumb at {frame:?} tint {tint:?}");
    }
}

/// Paints the slider if its surface has a redraw pending.
pub fn present(slider: &mut RangeSlider<PrintSurface>) {
    if std::mem::take(&mut slider.surface_mut().redraw_requested) {
        slider.draw(&mut PrintContext);
    }
}
