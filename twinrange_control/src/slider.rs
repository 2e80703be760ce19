// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The range slider control.

use alloc::boxed::Box;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use tracing::{debug, trace};
use twinrange_glyph::ThumbImage;
use twinrange_track::{Bound, RangeValues};

use crate::controller::{ControllerState, InteractionController};
use crate::hit::touch_region;
use crate::layout::{Invalidation, SliderLayout};
use crate::observer::{ObserverId, Observers};
use crate::render::{DrawContext, TrackPaint, paint_track};
use crate::style::{SliderStyle, sanitize_length, sanitize_scale, sanitize_size};
use crate::surface::{Surface, SurfacePart};
use crate::thumb::{DEFAULT_GLYPH_RATIO, Thumb};

/// Preferred width reported by [`RangeSlider::intrinsic_size`].
pub const INTRINSIC_WIDTH: f64 = 200.0;

/// A dual-thumb range slider.
///
/// Every mutation runs the same three steps in order: store (with clamping),
/// recompute layout into the [`Surface`] (or just request a redraw for
/// paint-only changes), and, for value writes, notify observers. Value writes
/// always notify, even when clamping leaves the stored value unchanged.
#[derive(Debug)]
pub struct RangeSlider<S: Surface = ()> {
    surface: S,
    style: SliderStyle,
    size: Size,
    values: RangeValues,
    lower: Thumb,
    upper: Thumb,
    controller: InteractionController,
    layout: SliderLayout,
    observers: Observers,
}

impl<S: Surface> RangeSlider<S> {
    /// Creates a slider with the default style.
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, SliderStyle::default())
    }

    /// Creates a slider with `style`.
    ///
    /// Values start at `(0, 0.5)`, both thumbs use the generated glyph, and an
    /// initial layout is pushed into `surface`. No observer can be notified
    /// yet.
    pub fn with_style(surface: S, style: SliderStyle) -> Self {
        let style = SliderStyle {
            track_height: sanitize_length(style.track_height),
            track_radius: sanitize_length(style.track_radius),
            min_touch_area: sanitize_length(style.min_touch_area),
            display_scale: sanitize_scale(style.display_scale),
            ..style
        };
        let mut slider = Self {
            surface,
            lower: Thumb::with_default_glyph(Bound::Lower, &style),
            upper: Thumb::with_default_glyph(Bound::Upper, &style),
            style,
            size: Size::ZERO,
            values: RangeValues::default(),
            controller: InteractionController::new(),
            layout: SliderLayout::default(),
            observers: Observers::default(),
        };
        slider.invalidate(Invalidation::LAYOUT);
        slider
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current style.
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    // --- values ---

    /// Both bounds.
    pub fn values(&self) -> RangeValues {
        self.values
    }

    /// The lower bound.
    pub fn lower_value(&self) -> f64 {
        self.values.lower()
    }

    /// The upper bound.
    pub fn upper_value(&self) -> f64 {
        self.values.upper()
    }

    /// Sets the lower bound to `min(value, upper)`, relayouts, and notifies.
    pub fn set_lower_value(&mut self, value: f64) {
        self.set_value(Bound::Lower, value);
    }

    /// Sets the upper bound to `max(value, lower)`, relayouts, and notifies.
    pub fn set_upper_value(&mut self, value: f64) {
        self.set_value(Bound::Upper, value);
    }

    /// Sets the bound for `bound` with the clamping of
    /// [`set_lower_value`](Self::set_lower_value) /
    /// [`set_upper_value`](Self::set_upper_value).
    pub fn set_value(&mut self, bound: Bound, value: f64) {
        self.values.set(bound, value);
        self.invalidate(Invalidation::LAYOUT);
        self.observers.notify(self.values);
    }

    // --- observers ---

    /// Registers a value-changed listener.
    ///
    /// The listener receives a copy of both bounds after every write, whether
    /// from a drag or a direct setter. It runs synchronously on the calling
    /// thread.
    pub fn add_observer(&mut self, observer: impl FnMut(RangeValues) + 'static) -> ObserverId {
        let id = self.observers.add(Box::new(observer));
        debug!(?id, count = self.observers.len(), "observer added");
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let removed = self.observers.remove(id);
        debug!(?id, removed, "observer removed");
        removed
    }

    // --- appearance and layout inputs ---

    /// Control size in logical units.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the control size, as assigned by the host container.
    ///
    /// Non-finite or negative dimensions are stored as zero.
    pub fn set_size(&mut self, size: Size) {
        let size = sanitize_size(size);
        if size == self.size {
            return;
        }
        self.size = size;
        self.invalidate(Invalidation::LAYOUT);
    }

    /// Sets the track thickness.
    ///
    /// Thumbs still using the generated glyph are regenerated at
    /// `1.5 * track_height`.
    pub fn set_track_height(&mut self, track_height: f64) {
        self.style.track_height = sanitize_length(track_height);
        self.refresh_default_glyphs();
        self.invalidate(Invalidation::LAYOUT);
    }

    /// Sets the track corner radius.
    pub fn set_track_radius(&mut self, radius: f64) {
        self.style.track_radius = sanitize_length(radius);
        self.invalidate(Invalidation::PAINT);
    }

    /// Sets the fill of the whole track.
    pub fn set_track_color(&mut self, color: Color) {
        self.style.track_color = color;
        self.invalidate(Invalidation::PAINT);
    }

    /// Sets the fill of the selected segment and the tint of template thumbs.
    pub fn set_highlight_color(&mut self, color: Color) {
        self.style.highlight_color = color;
        self.invalidate(Invalidation::PAINT);
    }

    /// Sets the minimum touch target size of each thumb.
    pub fn set_min_touch_area(&mut self, area: f64) {
        self.style.min_touch_area = sanitize_length(area);
    }

    /// Sets the pixel density used for generated glyphs.
    pub fn set_display_scale(&mut self, scale: f64) {
        self.style.display_scale = sanitize_scale(scale);
        self.refresh_default_glyphs();
        self.invalidate(Invalidation::LAYOUT);
    }

    /// Replaces the image of one thumb; `None` restores the generated glyph.
    ///
    /// The thumb takes the image's logical size.
    pub fn set_thumb_image(&mut self, bound: Bound, image: Option<ThumbImage>) {
        let style = self.style;
        let thumb = self.thumb_mut(bound);
        thumb.set_image(image, &style);
        debug!(
            ?bound,
            custom = thumb.has_custom_image(),
            width = thumb.size().width,
            height = thumb.size().height,
            "thumb image replaced"
        );
        self.invalidate(Invalidation::LAYOUT);
    }

    /// The image currently used for one thumb.
    pub fn thumb_image(&self, bound: Bound) -> &ThumbImage {
        self.thumb(bound).image()
    }

    /// The thumb for `bound`.
    pub fn thumb(&self, bound: Bound) -> &Thumb {
        match bound {
            Bound::Lower => &self.lower,
            Bound::Upper => &self.upper,
        }
    }

    /// Tint applied when drawing the thumb, `None` for non-template images.
    pub fn thumb_tint(&self, bound: Bound) -> Option<Color> {
        self.thumb_image(bound)
            .is_template()
            .then_some(self.style.highlight_color)
    }

    /// Preferred size: a fixed width and enough height for the default glyph
    /// and both thumbs.
    pub fn intrinsic_size(&self) -> Size {
        let height = (self.style.track_height * DEFAULT_GLYPH_RATIO)
            .max(self.lower.size().height)
            .max(self.upper.size().height);
        Size::new(INTRINSIC_WIDTH, height)
    }

    // --- geometry queries ---

    /// The last computed layout.
    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    /// Track rectangle in control coordinates.
    pub fn track_bounds(&self) -> Rect {
        self.layout.track
    }

    /// Frame of a thumb in control coordinates.
    pub fn thumb_frame(&self, bound: Bound) -> Rect {
        self.layout.thumb(bound)
    }

    /// Touch target of a thumb, grown to the minimum touch area.
    pub fn thumb_hit_region(&self, bound: Bound) -> Rect {
        touch_region(self.thumb_frame(bound), self.style.min_touch_area)
    }

    /// Thumbs from back to front.
    pub fn thumb_order(&self) -> &[Bound] {
        self.controller.stack().order()
    }

    /// The thumb drawn on top.
    pub fn front_thumb(&self) -> Bound {
        self.controller.stack().front()
    }

    // --- touch handling ---

    /// Interaction state.
    pub fn state(&self) -> ControllerState {
        self.controller.state()
    }

    /// The thumb held by the current gesture.
    pub fn active_thumb(&self) -> Option<Bound> {
        self.controller.session().active()
    }

    /// Returns `true` while a gesture holds a thumb.
    pub fn is_tracking(&self) -> bool {
        self.controller.session().is_dragging()
    }

    /// Handles touch-begin at `location` (control coordinates).
    ///
    /// Returns `true` if a thumb was hit and the gesture should be tracked;
    /// `false` rejects the gesture.
    pub fn touch_begin(&mut self, location: Point) -> bool {
        let layout = self.layout;
        let hit = self
            .controller
            .begin(location, self.style.min_touch_area, |b| layout.thumb(b));
        match hit {
            Some((bound, raised)) => {
                debug!(
                    ?bound,
                    x = location.x,
                    y = location.y,
                    grab_offset_x = self.controller.session().grab_offset_x(),
                    "drag began"
                );
                if raised {
                    self.surface.raise(SurfacePart::Thumb(bound));
                    self.surface.request_redraw();
                }
                true
            }
            None => {
                debug!(x = location.x, y = location.y, "touch missed both thumbs");
                false
            }
        }
    }

    /// Handles touch-move at `location`.
    ///
    /// While dragging, moves the held thumb and always returns `true`
    /// (continue tracking). Without an active gesture nothing changes and
    /// `false` is returned.
    pub fn touch_move(&mut self, location: Point) -> bool {
        let Some((bound, value)) = self.controller.drag(location, self.layout.track) else {
            return false;
        };
        trace!(?bound, x = location.x, value, "drag moved");
        self.set_value(bound, value);
        true
    }

    /// Handles touch-end. The gesture is cleared wherever it ended.
    pub fn touch_end(&mut self) {
        if let Some(bound) = self.controller.end() {
            debug!(?bound, "drag ended");
        }
    }

    /// Handles touch-cancel. The gesture is cleared without further changes.
    pub fn touch_cancel(&mut self) {
        if let Some(bound) = self.controller.cancel() {
            debug!(?bound, "drag cancelled");
        }
    }

    // --- painting ---

    /// Inputs of the track paint.
    pub fn track_paint(&self) -> TrackPaint {
        TrackPaint {
            bounds: self.layout.track,
            radius: self.style.track_radius,
            lower: self.values.lower(),
            upper: self.values.upper(),
            track_color: self.style.track_color,
            highlight_color: self.style.highlight_color,
        }
    }

    /// Paints the track, then both thumbs back to front.
    ///
    /// Called by the host after [`Surface::request_redraw`].
    pub fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        paint_track(ctx, &self.track_paint());
        for &bound in self.thumb_order() {
            ctx.draw_image(
                self.thumb_image(bound),
                self.thumb_frame(bound),
                self.thumb_tint(bound),
            );
        }
    }

    // --- internals ---

    fn thumb_mut(&mut self, bound: Bound) -> &mut Thumb {
        match bound {
            Bound::Lower => &mut self.lower,
            Bound::Upper => &mut self.upper,
        }
    }

    fn refresh_default_glyphs(&mut self) {
        let style = self.style;
        for bound in Bound::ALL {
            if self.thumb_mut(bound).refresh_default(&style) {
                debug!(?bound, "default glyph regenerated");
            }
        }
    }

    fn invalidate(&mut self, what: Invalidation) {
        if what.contains(Invalidation::LAYOUT) {
            self.layout = SliderLayout::compute(
                self.size,
                self.style.track_height,
                self.lower.size(),
                self.upper.size(),
                self.values,
            );
            trace!(
                track = ?self.layout.track,
                lower = ?self.layout.lower_thumb,
                upper = ?self.layout.upper_thumb,
                "layout recomputed"
            );
            self.surface.begin_update();
            self.surface.set_region(SurfacePart::Track, self.layout.track);
            for bound in Bound::ALL {
                self.surface
                    .set_region(SurfacePart::Thumb(bound), self.layout.thumb(bound));
            }
            self.surface.request_redraw();
            self.surface.end_update();
        } else if what.contains(Invalidation::PAINT) {
            self.surface.request_redraw();
        }
    }
}
