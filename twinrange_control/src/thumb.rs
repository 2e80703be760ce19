// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use twinrange_glyph::{ThumbImage, circle_mask};
use twinrange_track::Bound;

use crate::style::SliderStyle;

/// Diameter of the generated default glyph, as a multiple of the track height.
pub const DEFAULT_GLYPH_RATIO: f64 = 1.5;

/// One draggable thumb: its role and the image it is drawn with.
///
/// The thumb's size is always the image's logical size.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumb {
    bound: Bound,
    image: ThumbImage,
    custom: bool,
}

impl Thumb {
    /// Creates a thumb using the generated default glyph for `style`.
    #[must_use]
    pub fn with_default_glyph(bound: Bound, style: &SliderStyle) -> Self {
        Self {
            bound,
            image: default_glyph(style),
            custom: false,
        }
    }

    /// Which bound this thumb controls.
    #[must_use]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// The image drawn for this thumb.
    #[must_use]
    pub fn image(&self) -> &ThumbImage {
        &self.image
    }

    /// Layout size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.image.logical_size()
    }

    /// Returns `true` if the image was supplied by the caller.
    #[must_use]
    pub fn has_custom_image(&self) -> bool {
        self.custom
    }

    /// Replaces the image; `None` restores the generated default glyph.
    pub fn set_image(&mut self, image: Option<ThumbImage>, style: &SliderStyle) {
        match image {
            Some(image) => {
                self.image = image;
                self.custom = true;
            }
            None => {
                self.image = default_glyph(style);
                self.custom = false;
            }
        }
    }

    /// Regenerates the default glyph after a style change.
    ///
    /// Caller-supplied images are left alone. Returns `true` if the image changed.
    pub fn refresh_default(&mut self, style: &SliderStyle) -> bool {
        if self.custom {
            return false;
        }
        let image = default_glyph(style);
        if image == self.image {
            return false;
        }
        self.image = image;
        true
    }
}

fn default_glyph(style: &SliderStyle) -> ThumbImage {
    circle_mask(style.track_height * DEFAULT_GLYPH_RATIO, style.display_scale)
}
