// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use peniko::{Blob, ImageAlphaType, ImageData, ImageFormat};

/// How a renderer should treat an image's color channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum RenderingMode {
    /// Draw the pixels as they are.
    #[default]
    Original,
    /// Use only the alpha channel as a mask and fill it with a tint color.
    Template,
}

/// Error returned by [`ThumbImage::from_rgba8`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageDataError {
    /// Width or height is zero.
    Empty,
    /// The pixel buffer does not hold exactly `width * height * 4` bytes.
    LengthMismatch {
        /// Number of bytes implied by the dimensions.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
}

impl fmt::Display for ImageDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "thumb image has zero width or height"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "thumb image buffer holds {actual} bytes, expected {expected}"
            ),
        }
    }
}

impl core::error::Error for ImageDataError {}

/// A straight-alpha RGBA8 bitmap used to draw one slider thumb.
///
/// Cloning is cheap: pixels are shared.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbImage {
    width: u32,
    height: u32,
    size: Size,
    scale: f64,
    rendering: RenderingMode,
    pixels: Arc<[u8]>,
}

pub(crate) fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

impl ThumbImage {
    /// Wraps `pixels` (row-major, straight-alpha RGBA8) as a thumb image.
    ///
    /// `scale` is the number of pixels per logical unit; a non-positive or
    /// non-finite scale is treated as `1.0`. The image uses
    /// [`RenderingMode::Original`].
    pub fn from_rgba8(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        scale: f64,
    ) -> Result<Self, ImageDataError> {
        if width == 0 || height == 0 {
            return Err(ImageDataError::Empty);
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(ImageDataError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let scale = sanitize_scale(scale);
        Ok(Self {
            width,
            height,
            size: Size::new(f64::from(width) / scale, f64::from(height) / scale),
            scale,
            rendering: RenderingMode::Original,
            pixels: pixels.into(),
        })
    }

    /// Builds an image whose logical size is given explicitly.
    ///
    /// Callers guarantee `pixels.len() == width * height * 4`.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        size: Size,
        scale: f64,
        rendering: RenderingMode,
        pixels: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "pixel buffer must match dimensions"
        );
        Self {
            width,
            height,
            size,
            scale,
            rendering,
            pixels: pixels.into(),
        }
    }

    /// Returns a copy of this image with a different rendering mode.
    #[must_use]
    pub fn with_rendering(mut self, rendering: RenderingMode) -> Self {
        self.rendering = rendering;
        self
    }

    /// Size used for layout, in logical units.
    #[must_use]
    pub fn logical_size(&self) -> Size {
        self.size
    }

    /// Size of the bitmap in pixels, as `(width, height)`.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixels per logical unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// How renderers should treat the color channels.
    #[must_use]
    pub fn rendering(&self) -> RenderingMode {
        self.rendering
    }

    /// Returns `true` for mask images that take a tint color.
    #[must_use]
    pub fn is_template(&self) -> bool {
        self.rendering == RenderingMode::Template
    }

    /// Raw row-major RGBA8 bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA value at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(at..at + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Converts to a Peniko image for handing to a renderer.
    #[must_use]
    pub fn to_image_data(&self) -> ImageData {
        ImageData {
            data: Blob::from(self.pixels.to_vec()),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width: self.width,
            height: self.height,
        }
    }
}
