// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image — the validated, read-only input to the analysis pipeline.

use graphia_core::error::{GraphiaError, Result};
use image::{DynamicImage, GrayImage, RgbImage};
use tracing::debug;

/// An immutable, non-empty pixel grid: 3-channel colour or single-channel
/// intensity.
///
/// Construction is the only place shape errors can occur. Once built, every
/// analysis step over a `RasterImage` is total.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Always `ImageRgb8` or `ImageLuma8`.
    image: DynamicImage,
}

impl RasterImage {
    // -- Construction ---------------------------------------------------------

    /// Wrap a decoded image, normalising its pixel layout.
    ///
    /// Single-channel variants (with or without alpha) become 8-bit luma;
    /// everything else becomes 8-bit RGB with alpha dropped.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        let channels = image.color().channel_count();
        ensure_non_empty(width, height, channels)?;

        let image = match image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image,
            DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLuma8(image.to_luma8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        debug!(width, height, channels = image.color().channel_count(), "Raster image wrapped");
        Ok(Self { image })
    }

    /// Wrap an RGB buffer.
    pub fn from_rgb(image: RgbImage) -> Result<Self> {
        ensure_non_empty(image.width(), image.height(), 3)?;
        Ok(Self {
            image: DynamicImage::ImageRgb8(image),
        })
    }

    /// Wrap a single-channel intensity buffer.
    pub fn from_gray(image: GrayImage) -> Result<Self> {
        ensure_non_empty(image.width(), image.height(), 1)?;
        Ok(Self {
            image: DynamicImage::ImageLuma8(image),
        })
    }

    /// Build from an interleaved 8-bit pixel buffer.
    ///
    /// `channels` must be 1 or 3 and `pixels.len()` must equal
    /// `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self> {
        ensure_non_empty(width, height, channels)?;

        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(GraphiaError::invalid_shape(
                width,
                height,
                channels,
                format!("buffer holds {} bytes, expected {}", pixels.len(), expected),
            ));
        }

        let image = match channels {
            1 => GrayImage::from_raw(width, height, pixels).map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8),
            _ => {
                return Err(GraphiaError::invalid_shape(
                    width,
                    height,
                    channels,
                    "expected 1 (intensity) or 3 (colour) channels",
                ));
            }
        };

        image.map(|image| Self { image }).ok_or_else(|| {
            GraphiaError::invalid_shape(width, height, channels, "pixel buffer rejected")
        })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// 1 for intensity images, 3 for colour.
    pub fn channels(&self) -> u8 {
        self.image.color().channel_count()
    }

    pub fn is_color(&self) -> bool {
        self.channels() == 3
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the raster and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }
}

fn ensure_non_empty(width: u32, height: u32, channels: u8) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GraphiaError::invalid_shape(
            width,
            height,
            channels,
            "image has no pixels",
        ));
    }
    Ok(())
}
