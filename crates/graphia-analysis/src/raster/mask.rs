// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binary ink mask — one bit of meaning per pixel, stored as 8-bit luma.

use image::{GrayImage, Luma};

/// Stored value of an ink pixel.
pub const FOREGROUND: u8 = 255;
/// Stored value of a paper pixel.
pub const BACKGROUND: u8 = 0;

/// A foreground/background mask where ink is foreground.
///
/// Internally ink is `255` and paper is `0`, the layout contour tracing
/// expects (non-zero = object).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    pixels: GrayImage,
}

impl BinaryMask {
    /// An all-background mask.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            pixels: GrayImage::new(width, height),
        }
    }

    /// Build a mask from a predicate returning `true` for ink.
    pub fn from_fn(width: u32, height: u32, mut is_ink: impl FnMut(u32, u32) -> bool) -> Self {
        let pixels = GrayImage::from_fn(width, height, |x, y| {
            Luma([if is_ink(x, y) { FOREGROUND } else { BACKGROUND }])
        });
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Whether `(x, y)` is ink. Panics if out of bounds, like `GrayImage`.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.pixels.get_pixel(x, y).0[0] != BACKGROUND
    }

    /// Mark `(x, y)` as ink or paper.
    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        let value = if ink { FOREGROUND } else { BACKGROUND };
        self.pixels.put_pixel(x, y, Luma([value]));
    }

    /// Total number of ink pixels.
    pub fn foreground_count(&self) -> usize {
        self.pixels.pixels().filter(|p| p.0[0] != BACKGROUND).count()
    }

    /// Iterate over `(x, y)` of every ink pixel in row-major order.
    pub fn foreground_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.pixels
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] != BACKGROUND)
            .map(|(x, y, _)| (x, y))
    }

    /// Raw mask buffer (ink = 255).
    pub fn as_gray(&self) -> &GrayImage {
        &self.pixels
    }

    /// Render the mask as a scan would look: dark ink (0) on white paper (255).
    pub fn to_ink_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            Luma([if self.is_foreground(x, y) { 0 } else { 255 }])
        })
    }
}
