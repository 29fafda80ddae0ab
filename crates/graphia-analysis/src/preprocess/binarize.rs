// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale conversion and Otsu binarization of handwriting scans.

use image::{DynamicImage, GrayImage, Luma};
use tracing::{debug, instrument};

use crate::raster::{BinaryMask, RasterImage};

/// ITU-R BT.601 luma weights (R, G, B) in 14-bit fixed point.
const LUMA_WEIGHTS: [u32; 3] = [4899, 9617, 1868];
const LUMA_SHIFT: u32 = 14;

/// The grayscale/mask pair every estimator consumes.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub gray: GrayImage,
    pub mask: BinaryMask,
    /// Otsu threshold; intensities at or below it are ink.
    pub threshold: u8,
}

/// Turns a colour scan into a grayscale image and an inverted binary mask
/// (dark ink becomes foreground).
///
/// Nothing here is tunable: the luma weights are fixed and the threshold is
/// chosen from the histogram.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImagePreprocessor;

impl ImagePreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Run grayscale conversion then binarization.
    #[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
    pub fn run(&self, raster: &RasterImage) -> Preprocessed {
        let gray = to_grayscale(raster);
        let threshold = otsu_threshold(&gray);
        let mask = apply_threshold(&gray, threshold);
        debug!(threshold, ink = mask.foreground_count(), "Binarization complete");
        Preprocessed {
            gray,
            mask,
            threshold,
        }
    }
}

/// Convert a raster to 8-bit intensity with BT.601 weights, using the same
/// rounded fixed-point arithmetic as OpenCV's `cvtColor`. Intensity rasters
/// are copied unchanged.
pub fn to_grayscale(raster: &RasterImage) -> GrayImage {
    match raster.as_dynamic() {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageRgb8(rgb) => GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
            let [r, g, b] = rgb.get_pixel(x, y).0;
            Luma([luma(r, g, b)])
        }),
        // RasterImage only ever holds the two variants above.
        other => other.to_luma8(),
    }
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_WEIGHTS[0] * r as u32
        + LUMA_WEIGHTS[1] * g as u32
        + LUMA_WEIGHTS[2] * b as u32
        + (1 << (LUMA_SHIFT - 1));
    // The weights sum to 1 << LUMA_SHIFT, so the result never exceeds 255.
    (weighted >> LUMA_SHIFT) as u8
}

/// Otsu binarization with inversion: ink (dark) becomes foreground.
pub fn binarize(gray: &GrayImage) -> BinaryMask {
    apply_threshold(gray, otsu_threshold(gray))
}

/// Pixels at or below `threshold` become foreground.
pub fn apply_threshold(gray: &GrayImage, threshold: u8) -> BinaryMask {
    BinaryMask::from_fn(gray.width(), gray.height(), |x, y| {
        gray.get_pixel(x, y).0[0] <= threshold
    })
}

/// Compute the Otsu threshold for a grayscale image.
///
/// Returns the level `t` that maximises the between-class variance of the
/// classes `<= t` and `> t`. The first maximum wins; an image with a single
/// intensity level (or no pixels) yields 0.
pub fn otsu_threshold(gray: &GrayImage) -> u8 {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let total_pixels = gray.width() as u64 * gray.height() as u64;
    if total_pixels == 0 {
        return 0;
    }

    let mut sum_total: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_total += i as f64 * count as f64;
    }

    let mut sum_background: f64 = 0.0;
    let mut weight_background: u64 = 0;
    let mut max_variance: f64 = 0.0;
    let mut best_threshold: u8 = 0;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count;
        sum_background += t as f64 * count as f64;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total_pixels - weight_background;
        if weight_foreground == 0 {
            break;
        }

        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_total - sum_background) / weight_foreground as f64;

        let between_variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if between_variance > max_variance {
            max_variance = between_variance;
            best_threshold = t as u8;
        }
    }

    best_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn two_tone(dark: u8, light: u8) -> GrayImage {
        GrayImage::from_fn(10, 10, |x, _| Luma([if x < 5 { dark } else { light }]))
    }

    #[test]
    fn otsu_separates_two_tones() {
        let gray = two_tone(25, 225);
        let t = otsu_threshold(&gray);
        assert!((25..225).contains(&t), "threshold {t} should split the tones");

        let mask = binarize(&gray);
        assert!(mask.is_foreground(0, 0));
        assert!(!mask.is_foreground(9, 9));
        assert_eq!(mask.foreground_count(), 50);
    }

    #[test]
    fn uniform_white_page_has_no_ink() {
        let gray = GrayImage::from_pixel(20, 20, Luma([255]));
        assert_eq!(otsu_threshold(&gray), 0);
        assert_eq!(binarize(&gray).foreground_count(), 0);
    }

    #[test]
    fn rebinarizing_a_mask_reproduces_it() {
        let gray = GrayImage::from_fn(32, 16, |x, y| {
            Luma([if (x / 4 + y / 3) % 2 == 0 { 40 } else { 210 }])
        });
        let mask = binarize(&gray);
        assert!(mask.foreground_count() > 0);

        let again = binarize(&mask.to_ink_image());
        assert_eq!(again, mask);
    }

    #[test]
    fn rebinarizing_blank_mask_stays_blank() {
        let mask = BinaryMask::blank(12, 7);
        assert_eq!(binarize(&mask.to_ink_image()), mask);
    }

    #[test]
    fn grayscale_uses_bt601_weights() {
        let rgb = RgbImage::from_fn(3, 1, |x, _| match x {
            0 => Rgb([255, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let raster = RasterImage::from_rgb(rgb).unwrap();
        let gray = to_grayscale(&raster);
        assert_eq!(gray.get_pixel(0, 0).0[0], 76);
        assert_eq!(gray.get_pixel(1, 0).0[0], 150);
        assert_eq!(gray.get_pixel(2, 0).0[0], 29);
    }

    #[test]
    fn grayscale_rounds_like_fixed_point_conversion() {
        // 0.587*27 + 0.114*225 = 41.499 in floating point; the 14-bit
        // fixed-point conversion lands on 42.
        assert_eq!(luma(0, 27, 225), 42);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);

        let raster = RasterImage::from_rgb(RgbImage::from_pixel(1, 1, Rgb([0, 27, 225]))).unwrap();
        assert_eq!(to_grayscale(&raster).get_pixel(0, 0).0[0], 42);
    }

    #[test]
    fn preprocessor_marks_dark_strokes_as_ink() {
        let rgb = RgbImage::from_fn(40, 20, |x, y| {
            if (10..30).contains(&x) && (8..12).contains(&y) {
                Rgb([20, 20, 30])
            } else {
                Rgb([245, 240, 235])
            }
        });
        let raster = RasterImage::from_rgb(rgb).unwrap();
        let out = ImagePreprocessor::new().run(&raster);
        assert_eq!(out.gray.dimensions(), (40, 20));
        assert_eq!(out.mask.foreground_count(), 80);
        assert!(out.mask.is_foreground(15, 10));
        assert!(!out.mask.is_foreground(0, 0));
    }
}
