// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Feature extractor — runs the preprocessor once and the five estimators over
// its output, then assembles the descriptor.

use graphia_core::FeatureDescriptor;
use tracing::{info, instrument};

use crate::geometry::find_regions;
use crate::preprocess::{ImagePreprocessor, Preprocessed};
use crate::raster::RasterImage;

use super::baseline::estimate_baseline;
use super::letter_size::estimate_letter_size;
use super::pen_pressure::estimate_pen_pressure;
use super::slant::estimate_slant;
use super::word_spacing::estimate_word_spacing;

/// Derives a [`FeatureDescriptor`] from a handwriting scan.
///
/// Stateless: one extractor can serve any number of images, from any number
/// of threads.
///
/// ```ignore
/// let raster = RasterImage::from_dynamic(image::open("sample.jpg")?)?;
/// let features = FeatureExtractor::new().extract(&raster);
/// println!("{} / {}", features.letter_size, features.slant);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureExtractor {
    preprocessor: ImagePreprocessor,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binarize the scan and measure all five features.
    #[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
    pub fn extract(&self, raster: &RasterImage) -> FeatureDescriptor {
        let prepared = self.preprocessor.run(raster);
        let descriptor = describe(&prepared);
        info!(
            letter_size = %descriptor.letter_size,
            slant = %descriptor.slant,
            pen_pressure = %descriptor.pen_pressure,
            baseline = %descriptor.baseline,
            word_spacing = %descriptor.word_spacing,
            "Handwriting features extracted"
        );
        descriptor
    }
}

/// Run the estimators over an already prepared grayscale/mask pair.
///
/// The estimators share nothing, so the order here is immaterial.
pub fn describe(prepared: &Preprocessed) -> FeatureDescriptor {
    let regions = find_regions(&prepared.mask);
    let (letter_size, mean_letter_height) = estimate_letter_size(&regions);
    let (slant, slant_angle) = estimate_slant(&prepared.mask);
    let (pen_pressure, mean_intensity) = estimate_pen_pressure(&prepared.gray);
    let (baseline, baseline_slope) = estimate_baseline(&prepared.mask);
    let (word_spacing, mean_word_gap) = estimate_word_spacing(&prepared.mask);

    FeatureDescriptor {
        letter_size,
        mean_letter_height,
        region_count: regions.len(),
        slant,
        slant_angle,
        pen_pressure,
        mean_intensity,
        baseline,
        baseline_slope,
        word_spacing,
        mean_word_gap,
    }
}
