// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// graphia-analysis — Handwriting feature extraction.
//
// Turns a scanned handwriting image into five stylistic descriptors: letter
// size (contour heights), slant (line fit through the ink), pen pressure
// (mean intensity), baseline (regression of row centroids) and word spacing
// (gaps between empty columns). Everything here is a pure function of the
// input image.

pub mod features;
pub mod geometry;
pub mod preprocess;
pub mod raster;

// Re-export the primary entry points so callers can use
// `graphia_analysis::FeatureExtractor` etc.
pub use features::FeatureExtractor;
pub use preprocess::{ImagePreprocessor, Preprocessed};
pub use raster::{BinaryMask, RasterImage};
