// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preprocessing — grayscale conversion and automatic (Otsu) binarization.

pub mod binarize;

pub use binarize::{ImagePreprocessor, Preprocessed, binarize, otsu_threshold, to_grayscale};
