// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pen pressure — overall darkness of the grayscale scan.

use graphia_core::PenPressure;
use image::GrayImage;

/// Mean intensities strictly below this read as heavy pressure.
pub const HEAVY_PRESSURE_INTENSITY: f64 = 100.0;

/// Mean pixel intensity. An image without pixels reads as blank paper (255).
pub fn mean_intensity(gray: &GrayImage) -> f64 {
    let total = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return 255.0;
    }
    let sum: u64 = gray.pixels().map(|p| p.0[0] as u64).sum();
    sum as f64 / total as f64
}

/// Two-way split with no middle band; exactly 100 is light.
pub fn classify_pen_pressure(mean_intensity: f64) -> PenPressure {
    if mean_intensity < HEAVY_PRESSURE_INTENSITY {
        PenPressure::Heavy
    } else {
        PenPressure::Light
    }
}

pub fn estimate_pen_pressure(gray: &GrayImage) -> (PenPressure, f64) {
    let mean = mean_intensity(gray);
    (classify_pen_pressure(mean), mean)
}
