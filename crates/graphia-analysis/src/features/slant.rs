// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slant — dominant direction of the ink pixel cloud.

use graphia_core::Slant;
use tracing::debug;

use crate::geometry::PointMoments;
use crate::raster::BinaryMask;

/// At least this many ink pixels are needed before a direction is fitted
/// (strictly more than this count).
pub const MIN_SLANT_PIXELS: usize = 50;

/// Direction components beyond ±this classify as a slant.
pub const SLANT_THRESHOLD: f64 = 0.3;

/// Fit a direction through all ink pixels and classify it.
///
/// Pixels enter the fit as `(row, column)` pairs, and the value classified is
/// the column component of the unit direction: positive when the column grows
/// with the row. Returns the component alongside the label, or `None` with
/// [`Slant::Unknown`] when there is too little ink.
pub fn estimate_slant(mask: &BinaryMask) -> (Slant, Option<f64>) {
    let moments: PointMoments = mask
        .foreground_pixels()
        .map(|(x, y)| (y as f64, x as f64))
        .collect();

    if moments.count() <= MIN_SLANT_PIXELS {
        debug!(ink = moments.count(), "Too little ink for a slant fit");
        return (Slant::Unknown, None);
    }

    match moments.fit_line() {
        Some(line) => {
            debug!(component = line.vy, orientation = line.orientation(), "Slant line fitted");
            (classify_slant(line.vy), Some(line.vy))
        }
        None => (Slant::Unknown, None),
    }
}

pub fn classify_slant(component: f64) -> Slant {
    if component > SLANT_THRESHOLD {
        Slant::Right
    } else if component < -SLANT_THRESHOLD {
        Slant::Left
    } else {
        Slant::Vertical
    }
}
