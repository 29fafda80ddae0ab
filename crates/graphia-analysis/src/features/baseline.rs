// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Baseline — linear trend of the per-row ink centroid.

use graphia_core::Baseline;
use tracing::debug;

use crate::geometry::LineFit;
use crate::raster::BinaryMask;

pub const RISING_SLOPE: f64 = 0.5;
pub const FALLING_SLOPE: f64 = -0.5;
/// Slopes within ±this (inclusive) are straight.
pub const STRAIGHT_SLOPE: f64 = 0.1;

/// Mean ink column of every row. Rows without ink take the horizontal
/// midpoint so the fit stays defined.
pub fn row_centroids(mask: &BinaryMask) -> Vec<f64> {
    let (width, height) = mask.dimensions();
    let midpoint = width as f64 / 2.0;

    (0..height)
        .map(|y| {
            let (count, sum) = (0..width)
                .filter(|&x| mask.is_foreground(x, y))
                .fold((0u64, 0u64), |(count, sum), x| (count + 1, sum + x as u64));
            if count == 0 {
                midpoint
            } else {
                sum as f64 / count as f64
            }
        })
        .collect()
}

/// Ordered thresholds: rising and falling are tested first, then straight,
/// and whatever is left (0.1 < |slope| <= 0.5) is erratic.
pub fn classify_baseline(slope: f64) -> Baseline {
    if slope > RISING_SLOPE {
        Baseline::Rising
    } else if slope < FALLING_SLOPE {
        Baseline::Falling
    } else if slope.abs() <= STRAIGHT_SLOPE {
        Baseline::Straight
    } else {
        Baseline::Erratic
    }
}

/// Fit the row centroids against row index and classify the slope. Masks
/// with fewer than two rows have slope 0.
pub fn estimate_baseline(mask: &BinaryMask) -> (Baseline, f64) {
    let centroids = row_centroids(mask);
    let slope = LineFit::over_index(&centroids).map_or(0.0, |fit| fit.slope);
    debug!(rows = centroids.len(), slope, "Baseline fitted");
    (classify_baseline(slope), slope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_increasing_per_row_is_rising() {
        let mask = BinaryMask::from_fn(80, 60, |x, y| x == y);
        let (baseline, slope) = estimate_baseline(&mask);
        assert_eq!(baseline, Baseline::Rising);
        assert!((slope - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_decreasing_per_row_is_falling() {
        let mask = BinaryMask::from_fn(80, 60, |x, y| x + y == 70);
        let (baseline, slope) = estimate_baseline(&mask);
        assert_eq!(baseline, Baseline::Falling);
        assert!((slope + 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_centroid_is_straight() {
        let mask = BinaryMask::from_fn(50, 40, |x, _| (10..20).contains(&x));
        assert_eq!(estimate_baseline(&mask), (Baseline::Straight, 0.0));
    }

    #[test]
    fn blank_rows_use_midpoint() {
        let mask = BinaryMask::from_fn(10, 3, |x, y| y == 1 && x == 9);
        assert_eq!(row_centroids(&mask), vec![5.0, 9.0, 5.0]);
        assert_eq!(estimate_baseline(&BinaryMask::blank(30, 30)).0, Baseline::Straight);
    }

    #[test]
    fn single_row_has_zero_slope() {
        let mask = BinaryMask::from_fn(10, 1, |x, _| x == 2);
        assert_eq!(estimate_baseline(&mask), (Baseline::Straight, 0.0));
    }

    #[test]
    fn middle_bands_fall_through_to_erratic() {
        assert_eq!(classify_baseline(0.3), Baseline::Erratic);
        assert_eq!(classify_baseline(-0.3), Baseline::Erratic);
        assert_eq!(classify_baseline(0.5), Baseline::Erratic);
        assert_eq!(classify_baseline(-0.5), Baseline::Erratic);
        assert_eq!(classify_baseline(0.1), Baseline::Straight);
        assert_eq!(classify_baseline(-0.1), Baseline::Straight);
        assert_eq!(classify_baseline(0.11), Baseline::Erratic);
        assert_eq!(classify_baseline(0.51), Baseline::Rising);
        assert_eq!(classify_baseline(-0.51), Baseline::Falling);
    }
}
