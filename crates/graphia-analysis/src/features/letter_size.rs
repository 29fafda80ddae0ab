// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Letter size — average height of the ink regions.

use graphia_core::LetterSize;

use crate::geometry::Region;

/// Mean region heights above this are large writing.
pub const LARGE_LETTER_HEIGHT: f64 = 50.0;
/// Mean region heights below this are small writing.
pub const SMALL_LETTER_HEIGHT: f64 = 20.0;

/// Mean bounding-box height, or 0 for no regions.
pub fn mean_height(regions: &[Region]) -> f64 {
    if regions.is_empty() {
        return 0.0;
    }
    regions.iter().map(|r| r.height as f64).sum::<f64>() / regions.len() as f64
}

pub fn classify_letter_size(mean_height: f64) -> LetterSize {
    if mean_height > LARGE_LETTER_HEIGHT {
        LetterSize::Large
    } else if mean_height < SMALL_LETTER_HEIGHT {
        LetterSize::Small
    } else {
        LetterSize::Average
    }
}

/// Classify the regions' mean height. No regions means a mean of 0, which
/// lands in the small bucket.
pub fn estimate_letter_size(regions: &[Region]) -> (LetterSize, f64) {
    let mean = mean_height(regions);
    (classify_letter_size(mean), mean)
}
