// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Word spacing — distance between fully empty columns.
//
// This is a coarse heuristic: it measures how far apart the ink-free columns
// sit, which mixes letter and word gaps. It is kept as calibrated.

use graphia_core::WordSpacing;
use tracing::debug;

use crate::raster::BinaryMask;

/// Mean gaps strictly above this read as far-spaced words.
pub const FAR_SPACING_GAP: f64 = 15.0;

/// Ink pixel count of every column.
pub fn column_profile(mask: &BinaryMask) -> Vec<u32> {
    let (width, height) = mask.dimensions();
    (0..width)
        .map(|x| (0..height).filter(|&y| mask.is_foreground(x, y)).count() as u32)
        .collect()
}

/// Indices of columns containing no ink.
pub fn empty_columns(profile: &[u32]) -> Vec<usize> {
    profile
        .iter()
        .enumerate()
        .filter(|&(_, &ink)| ink == 0)
        .map(|(x, _)| x)
        .collect()
}

/// Mean difference between consecutive empty-column indices; 0 when fewer
/// than two columns are empty.
pub fn mean_gap(empty: &[usize]) -> f64 {
    if empty.len() < 2 {
        return 0.0;
    }
    let total: usize = empty.windows(2).map(|w| w[1] - w[0]).sum();
    total as f64 / (empty.len() - 1) as f64
}

pub fn classify_word_spacing(mean_gap: f64) -> WordSpacing {
    if mean_gap > FAR_SPACING_GAP {
        WordSpacing::Far
    } else {
        WordSpacing::Close
    }
}

pub fn estimate_word_spacing(mask: &BinaryMask) -> (WordSpacing, f64) {
    let empty = empty_columns(&column_profile(mask));
    let gap = mean_gap(&empty);
    debug!(empty_columns = empty.len(), mean_gap = gap, "Word spacing measured");
    (classify_word_spacing(gap), gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ink everywhere except the listed columns.
    fn inked_except(width: u32, empty: &[u32]) -> BinaryMask {
        BinaryMask::from_fn(width, 10, |x, _| !empty.contains(&x))
    }

    #[test]
    fn blank_mask_is_close() {
        // Every column is empty, so consecutive gaps are all 1.
        assert_eq!(estimate_word_spacing(&BinaryMask::blank(40, 10)), (WordSpacing::Close, 1.0));
    }

    #[test]
    fn solid_ink_has_no_gaps() {
        assert_eq!(estimate_word_spacing(&inked_except(40, &[])), (WordSpacing::Close, 0.0));
        assert_eq!(estimate_word_spacing(&inked_except(40, &[12])), (WordSpacing::Close, 0.0));
    }

    #[test]
    fn gaps_twenty_columns_apart_are_far() {
        let mask = inked_except(70, &[0, 20, 40, 60]);
        assert_eq!(estimate_word_spacing(&mask), (WordSpacing::Far, 20.0));
    }

    #[test]
    fn gaps_five_columns_apart_are_close() {
        let mask = inked_except(30, &[0, 5, 10, 15, 20, 25]);
        assert_eq!(estimate_word_spacing(&mask), (WordSpacing::Close, 5.0));
    }

    #[test]
    fn wide_blank_runs_pull_the_mean_down() {
        // Two 10-column blocks with a 20-column blank run between them.
        let mask = BinaryMask::from_fn(42, 8, |x, _| (1..11).contains(&x) || (31..41).contains(&x));
        let empty = empty_columns(&column_profile(&mask));
        assert_eq!(empty.len(), 22);
        assert!((mean_gap(&empty) - 41.0 / 21.0).abs() < 1e-12);
        assert_eq!(estimate_word_spacing(&mask).0, WordSpacing::Close);
    }

    #[test]
    fn boundary_value_is_close() {
        assert_eq!(classify_word_spacing(15.0), WordSpacing::Close);
        assert_eq!(classify_word_spacing(15.01), WordSpacing::Far);
    }
}
