// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometry — contour regions and least-squares line fitting.

pub mod contours;
pub mod fit;

pub use contours::{NOISE_FLOOR_AREA, Region, find_regions};
pub use fit::{LineDirection, LineFit, PointMoments};
