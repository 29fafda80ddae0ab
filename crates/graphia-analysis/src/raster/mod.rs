// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — validated input images and binary ink masks.

pub mod image;
pub mod mask;

pub use self::image::RasterImage;
pub use mask::BinaryMask;
