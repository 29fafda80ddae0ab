// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contour metrics — outer ink boundaries and their bounding geometry.

use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::point::Point;
use tracing::{debug, instrument};

use crate::raster::BinaryMask;

/// Regions enclosing this many square pixels or fewer are treated as specks.
pub const NOISE_FLOOR_AREA: f64 = 50.0;

/// A connected blob of ink, described by its outer boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Area enclosed by the boundary polygon (through pixel centres).
    pub area: f64,
}

/// Trace the outermost ink boundaries and keep those above the noise floor.
///
/// Holes and boundaries nested inside holes are ignored. Ink touching the
/// image edge counts like any other ink. Regions come back in discovery order
/// (raster scan of each boundary's first pixel).
#[instrument(skip_all, fields(width = mask.width(), height = mask.height()))]
pub fn find_regions(mask: &BinaryMask) -> Vec<Region> {
    // The tracer only recognises an outer border with background outside it,
    // so the mask is traced inside a one-pixel background frame.
    let contours: Vec<Contour<i32>> = find_contours(&framed(mask));
    let traced = contours.len();

    let regions: Vec<Region> = contours
        .iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter_map(|c| region_from_boundary(&c.points, 1))
        .filter(|r| r.area > NOISE_FLOOR_AREA)
        .collect();

    debug!(traced, kept = regions.len(), "Contour regions extracted");
    regions
}

/// Copy of the mask with a background border of one pixel on every side.
fn framed(mask: &BinaryMask) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width + 2, height + 2);
    image::imageops::replace(&mut out, mask.as_gray(), 1, 1);
    out
}

/// Bounding box and enclosed area of a closed boundary traced with `offset`
/// pixels of framing.
fn region_from_boundary(points: &[Point<i32>], offset: i32) -> Option<Region> {
    let first = points.first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Some(Region {
        x: (min_x - offset) as u32,
        y: (min_y - offset) as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
        area: shoelace_area(points),
    })
}

/// Area of a closed polygon by the shoelace formula. Vertex order (CW or
/// CCW) does not matter.
pub fn shoelace_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice_area: i64 = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice_area += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    twice_area.abs() as f64 / 2.0
}
