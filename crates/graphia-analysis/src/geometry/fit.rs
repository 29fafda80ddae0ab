// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Least-squares fits: a first-degree polynomial over an indexed sequence, and
// the dominant direction of a 2-D point cloud.

/// `value ≈ slope * index + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    /// Ordinary least squares of `values[i]` against `i`.
    ///
    /// Returns `None` for fewer than two samples, where the slope is
    /// undetermined.
    pub fn over_index(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 2 {
            return None;
        }
        let n_f = n as f64;
        let mean_x = (n_f - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n_f;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            sxy += dx * (y - mean_y);
            sxx += dx * dx;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }
}

/// A line through `(x0, y0)` with unit direction `(vx, vy)`, `vx >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDirection {
    pub vx: f64,
    pub vy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl LineDirection {
    /// Orientation of the direction in radians, in `(-π/2, π/2]`.
    pub fn orientation(&self) -> f64 {
        self.vy.atan2(self.vx)
    }
}

/// Running second-order moments of a point cloud.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointMoments {
    count: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_yy: f64,
    sum_xy: f64,
}

impl PointMoments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.count += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xx += x * x;
        self.sum_yy += y * y;
        self.sum_xy += x * y;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Total least-squares (L2) line through the accumulated points.
    ///
    /// The direction is the principal axis of the covariance, taken as
    /// `t = atan2(2·cov(x,y), var(x) − var(y)) / 2`, so `vx = cos t >= 0`.
    /// A single point or an isotropic cloud gives `t = 0`.
    pub fn fit_line(&self) -> Option<LineDirection> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let mean_x = self.sum_x / n;
        let mean_y = self.sum_y / n;
        let var_x = self.sum_xx / n - mean_x * mean_x;
        let var_y = self.sum_yy / n - mean_y * mean_y;
        let cov_xy = self.sum_xy / n - mean_x * mean_y;

        let t = (2.0 * cov_xy).atan2(var_x - var_y) / 2.0;
        Some(LineDirection {
            vx: t.cos(),
            vy: t.sin(),
            x0: mean_x,
            y0: mean_y,
        })
    }
}

impl FromIterator<(f64, f64)> for PointMoments {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut moments = Self::new();
        for (x, y) in iter {
            moments.push(x, y);
        }
        moments
    }
}
