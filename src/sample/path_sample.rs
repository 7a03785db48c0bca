use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::{
    core::{BezPath, Complex64, Point, to_complex, to_point},
    error::{EpicycleError, EpicycleResult},
};

const ARCLEN_ACCURACY: f64 = 1e-7;

/// One period of a closed path, as complex samples `x + iy` in traversal order.
///
/// The sequence is never empty and every coordinate is finite. The last sample implicitly
/// wraps around to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSample {
    points: Vec<Complex64>,
}

impl PathSample {
    /// Wrap complex samples, rejecting an empty sequence or non-finite coordinates.
    pub fn from_complex(points: Vec<Complex64>) -> EpicycleResult<Self> {
        if points.is_empty() {
            return Err(EpicycleError::validation(
                "path sample must contain at least one point",
            ));
        }
        if let Some(idx) = points.iter().position(|c| !(c.re.is_finite() && c.im.is_finite())) {
            return Err(EpicycleError::validation(format!(
                "path sample point {idx} is not finite"
            )));
        }
        Ok(Self { points })
    }

    /// Build a sample from plane points.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> EpicycleResult<Self> {
        Self::from_complex(points.into_iter().map(to_complex).collect())
    }

    /// Sample `n` points evenly spaced by arc length along `path`.
    ///
    /// Subpaths are walked in document order as one continuous traversal, closing segments
    /// included. The first sample is the start of the first non-degenerate segment.
    pub fn from_bez_path(path: &BezPath, n: usize) -> EpicycleResult<Self> {
        if n == 0 {
            return Err(EpicycleError::validation("sample count must be > 0"));
        }

        let segs: Vec<(PathSeg, f64)> = path
            .segments()
            .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
            .filter(|(_, len)| *len > 0.0)
            .collect();
        let total: f64 = segs.iter().map(|(_, len)| len).sum();
        if segs.is_empty() || !total.is_finite() {
            return Err(EpicycleError::validation(
                "path must have a finite, non-zero length",
            ));
        }

        let step = total / n as f64;
        let mut out = Vec::with_capacity(n);
        let mut seg_idx = 0usize;
        let mut seg_start = 0.0;
        for i in 0..n {
            let target = i as f64 * step;
            while seg_idx + 1 < segs.len() && seg_start + segs[seg_idx].1 <= target {
                seg_start += segs[seg_idx].1;
                seg_idx += 1;
            }
            let (seg, len) = segs[seg_idx];
            let local = (target - seg_start).clamp(0.0, len);
            let t = seg.inv_arclen(local, ARCLEN_ACCURACY);
            out.push(to_complex(seg.eval(t)));
        }

        Self::from_complex(out)
    }

    /// Number of samples `N` (always at least 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.points
    }

    /// Samples as plane points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied().map(to_point)
    }

    /// Mean of all samples (the value of the DC term).
    pub fn centroid(&self) -> Complex64 {
        self.points.iter().sum::<Complex64>() / self.points.len() as f64
    }

    /// Center of the axis-aligned bounding box of the samples.
    pub fn bounding_center(&self) -> Complex64 {
        let (mut min, mut max) = (self.points[0], self.points[0]);
        for c in &self.points[1..] {
            min = Complex64::new(min.re.min(c.re), min.im.min(c.im));
            max = Complex64::new(max.re.max(c.re), max.im.max(c.im));
        }
        (min + max) * 0.5
    }

    /// Translate every sample so the bounding-box center sits at the origin.
    pub fn centered(&self) -> Self {
        let shift = self.bounding_center();
        Self {
            points: self.points.iter().map(|c| c - shift).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/path_sample.rs"]
mod tests;
