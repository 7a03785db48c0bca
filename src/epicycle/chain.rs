use std::f64::consts::TAU;

use crate::{
    foundation::core::{BezPath, Complex64, Point, to_point},
    foundation::error::{EpicycleError, EpicycleResult},
    fourier::select::RotatingVector,
};

/// Joints of the epicycle chain at parameter `theta`.
///
/// The first joint is `origin`; each following joint adds the next vector, so the last
/// one is the pen tip. The result has `vectors.len() + 1` points.
pub fn chain_joints(vectors: &[RotatingVector], theta: f64, origin: Complex64) -> Vec<Point> {
    let mut joints = Vec::with_capacity(vectors.len() + 1);
    let mut acc = origin;
    joints.push(to_point(acc));
    for v in vectors {
        acc += v.at(theta);
        joints.push(to_point(acc));
    }
    joints
}

/// Pen tip of the chain at parameter `theta`.
pub fn pen_tip(vectors: &[RotatingVector], theta: f64, origin: Complex64) -> Complex64 {
    vectors.iter().fold(origin, |acc, v| acc + v.at(theta))
}

/// Closed outline traced by the pen tip over one period, sampled at `points` evenly spaced
/// parameters in `[0, 2*pi)`.
#[tracing::instrument(skip(vectors), fields(vectors = vectors.len()))]
pub fn reconstruct_outline(
    vectors: &[RotatingVector],
    points: usize,
    origin: Complex64,
) -> EpicycleResult<BezPath> {
    if points == 0 {
        return Err(EpicycleError::validation("outline needs at least one point"));
    }

    let mut path = BezPath::new();
    for i in 0..points {
        let theta = TAU * i as f64 / points as f64;
        let p = to_point(pen_tip(vectors, theta, origin));
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/epicycle/chain.rs"]
mod tests;
